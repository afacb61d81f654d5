use anyhow::Result;

use crate::data::{GrammarData, WHITELIST};
use crate::fst::string_file;
use crate::grammar::graph_utils::field;
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 白名单：固定缩写直接映射为读法
///
/// "т.е." -> whitelist { name: "то есть" }
pub struct WhiteListFst {
    graph: GraphFst,
}

impl WhiteListFst {
    pub fn new(data: &mut GrammarData, deterministic: bool) -> Result<Self> {
        let graph = GraphFst::new("whitelist", GrammarKind::Classify, deterministic);
        let whitelist = string_file(&data.lexicon(WHITELIST)?);
        let fst = graph.add_tokens(field("name", whitelist));
        Ok(Self {
            graph: graph.with_fst(fst),
        })
    }
}

impl Grammar for WhiteListFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}
