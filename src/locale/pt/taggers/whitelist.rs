use anyhow::Result;

use crate::data::{GrammarData, WHITELIST};
use crate::fst::string_file;
use crate::grammar::graph_utils::field;
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 白名单标注器：词表中的整段文本直接替换
///
/// "doutor" -> whitelist { name: "Dr." }
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
