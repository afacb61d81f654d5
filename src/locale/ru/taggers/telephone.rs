use crate::fst::{accept, concat};
use crate::grammar::graph_utils::{field, DIGIT};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 电话号码标注器
///
/// 以 "-" 分隔、至少三组数字，可带国家码前缀 "+"：
/// "+7-913-983-56-01" -> telephone { number_part: "+7-913-983-56-01" }
pub struct TelephoneFst {
    graph: GraphFst,
}

impl TelephoneFst {
    pub fn new(deterministic: bool) -> Self {
        let graph = GraphFst::new("telephone", GrammarKind::Classify, deterministic);

        let group = DIGIT.closure(1, Some(4));
        let number = concat([
            accept("+").optional(),
            group.clone(),
            concat([accept("-"), group]).closure(2, None),
        ]);
        let fst = graph.add_tokens(field("number_part", number));

        Self {
            graph: graph.with_fst(fst),
        }
    }
}

impl Grammar for TelephoneFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}
