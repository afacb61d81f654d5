use crate::fst::{accept, concat, cross, union, Transducer};
use crate::grammar::graph_utils::{field, DIGIT};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 基数词标注器
///
/// "-12" -> cardinal { negative: "true" integer: "12" }
pub struct CardinalFst {
    graph: GraphFst,
    /// "0" 或 1..999999 的规范数字串（无前导零）
    pub cardinal_numbers_default: Transducer,
}

impl CardinalFst {
    pub fn new(deterministic: bool) -> Self {
        let graph = GraphFst::new("cardinal", GrammarKind::Classify, deterministic);

        let cardinal_numbers_default = union([
            accept("0"),
            concat([DIGIT.difference("0"), DIGIT.closure(0, Some(5))]),
        ]);

        let negative = cross("-", "negative: \"true\" ");
        let final_graph = concat([
            negative.optional(),
            field("integer", &cardinal_numbers_default),
        ]);
        let fst = graph.add_tokens(final_graph);

        Self {
            graph: graph.with_fst(fst),
            cardinal_numbers_default,
        }
    }
}

impl Grammar for CardinalFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}
