use crate::fst::{accept, concat, Transducer};
use crate::grammar::graph_utils::{delete_field, field_value, DELETE_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 基数词渲染器
///
/// cardinal { negative: "-" integer: "23" } -> -23
pub struct CardinalFst {
    graph: GraphFst,
    /// 不含 `cardinal { }` 框架，供度量嵌套词元复用
    pub numbers: Transducer,
}

impl CardinalFst {
    pub fn new(deterministic: bool) -> Self {
        let graph = GraphFst::new("cardinal", GrammarKind::Verbalize, deterministic);

        let negative = concat([delete_field("negative", accept("-")), DELETE_SPACE.clone()]);
        let numbers = concat([negative.optional(), delete_field("integer", field_value())]);
        let fst = graph.delete_tokens(&numbers);

        Self {
            graph: graph.with_fst(fst),
            numbers,
        }
    }
}

impl Grammar for CardinalFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbalize_cardinal() {
        let c = CardinalFst::new(true);
        assert_eq!(
            c.fst().best("cardinal { integer: \"23\" }").unwrap().output,
            "23"
        );
        assert_eq!(
            c.fst()
                .best("cardinal { negative: \"-\" integer: \"5\" }")
                .unwrap()
                .output,
            "-5"
        );
    }
}
