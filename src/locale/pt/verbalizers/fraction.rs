use crate::fst::{accept, concat, insert};
use crate::grammar::graph_utils::{delete_field, field_value, DELETE_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 分数渲染器
///
/// fraction { integer_part: "2" numerator: "3" denominator: "4" } -> 2 3/4
pub struct FractionFst {
    graph: GraphFst,
}

impl FractionFst {
    pub fn new(deterministic: bool) -> Self {
        let graph = GraphFst::new("fraction", GrammarKind::Verbalize, deterministic);

        let negative = concat([delete_field("negative", accept("-")), DELETE_SPACE.clone()]);
        let integer = concat([
            delete_field("integer_part", field_value()),
            DELETE_SPACE.clone(),
            insert(" "),
        ]);
        let fraction = concat([
            delete_field("numerator", field_value()),
            DELETE_SPACE.clone(),
            insert("/"),
            delete_field("denominator", field_value()),
        ]);

        let fst = graph.delete_tokens(concat([negative.optional(), integer.optional(), fraction]));

        Self {
            graph: graph.with_fst(fst),
        }
    }
}

impl Grammar for FractionFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbalize_fraction() {
        let f = FractionFst::new(true);
        assert_eq!(
            f.fst()
                .best("fraction { integer_part: \"2\" numerator: \"3\" denominator: \"4\" }")
                .unwrap()
                .output,
            "2 3/4"
        );
        assert_eq!(
            f.fst()
                .best("fraction { negative: \"-\" numerator: \"1\" denominator: \"8\" }")
                .unwrap()
                .output,
            "-1/8"
        );
    }
}
