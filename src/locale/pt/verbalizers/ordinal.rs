use crate::fst::concat;
use crate::grammar::graph_utils::{delete_field, field_value, DELETE_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 序数词渲染器
///
/// ordinal { integer: "21" morphosyntactic_features: "ª" } -> 21ª
pub struct OrdinalFst {
    graph: GraphFst,
}

impl OrdinalFst {
    pub fn new(deterministic: bool) -> Self {
        let graph = GraphFst::new("ordinal", GrammarKind::Verbalize, deterministic);

        let fst = graph.delete_tokens(concat([
            delete_field("integer", field_value()),
            DELETE_SPACE.clone(),
            delete_field("morphosyntactic_features", field_value()),
        ]));

        Self {
            graph: graph.with_fst(fst),
        }
    }
}

impl Grammar for OrdinalFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbalize_ordinal() {
        assert_eq!(
            OrdinalFst::new(true)
                .fst()
                .best("ordinal { integer: \"21\" morphosyntactic_features: \"ª\" }")
                .unwrap()
                .output,
            "21ª"
        );
    }
}
