use crate::grammar::graph_utils::{delete_field, field_value};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// whitelist { name: "то есть" } -> то есть
pub struct WhiteListFst {
    graph: GraphFst,
}

impl WhiteListFst {
    pub fn new(deterministic: bool) -> Self {
        let graph = GraphFst::new("whitelist", GrammarKind::Verbalize, deterministic);
        let fst = graph.delete_tokens(delete_field("name", field_value()));
        Self {
            graph: graph.with_fst(fst),
        }
    }
}

impl Grammar for WhiteListFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}
