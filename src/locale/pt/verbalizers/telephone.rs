use crate::grammar::graph_utils::{delete_field, field_value};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 电话号码渲染器
///
/// telephone { number_part: "+551198765432" } -> +551198765432
pub struct TelephoneFst {
    graph: GraphFst,
}

impl TelephoneFst {
    pub fn new(deterministic: bool) -> Self {
        let graph = GraphFst::new("telephone", GrammarKind::Verbalize, deterministic);
        let fst = graph.delete_tokens(delete_field("number_part", field_value()));

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
