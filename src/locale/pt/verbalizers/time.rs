use crate::fst::{concat, insert};
use crate::grammar::graph_utils::{delete_field, field_value, DELETE_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 时间渲染器
///
/// time { hours: "12" minutes: "30" } -> 12:30
pub struct TimeFst {
    graph: GraphFst,
}

impl TimeFst {
    pub fn new(deterministic: bool) -> Self {
        let graph = GraphFst::new("time", GrammarKind::Verbalize, deterministic);

        let fst = graph.delete_tokens(concat([
            delete_field("hours", field_value()),
            DELETE_SPACE.clone(),
            insert(":"),
            delete_field("minutes", field_value()),
        ]));

        Self {
            graph: graph.with_fst(fst),
        }
    }
}

impl Grammar for TimeFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}
