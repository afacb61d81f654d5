use crate::fst::{concat, insert, union};
use crate::grammar::graph_utils::{delete_field, field_value, DELETE_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 日期渲染器：dd/mm[/aaaa] 或 mm/aaaa
pub struct DateFst {
    graph: GraphFst,
}

impl DateFst {
    pub fn new(deterministic: bool) -> Self {
        let graph = GraphFst::new("date", GrammarKind::Verbalize, deterministic);

        let day = delete_field("day", field_value());
        let month = delete_field("month", field_value());
        let year = concat([
            DELETE_SPACE.clone(),
            insert("/"),
            delete_field("year", field_value()),
        ]);

        let fst = graph.delete_tokens(union([
            concat([
                day,
                DELETE_SPACE.clone(),
                insert("/"),
                month.clone(),
                year.optional(),
            ]),
            concat([month, year]),
        ]));

        Self {
            graph: graph.with_fst(fst),
        }
    }
}

impl Grammar for DateFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}
