use crate::fst::{concat, insert, union};
use crate::grammar::graph_utils::{delete_field, field_value, DELETE_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 电子地址渲染器
///
/// - electronic { username: "joão.silva" domain: "gmail.com" } -> joão.silva@gmail.com
/// - electronic { protocol: "www." domain: "google.com" } -> www.google.com
pub struct ElectronicFst {
    graph: GraphFst,
}

impl ElectronicFst {
    pub fn new(deterministic: bool) -> Self {
        let graph = GraphFst::new("electronic", GrammarKind::Verbalize, deterministic);

        let domain = delete_field("domain", field_value());
        let email = concat([
            delete_field("username", field_value()),
            DELETE_SPACE.clone(),
            insert("@"),
            domain.clone(),
        ]);
        let url = concat([
            delete_field("protocol", field_value()),
            DELETE_SPACE.clone(),
            domain,
        ]);
        let fst = graph.delete_tokens(union([email, url]));

        Self {
            graph: graph.with_fst(fst),
        }
    }
}

impl Grammar for ElectronicFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}
