use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::{concat, cross, delete, insert, string_file, union, Transducer};
use crate::grammar::graph_utils::{field, optional_delimiter, DIGIT};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::cardinal::CardinalFst;

/// 小数标注器
///
/// - "1,5" -> decimal { integer_part: "1" fractional_part: "5" }
/// - "-0.25" -> decimal { negative: "true" integer_part: "0" fractional_part: "25" }
/// - "1,5 млн" -> decimal { integer_part: "1" fractional_part: "5" quantity: "миллиона" }
///
/// 小数位最多三位（десятые / сотые / тысячные）。
pub struct DecimalFst {
    graph: GraphFst,
    pub final_graph_wo_negative: Transducer,
    pub final_graph: Transducer,
}

impl DecimalFst {
    pub fn new(
        cardinal: &CardinalFst,
        data: &mut GrammarData,
        deterministic: bool,
    ) -> Result<Self> {
        let graph = GraphFst::new("decimal", GrammarKind::Classify, deterministic);

        let quantity = string_file(&data.lexicon("numbers/quantity.tsv")?);

        let integer = field("integer_part", &cardinal.cardinal_numbers_default);
        let point = concat([union([delete(","), delete(".")]), insert(" ")]);
        let fractional = field("fractional_part", DIGIT.closure(1, Some(3)));
        let optional_quantity = concat([
            optional_delimiter(),
            insert(" "),
            field("quantity", quantity),
        ])
        .optional();

        let final_graph_wo_negative = concat([integer, point, fractional, optional_quantity]);
        let final_graph = concat([
            cross("-", "negative: \"true\" ").optional(),
            final_graph_wo_negative.clone(),
        ]);
        let fst = graph.add_tokens(&final_graph);

        Ok(Self {
            graph: graph.with_fst(fst),
            final_graph_wo_negative,
            final_graph,
        })
    }
}

impl Grammar for DecimalFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}
