use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::{accept, concat, insert, string_file, union, Transducer};
use crate::grammar::graph_utils::{field, insert_nested, optional_delimiter, SIGMA};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::cardinal::CardinalFst;
use super::decimal::DecimalFst;

/// 金额标注器
///
/// - "1 руб." -> money { integer_part: "1" currency: "рубль" }
/// - "5 руб." -> money { integer_part: "5" currency: "рублей" }
/// - "1,5 $" -> money { decimal { integer_part: "1" fractional_part: "5" } currency: "долларов" }
///
/// 单数货币形式只用于恰好为 1 的金额，其余整数与所有小数都用复数形式。
pub struct MoneyFst {
    graph: GraphFst,
}

fn unit(lexicon: Transducer) -> Transducer {
    concat([
        optional_delimiter(),
        insert(" "),
        field("currency", lexicon),
    ])
}

impl MoneyFst {
    pub fn new(
        cardinal: &CardinalFst,
        decimal: &DecimalFst,
        data: &mut GrammarData,
        deterministic: bool,
    ) -> Result<Self> {
        let graph = GraphFst::new("money", GrammarKind::Classify, deterministic);

        let unit_singular = unit(string_file(&data.lexicon("currency/currency_singular.tsv")?));
        let unit_plural = unit(string_file(&data.lexicon("currency/currency_plural.tsv")?));

        let cardinal_graph = &cardinal.cardinal_numbers_default;
        let one = accept("1").compose(cardinal_graph);
        let not_one = SIGMA.difference("1").compose(cardinal_graph);

        let singular = concat([field("integer_part", one), unit_singular]);
        let plural = concat([field("integer_part", not_one), unit_plural.clone()]);
        let decimal_amount = concat([
            insert_nested("decimal", &decimal.final_graph_wo_negative),
            unit_plural,
        ]);

        let fst = graph.add_tokens(union([singular, plural, decimal_amount]));

        Ok(Self {
            graph: graph.with_fst(fst),
        })
    }
}

impl Grammar for MoneyFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}
