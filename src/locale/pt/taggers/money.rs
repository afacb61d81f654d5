use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::{concat, delete, insert, string_file, union, Transducer};
use crate::grammar::graph_utils::{field, optional_delimiter, SIGMA};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::cardinal::CardinalFst;
use super::decimal::DecimalFst;

/// 金额标注器
///
/// 书写形式货币符号在前，因此每个货币词条单独成一个分支，先插入符号字段：
/// - "um real" -> money { currency: "R$" integer_part: "1" }
/// - "dois reais e cinquenta centavos" -> money { currency: "R$" integer_part: "2" fractional_part: "50" }
/// - "dois milhões de reais" -> money { currency: "R$" integer_part: "2" quantity: "milhões" }
///
/// 单数货币词只接受数值恰好为 1 的金额，复数货币词接受除 1 以外的所有基数词和任意小数。
pub struct MoneyFst {
    graph: GraphFst,
}

fn currency(symbol: &str) -> Transducer {
    insert(&format!("currency: \"{}\" ", symbol))
}

impl MoneyFst {
    pub fn new(
        cardinal: &CardinalFst,
        decimal: &DecimalFst,
        data: &mut GrammarData,
        deterministic: bool,
    ) -> Result<Self> {
        let graph = GraphFst::new("money", GrammarKind::Classify, deterministic);

        let unit_singular = data.lexicon("money/currency_singular.tsv")?;
        let unit_plural = data.lexicon("money/currency_plural.tsv")?;
        let minor_unit = string_file(&data.lexicon("money/minor_unit.tsv")?);

        let cardinal_graph = &cardinal.cardinal_numbers_default;
        let one = cardinal_graph.compose("1");
        let not_one = cardinal_graph.compose(SIGMA.difference("1"));

        let cents = concat([
            field("fractional_part", &cardinal.graph_two_digits),
            delete(" "),
            delete(minor_unit),
        ]);
        let cents_tail = concat([delete(" e "), insert(" "), cents.clone()]);

        let delimiter = optional_delimiter();
        let unit = |surface: &str| concat([delimiter.clone(), delete(surface)]);

        let mut branches = Vec::new();
        for (surface, symbol) in unit_singular.entries() {
            branches.push(concat([
                currency(symbol),
                field("integer_part", &one),
                unit(surface),
                cents_tail.optional(),
            ]));
        }
        for (surface, symbol) in unit_plural.entries() {
            branches.push(concat([
                currency(symbol),
                field("integer_part", &not_one),
                unit(surface),
                cents_tail.optional(),
            ]));
            branches.push(concat([
                currency(symbol),
                decimal.final_graph_wo_negative.clone(),
                delete(" de").optional(),
                unit(surface),
            ]));
        }

        // 只有辅币时按第一个复数货币计
        if let Some((_, symbol)) = unit_plural.entries().first() {
            branches.push(concat([
                currency(symbol),
                insert("integer_part: \"0\" "),
                cents,
            ]));
        }

        let fst = graph.add_tokens(union(branches));

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
