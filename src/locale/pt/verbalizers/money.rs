use crate::fst::{concat, insert, union};
use crate::grammar::graph_utils::{delete_field, field_value, DELETE_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::decimal::DecimalFst;

/// 金额渲染器
///
/// - money { currency: "R$" integer_part: "2" fractional_part: "50" } -> R$ 2,50
/// - money { currency: "R$" integer_part: "2" quantity: "milhões" } -> R$ 2 milhões
pub struct MoneyFst {
    graph: GraphFst,
}

impl MoneyFst {
    pub fn new(decimal: &DecimalFst, deterministic: bool) -> Self {
        let graph = GraphFst::new("money", GrammarKind::Verbalize, deterministic);

        let currency = delete_field("currency", field_value());
        let integer = delete_field("integer_part", field_value());
        let cents = concat([
            DELETE_SPACE.clone(),
            insert(","),
            delete_field("fractional_part", field_value()),
        ]);
        let amount = union([
            concat([integer, cents.optional()]),
            decimal.numbers_wo_sign.clone(),
        ]);

        let fst = graph.delete_tokens(concat([
            currency,
            DELETE_SPACE.clone(),
            insert(" "),
            amount,
        ]));

        Self {
            graph: graph.with_fst(fst),
        }
    }
}

impl Grammar for MoneyFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbalize_money() {
        let m = MoneyFst::new(&DecimalFst::new(true), true);
        let cases = [
            ("money { currency: \"R$\" integer_part: \"1\" }", "R$ 1"),
            (
                "money { currency: \"R$\" integer_part: \"2\" fractional_part: \"50\" }",
                "R$ 2,50",
            ),
            (
                "money { currency: \"R$\" integer_part: \"2\" quantity: \"milhões\" }",
                "R$ 2 milhões",
            ),
            (
                "money { currency: \"€\" integer_part: \"1\" morphosyntactic_features: \",\" fractional_part: \"5\" }",
                "€ 1,5",
            ),
        ];
        for (token, expected) in cases {
            assert_eq!(m.fst().best(token).unwrap().output, expected, "{}", token);
        }
    }
}
