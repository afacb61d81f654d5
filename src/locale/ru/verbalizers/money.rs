use crate::fst::{concat, insert, union};
use crate::grammar::graph_utils::{delete_field, delete_nested, field_value, DELETE_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::decimal::DecimalFst;
use super::numbers::NumberNames;

/// 金额渲染器
///
/// - money { integer_part: "5" currency: "рублей" } -> пять рублей
/// - money { decimal { integer_part: "1" fractional_part: "5" } currency: "долларов" } -> одна целая пять десятых долларов
pub struct MoneyFst {
    graph: GraphFst,
}

impl MoneyFst {
    pub fn new(names: &NumberNames, decimal: &DecimalFst, deterministic: bool) -> Self {
        let graph = GraphFst::new("money", GrammarKind::Verbalize, deterministic);

        let amount = union([
            delete_field("integer_part", &names.masculine),
            delete_nested("decimal", &decimal.numbers_wo_sign),
        ]);
        let currency = concat([
            DELETE_SPACE.clone(),
            insert(" "),
            delete_field("currency", field_value()),
        ]);
        let fst = graph.delete_tokens(concat([amount, currency]));

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
    use crate::data::{DataSource, GrammarData};

    #[test]
    fn test_verbalize_money() {
        let mut data = GrammarData::new("ru", DataSource::Embedded);
        let names = NumberNames::new(&mut data).unwrap();
        let decimal = DecimalFst::new(&names, true);
        let m = MoneyFst::new(&names, &decimal, true);
        assert_eq!(
            m.fst()
                .best("money { integer_part: \"5\" currency: \"рублей\" }")
                .unwrap()
                .output,
            "пять рублей"
        );
        assert_eq!(
            m.fst()
                .best("money { integer_part: \"1\" currency: \"рубль\" }")
                .unwrap()
                .output,
            "один рубль"
        );
        assert_eq!(
            m.fst()
                .best("money { decimal { integer_part: \"1\" fractional_part: \"5\" } currency: \"долларов\" }")
                .unwrap()
                .output,
            "одна целая пять десятых долларов"
        );
    }
}
