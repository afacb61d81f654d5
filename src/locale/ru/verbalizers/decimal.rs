use crate::fst::{concat, cross, insert, union, Transducer};
use crate::grammar::graph_utils::{
    delete_field, field_value, strip_leading_zeros, DELETE_SPACE, DIGIT,
};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::numbers::{agree, NumberNames};

/// 小数位数对应的分母词干
const FRACTION_STEMS: [(usize, &str); 3] = [(1, "десят"), (2, "сот"), (3, "тысячн")];

/// 小数渲染器
///
/// - decimal { integer_part: "1" fractional_part: "5" } -> одна целая пять десятых
/// - decimal { negative: "true" integer_part: "0" fractional_part: "25" } -> минус ноль целых двадцать пять сотых
/// - decimal { integer_part: "1" fractional_part: "5" quantity: "миллиона" } -> одна целая пять десятых миллиона
pub struct DecimalFst {
    graph: GraphFst,
    /// 不含负号与框架，供金额嵌套词元复用
    pub numbers_wo_sign: Transducer,
}

impl DecimalFst {
    pub fn new(names: &NumberNames, deterministic: bool) -> Self {
        let graph = GraphFst::new("decimal", GrammarKind::Verbalize, deterministic);

        let integer = agree(&names.feminine, " целая", " целых", " целых");

        // 分子的前导零不读，全零读作 "ноль"
        let numerator = union([
            strip_leading_zeros().compose(&names.feminine),
            NumberNames::all_zeros(),
        ]);
        let fraction = union(FRACTION_STEMS.iter().map(|(len, stem)| {
            DIGIT.closure(*len, Some(*len)).compose(agree(
                &numerator,
                &format!(" {}ая", stem),
                &format!(" {}ых", stem),
                &format!(" {}ых", stem),
            ))
        }));

        let quantity = concat([
            DELETE_SPACE.clone(),
            insert(" "),
            delete_field("quantity", field_value()),
        ]);
        let numbers_wo_sign = concat([
            delete_field("integer_part", integer),
            DELETE_SPACE.clone(),
            insert(" "),
            delete_field("fractional_part", fraction),
            quantity.optional(),
        ]);

        let sign = concat([
            delete_field("negative", cross("true", "минус")),
            DELETE_SPACE.clone(),
            insert(" "),
        ]);
        let fst = graph.delete_tokens(concat([sign.optional(), numbers_wo_sign.clone()]));

        Self {
            graph: graph.with_fst(fst),
            numbers_wo_sign,
        }
    }
}

impl Grammar for DecimalFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}
