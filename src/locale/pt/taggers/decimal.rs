use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::{concat, cross, insert, string_file, union, Transducer};
use crate::grammar::graph_utils::{field, strip_leading_zeros, DELETE_EXTRA_SPACE, DELETE_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::cardinal::CardinalFst;

/// 数量级后缀分支
///
/// - 整数 + 后缀："dois milhões" -> integer_part: "2" quantity: "milhões"
/// - 小数 + 后缀："um vírgula cinco milhão" -> integer_part: "1" ... fractional_part: "5" quantity: "milhão"
///
/// 整数部分去掉前导零并要求首位非零，"000 milhões" 不会匹配。
pub fn get_quantity(
    decimal: &Transducer,
    cardinal_up_to_million: &Transducer,
    suffix: &Transducer,
) -> Transducer {
    let numbers = cardinal_up_to_million.compose(strip_leading_zeros());

    union([
        concat([
            field("integer_part", numbers),
            DELETE_EXTRA_SPACE.clone(),
            field("quantity", suffix),
        ]),
        concat([
            decimal.clone(),
            DELETE_EXTRA_SPACE.clone(),
            field("quantity", suffix),
        ]),
    ])
}

/// 小数标注器
///
/// 小数点由 "vírgula"（,）或 "ponto"（.）决定：
///   menos um vírgula dois seis ->
///   decimal { negative: "true" integer_part: "1" morphosyntactic_features: "," fractional_part: "26" }
///
/// 小数部分是任意个 0..999 的基数词（含 "zero"），逐个拼接。
/// `negative` 字段总是输出，没有 "menos" 时为 "false"。
pub struct DecimalFst {
    graph: GraphFst,
    /// 不含符号：纯小数分支 | 数量级分支
    pub final_graph_wo_negative: Transducer,
    /// 含符号、不含 `decimal { }` 框架
    pub final_graph: Transducer,
}

impl DecimalFst {
    pub fn new(cardinal: &CardinalFst, data: &mut GrammarData, deterministic: bool) -> Result<Self> {
        let graph = GraphFst::new("decimal", GrammarKind::Classify, deterministic);

        let up_to_thousand = &cardinal.numbers_up_to_thousand;
        let graph_decimal = concat([
            concat([up_to_thousand.clone(), DELETE_SPACE.clone()]).star(),
            up_to_thousand.clone(),
        ]);

        let decimal_point = union([
            cross("vírgula", "morphosyntactic_features: \",\""),
            cross("ponto", "morphosyntactic_features: \".\""),
        ]);

        let negative = union([
            concat([
                insert("negative: "),
                cross("menos", "\"true\""),
                DELETE_EXTRA_SPACE.clone(),
            ]),
            insert("negative: \"false\" "),
        ]);

        let graph_fractional = field("fractional_part", graph_decimal);

        let cardinal_graph = union([cardinal.graph_no_exception.clone(), cardinal.zero.clone()]);
        let graph_integer = field("integer_part", cardinal_graph);

        let final_graph_wo_sign = concat([
            concat([graph_integer, DELETE_EXTRA_SPACE.clone()]).optional(),
            decimal_point,
            DELETE_EXTRA_SPACE.clone(),
            graph_fractional,
        ]);

        let suffix = string_file(&data.lexicon("numbers/quantity_suffix.tsv")?);
        let quantity = get_quantity(
            &final_graph_wo_sign,
            &cardinal.numbers_up_to_million,
            &suffix,
        );

        let final_graph_wo_negative = union([final_graph_wo_sign, quantity]);
        let final_graph = concat([negative, final_graph_wo_negative.clone()]);
        let fst = graph.add_tokens(final_graph.clone());

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
