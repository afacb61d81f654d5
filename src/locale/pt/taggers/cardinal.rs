use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::{concat, cross, delete, insert, string_file, union, Transducer};
use crate::grammar::graph_utils::{field, strip_leading_zeros, DELETE_EXTRA_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 非确定模式下单个数字词仍可标注为基数词，但权重更高
const SINGLE_DIGIT_PENALTY: f64 = 0.5;

/// 基数词标注器
///
/// 例如 "menos vinte e três" -> cardinal { negative: "-" integer: "23" }
///
/// 确定模式下不标注单个数字词（"um"、"dois" 在句中多为冠词/量词）。
pub struct CardinalFst {
    graph: GraphFst,
    /// 1..999_999_999，不含零
    pub graph_no_exception: Transducer,
    /// 0..999，含零
    pub numbers_up_to_thousand: Transducer,
    /// 1..999_999
    pub numbers_up_to_million: Transducer,
    pub cardinal_numbers_default: Transducer,
    /// 补齐为三位的 1..999
    pub graph_hundreds: Transducer,
    /// 两位补零的 1..99
    pub graph_two_digits: Transducer,
    /// "zero" -> "0"
    pub zero: Transducer,
    /// 单个数字词 -> 1..9
    pub digit: Transducer,
}

impl CardinalFst {
    pub fn new(data: &mut GrammarData, deterministic: bool) -> Result<Self> {
        let graph = GraphFst::new("cardinal", GrammarKind::Classify, deterministic);

        let zero = string_file(&data.lexicon("numbers/zero.tsv")?);
        let digit = string_file(&data.lexicon("numbers/digit.tsv")?);
        let teen = string_file(&data.lexicon("numbers/teen.tsv")?);
        let ties = string_file(&data.lexicon("numbers/ties.tsv")?);
        let hundreds = string_file(&data.lexicon("numbers/hundreds.tsv")?);

        let and = delete(" e ");

        let tens = union([
            teen,
            concat([ties.clone(), insert("0")]),
            concat([ties, and.clone(), digit.clone()]),
        ]);
        let two_digits = union([tens.clone(), concat([insert("0"), digit.clone()])]);

        // "cento" 只出现在 "cento e ..." 中
        let graph_hundreds = union([
            cross("cem", "100"),
            concat([hundreds.difference("cento"), insert("00")]),
            concat([hundreds, and.clone(), two_digits.clone()]),
            concat([insert("0"), tens]),
            concat([insert("00"), digit.clone()]),
        ]);

        let thousands = union([
            cross("mil", "001"),
            concat([graph_hundreds.clone(), delete(" mil")]),
        ]);
        let remainder = union([
            concat([delete(" e "), graph_hundreds.clone()]),
            concat([delete(" "), graph_hundreds.clone()]),
        ]);
        let graph_six = union([
            concat([thousands, union([insert("000"), remainder])]),
            concat([insert("000"), graph_hundreds.clone()]),
        ]);

        let millions = concat([
            graph_hundreds.clone(),
            union([delete(" milhão"), delete(" milhões")]),
            union([
                insert("000000"),
                concat([delete(" e "), graph_six.clone()]),
                concat([delete(" "), graph_six.clone()]),
            ]),
        ]);
        let graph_nine = union([millions, concat([insert("000"), graph_six.clone()])]);

        let strip = strip_leading_zeros();
        let graph_no_exception = graph_nine.compose(strip.clone());
        let numbers_up_to_thousand = union([graph_hundreds.compose(strip.clone()), zero.clone()]);
        let numbers_up_to_million = graph_six.compose(strip);
        let graph_two_digits = two_digits;

        let single_digits = digit.project_input();
        let positive = if deterministic {
            graph_no_exception.difference(&single_digits)
        } else {
            union([
                graph_no_exception.difference(&single_digits),
                digit.add_weight(SINGLE_DIGIT_PENALTY),
            ])
        };

        let negative = concat([
            cross("menos", "negative: \"-\""),
            DELETE_EXTRA_SPACE.clone(),
        ]);
        let final_graph = union([
            field("integer", positive),
            concat([negative, field("integer", graph_no_exception.clone())]),
        ]);
        let fst = graph.add_tokens(final_graph);

        Ok(Self {
            graph: graph.with_fst(fst),
            cardinal_numbers_default: graph_no_exception.clone(),
            graph_no_exception,
            numbers_up_to_thousand,
            numbers_up_to_million,
            graph_hundreds,
            graph_two_digits,
            zero,
            digit,
        })
    }
}

impl Grammar for CardinalFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSource;

    fn cardinal(deterministic: bool) -> CardinalFst {
        let mut data = GrammarData::new("pt", DataSource::Embedded);
        CardinalFst::new(&mut data, deterministic).unwrap()
    }

    #[test]
    fn test_graph_no_exception_values() {
        let c = cardinal(true);
        let cases = [
            ("um", "1"),
            ("vinte e três", "23"),
            ("cem", "100"),
            ("cento e um", "101"),
            ("duzentos e quarenta e cinco", "245"),
            ("mil", "1000"),
            ("mil e duzentos", "1200"),
            ("dois mil e vinte", "2020"),
            ("mil novecentos e oitenta e quatro", "1984"),
            ("trinta mil", "30000"),
            ("um milhão", "1000000"),
            ("dois milhões e quinhentos mil", "2500000"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                c.graph_no_exception.best(input).map(|p| p.output),
                Some(expected.to_string()),
                "{}",
                input
            );
        }
        assert!(!c.graph_no_exception.accepts("zero"));
        assert!(!c.graph_no_exception.accepts("cento"));
    }

    #[test]
    fn test_zero_only_in_numbers_up_to_thousand() {
        let c = cardinal(true);
        assert_eq!(c.numbers_up_to_thousand.best("zero").unwrap().output, "0");
        assert_eq!(c.numbers_up_to_thousand.best("seis").unwrap().output, "6");
        assert!(!c.numbers_up_to_thousand.accepts("mil"));
        assert!(c.numbers_up_to_million.accepts("novecentos mil"));
        assert!(!c.numbers_up_to_million.accepts("um milhão"));
    }

    #[test]
    fn test_tagger_output() {
        let c = cardinal(true);
        assert_eq!(
            c.fst().best("vinte e três").unwrap().output,
            "cardinal { integer: \"23\" }"
        );
        assert_eq!(
            c.fst().best("menos cinco").unwrap().output,
            "cardinal { negative: \"-\" integer: \"5\" }"
        );
    }

    #[test]
    fn test_single_digit_excluded_when_deterministic() {
        assert!(!cardinal(true).fst().accepts("dois"));
        let relaxed = cardinal(false);
        let best = relaxed.fst().best("dois").unwrap();
        assert_eq!(best.output, "cardinal { integer: \"2\" }");
        assert!(best.weight > 0.0);
    }
}
