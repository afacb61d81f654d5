use anyhow::Result;

use crate::fst::{concat, cross, delete, union};
use crate::grammar::graph_utils::field;
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::cardinal::CardinalFst;

/// 电话号码最少位数
const MIN_DIGITS: usize = 8;

/// 电话号码标注器，逐位读出的数字序列
///
/// "mais cinco cinco um um nove oito sete meia cinco quatro três dois"
///   -> telephone { number_part: "+551198765432" }
///
/// 读号码时 "meia"（meia dúzia）表示 6。
pub struct TelephoneFst {
    graph: GraphFst,
}

impl TelephoneFst {
    pub fn new(cardinal: &CardinalFst, deterministic: bool) -> Result<Self> {
        let graph = GraphFst::new("telephone", GrammarKind::Classify, deterministic);

        let digit = union([
            cardinal.digit.clone(),
            cardinal.zero.clone(),
            cross("meia", "6"),
        ]);
        let number = concat([
            digit.clone(),
            concat([delete(" "), digit]).closure(MIN_DIGITS - 1, None),
        ]);
        let country_code = concat([cross("mais", "+"), delete(" ")]);

        let fst = graph.add_tokens(field(
            "number_part",
            concat([country_code.optional(), number]),
        ));

        Ok(Self {
            graph: graph.with_fst(fst),
        })
    }
}

impl Grammar for TelephoneFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataSource, GrammarData};

    fn telephone() -> TelephoneFst {
        let mut data = GrammarData::new("pt", DataSource::Embedded);
        let cardinal = CardinalFst::new(&mut data, true).unwrap();
        TelephoneFst::new(&cardinal, true).unwrap()
    }

    #[test]
    fn test_digit_sequence() {
        assert_eq!(
            telephone()
                .fst()
                .best("nove oito sete meia cinco quatro três dois")
                .unwrap()
                .output,
            "telephone { number_part: \"98765432\" }"
        );
    }

    #[test]
    fn test_country_code() {
        assert_eq!(
            telephone()
                .fst()
                .best("mais cinco cinco um um nove oito sete meia cinco quatro três dois")
                .unwrap()
                .output,
            "telephone { number_part: \"+551198765432\" }"
        );
    }

    #[test]
    fn test_short_sequence_rejected() {
        assert!(!telephone().fst().accepts("dois seis"));
    }
}
