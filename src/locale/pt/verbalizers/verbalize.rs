use crate::fst::union;
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::cardinal::CardinalFst;
use super::date::DateFst;
use super::decimal::DecimalFst;
use super::electronic::ElectronicFst;
use super::fraction::FractionFst;
use super::measure::MeasureFst;
use super::money::MoneyFst;
use super::ordinal::OrdinalFst;
use super::telephone::TelephoneFst;
use super::time::TimeFst;
use super::whitelist::WhiteListFst;

/// 组合所有渲染器
///
/// 合法词元只属于一个类别，并集中恰有一个分支接受它，不需要权重。
pub struct VerbalizeFst {
    graph: GraphFst,
}

impl VerbalizeFst {
    pub fn new(deterministic: bool) -> Self {
        let graph = GraphFst::new("verbalize", GrammarKind::Verbalize, deterministic);

        let cardinal = CardinalFst::new(deterministic);
        let decimal = DecimalFst::new(deterministic);
        let measure = MeasureFst::new(&cardinal, &decimal, deterministic);
        let money = MoneyFst::new(&decimal, deterministic);

        let fst = union([
            TimeFst::new(deterministic).fst().clone(),
            DateFst::new(deterministic).fst().clone(),
            money.fst().clone(),
            FractionFst::new(deterministic).fst().clone(),
            measure.fst().clone(),
            OrdinalFst::new(deterministic).fst().clone(),
            decimal.fst().clone(),
            cardinal.fst().clone(),
            WhiteListFst::new(deterministic).fst().clone(),
            TelephoneFst::new(deterministic).fst().clone(),
            ElectronicFst::new(deterministic).fst().clone(),
        ]);

        Self {
            graph: graph.with_fst(fst),
        }
    }
}

impl Grammar for VerbalizeFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_token_has_exactly_one_rendering() {
        let v = VerbalizeFst::new(true);
        let cases = [
            ("cardinal { integer: \"23\" }", "23"),
            ("ordinal { integer: \"2\" morphosyntactic_features: \"º\" }", "2º"),
            ("time { hours: \"3\" minutes: \"00\" }", "3:00"),
            ("telephone { number_part: \"98765432\" }", "98765432"),
            ("whitelist { name: \"Dr.\" }", "Dr."),
            ("money { currency: \"R$\" integer_part: \"1\" }", "R$ 1"),
        ];
        for (token, expected) in cases {
            let paths = v.fst().paths(token);
            assert_eq!(paths.len(), 1, "{}", token);
            assert_eq!(paths[0].output, expected);
        }
    }

    #[test]
    fn test_malformed_token_rejected() {
        let v = VerbalizeFst::new(true);
        assert!(v.fst().paths("cardinal { value: \"1\" }").is_empty());
        assert!(v.fst().paths("bogus { integer: \"1\" }").is_empty());
    }
}
