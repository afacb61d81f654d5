use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::union;
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::cardinal::CardinalFst;
use super::decimal::DecimalFst;
use super::money::MoneyFst;
use super::numbers::NumberNames;
use super::telephone::TelephoneFst;
use super::whitelist::WhiteListFst;

/// 组合所有 ru 渲染器
pub struct VerbalizeFst {
    graph: GraphFst,
}

impl VerbalizeFst {
    pub fn new(data: &mut GrammarData, deterministic: bool) -> Result<Self> {
        let graph = GraphFst::new("verbalize", GrammarKind::Verbalize, deterministic);

        let names = NumberNames::new(data)?;
        let cardinal = CardinalFst::new(&names, deterministic);
        let decimal = DecimalFst::new(&names, deterministic);
        let money = MoneyFst::new(&names, &decimal, deterministic);

        let fst = union([
            cardinal.fst().clone(),
            decimal.fst().clone(),
            money.fst().clone(),
            TelephoneFst::new(&names, deterministic).fst().clone(),
            WhiteListFst::new(deterministic).fst().clone(),
        ]);

        Ok(Self {
            graph: graph.with_fst(fst),
        })
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
    use crate::data::DataSource;

    #[test]
    fn test_verbalize_union() {
        let mut data = GrammarData::new("ru", DataSource::Embedded);
        let v = VerbalizeFst::new(&mut data, true).unwrap();
        assert_eq!(
            v.fst()
                .best("money { integer_part: \"5\" currency: \"рублей\" }")
                .unwrap()
                .output,
            "пять рублей"
        );
        assert_eq!(
            v.fst().best("whitelist { name: \"то есть\" }").unwrap().output,
            "то есть"
        );
        assert!(v.fst().paths("cardinal { integer: \"x\" }").is_empty());
    }
}
