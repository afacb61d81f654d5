use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::union;
use crate::grammar::{Grammar, GrammarKind, GraphFst};
use crate::locale::{timed, CLASS_WEIGHT, PREFERRED_WEIGHT, WHITELIST_WEIGHT};

use super::cardinal::CardinalFst;
use super::decimal::DecimalFst;
use super::money::MoneyFst;
use super::telephone::TelephoneFst;
use super::whitelist::WhiteListFst;

/// 组合所有 ru 标注器
pub struct ClassifyFst {
    graph: GraphFst,
}

impl ClassifyFst {
    pub fn new(data: &mut GrammarData, deterministic: bool) -> Result<Self> {
        let graph = GraphFst::new("tokenize_and_classify", GrammarKind::Classify, deterministic);
        tracing::info!("构建 ru 标注语法 (deterministic={})", deterministic);

        let cardinal = timed("cardinal", || Ok(CardinalFst::new(deterministic)))?;
        let decimal = timed("decimal", || DecimalFst::new(&cardinal, data, deterministic))?;
        let money = timed("money", || {
            MoneyFst::new(&cardinal, &decimal, data, deterministic)
        })?;
        let telephone = timed("telephone", || Ok(TelephoneFst::new(deterministic)))?;
        let whitelist = timed("whitelist", || WhiteListFst::new(data, deterministic))?;

        let fst = union([
            whitelist.fst().add_weight(WHITELIST_WEIGHT),
            decimal.fst().add_weight(PREFERRED_WEIGHT),
            money.fst().add_weight(CLASS_WEIGHT),
            cardinal.fst().add_weight(CLASS_WEIGHT),
            telephone.fst().add_weight(CLASS_WEIGHT),
        ]);

        Ok(Self {
            graph: graph.with_fst(fst),
        })
    }
}

impl Grammar for ClassifyFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSource;

    #[test]
    fn test_money_span_beats_cardinal() {
        let mut data = GrammarData::new("ru", DataSource::Embedded);
        let c = ClassifyFst::new(&mut data, true).unwrap();
        let best = c.fst().best("5 руб.").unwrap();
        assert_eq!(
            best.output,
            "money { integer_part: \"5\" currency: \"рублей\" }"
        );
        assert_eq!(
            c.fst().best("5").unwrap().output,
            "cardinal { integer: \"5\" }"
        );
        assert!(c.fst().paths("руб.").is_empty());
    }
}
