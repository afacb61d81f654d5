use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::{union, Transducer};
use crate::grammar::{Grammar, GrammarKind, GraphFst};
use crate::locale::{timed, CLASS_WEIGHT, PREFERRED_WEIGHT, WHITELIST_WEIGHT};

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

/// 组合所有标注器
///
/// 先构建叶子语法（基数词），依赖它的语法按顺序接收已构建的实例。
/// 各类别按权重并入，同一输入被多个类别接受时权重低者胜出。
pub struct ClassifyFst {
    graph: GraphFst,
}

impl ClassifyFst {
    pub fn new(data: &mut GrammarData, deterministic: bool) -> Result<Self> {
        let graph = GraphFst::new("tokenize_and_classify", GrammarKind::Classify, deterministic);
        tracing::info!("构建 pt 标注语法 (deterministic={})", deterministic);

        let fst = union(weighted_classes(data, deterministic)?);

        Ok(Self {
            graph: graph.with_fst(fst),
        })
    }
}

/// 按并集顺序排列的带权类别语法
fn weighted_classes(data: &mut GrammarData, deterministic: bool) -> Result<Vec<Transducer>> {
    let cardinal = timed("cardinal", || CardinalFst::new(data, deterministic))?;
    let ordinal = timed("ordinal", || OrdinalFst::new(data, deterministic))?;
    let decimal = timed("decimal", || DecimalFst::new(&cardinal, data, deterministic))?;
    let fraction = timed("fraction", || FractionFst::new(&cardinal, data, deterministic))?;
    let measure = timed("measure", || {
        MeasureFst::new(&cardinal, &decimal, data, deterministic)
    })?;
    let date = timed("date", || DateFst::new(&cardinal, data, deterministic))?;
    let time = timed("time", || TimeFst::new(&cardinal, deterministic))?;
    let telephone = timed("telephone", || TelephoneFst::new(&cardinal, deterministic))?;
    let electronic = timed("electronic", || ElectronicFst::new(data, deterministic))?;
    let money = timed("money", || {
        MoneyFst::new(&cardinal, &decimal, data, deterministic)
    })?;
    let whitelist = timed("whitelist", || WhiteListFst::new(data, deterministic))?;

    Ok(vec![
        whitelist.fst().add_weight(WHITELIST_WEIGHT),
        time.fst().add_weight(CLASS_WEIGHT),
        date.fst().add_weight(PREFERRED_WEIGHT),
        decimal.fst().add_weight(PREFERRED_WEIGHT),
        measure.fst().add_weight(CLASS_WEIGHT),
        cardinal.fst().add_weight(CLASS_WEIGHT),
        ordinal.fst().add_weight(CLASS_WEIGHT),
        money.fst().add_weight(CLASS_WEIGHT),
        telephone.fst().add_weight(CLASS_WEIGHT),
        electronic.fst().add_weight(CLASS_WEIGHT),
        fraction.fst().add_weight(CLASS_WEIGHT),
    ])
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

    fn classify() -> ClassifyFst {
        let mut data = GrammarData::new("pt", DataSource::Embedded);
        ClassifyFst::new(&mut data, true).unwrap()
    }

    #[test]
    fn test_decimal_beats_cardinal_for_quantity() {
        let c = classify();
        let paths = c.fst().paths("dois milhões");
        assert_eq!(
            paths[0].output,
            "decimal { negative: \"false\" integer_part: \"2\" quantity: \"milhões\" }"
        );
        assert!(paths
            .iter()
            .any(|p| p.output == "cardinal { integer: \"2000000\" }"));
    }

    #[test]
    fn test_weights_are_deterministic() {
        let c = classify();
        let first = c.fst().best("vinte e três").unwrap();
        for _ in 0..3 {
            assert_eq!(c.fst().best("vinte e três").unwrap(), first);
        }
        assert_eq!(first.output, "cardinal { integer: \"23\" }");
        assert!((first.weight - CLASS_WEIGHT).abs() < 1e-9);
    }

    #[test]
    fn test_plain_word_not_classified() {
        assert!(classify().fst().paths("casa").is_empty());
    }

    #[test]
    fn test_class_union_order_does_not_change_paths() {
        let mut data = GrammarData::new("pt", DataSource::Embedded);
        let classes = weighted_classes(&mut data, false).unwrap();
        let mid = classes.len() / 2;

        let forward = union(classes.clone());
        let reversed = union(classes.iter().rev().cloned());
        let regrouped = union([
            union(classes[..mid].to_vec()),
            union(classes[mid..].to_vec()),
        ]);

        let sorted = |fst: &Transducer, input: &str| {
            let mut paths: Vec<(String, String)> = fst
                .paths(input)
                .into_iter()
                .map(|p| (p.output, format!("{:.6}", p.weight)))
                .collect();
            paths.sort();
            paths
        };

        for input in [
            "dois milhões",
            "três horas",
            "vinte e três",
            "dois reais",
            "três quartos",
            "primeiro de maio",
            "por exemplo",
        ] {
            let expected = sorted(&forward, input);
            assert!(!expected.is_empty(), "{}", input);
            assert_eq!(sorted(&reversed, input), expected, "{}", input);
            assert_eq!(sorted(&regrouped, input), expected, "{}", input);
        }
    }
}
