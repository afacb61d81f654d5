use crate::fst::{accept, concat, cross, union, Transducer, Weight};
use crate::grammar::graph_utils::{delete_field, DIGIT};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::numbers::NumberNames;

/// 非确定模式下整组逐位读的附加权重；有前导零的组总是逐位读
const DIGITWISE_PENALTY: Weight = 1.0;

/// 电话号码渲染器，每组数字按数词读，"-" 变为停顿
///
/// telephone { number_part: "+7-913-983-56-01" }
///   -> плюс семь девятьсот тринадцать девятьсот восемьдесят три пятьдесят шесть ноль один
pub struct TelephoneFst {
    graph: GraphFst,
}

impl TelephoneFst {
    pub fn new(names: &NumberNames, deterministic: bool) -> Self {
        let graph = GraphFst::new("telephone", GrammarKind::Verbalize, deterministic);

        let leading_zero = concat([accept("0"), DIGIT.closure(1, Some(3))]);
        let mut groups = vec![
            DIGIT.closure(1, Some(4)).compose(&names.masculine),
            leading_zero.compose(names.digitwise()),
        ];
        if !deterministic {
            groups.push(names.digitwise().add_weight(DIGITWISE_PENALTY));
        }
        let group: Transducer = union(groups);
        let number = concat([
            cross("+", "плюс ").optional(),
            group.clone(),
            concat([cross("-", " "), group]).star(),
        ]);
        let fst = graph.delete_tokens(delete_field("number_part", number));

        Self {
            graph: graph.with_fst(fst),
        }
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

    #[test]
    fn test_verbalize_telephone() {
        let mut data = GrammarData::new("ru", DataSource::Embedded);
        let names = NumberNames::new(&mut data).unwrap();
        let t = TelephoneFst::new(&names, true);
        assert_eq!(
            t.fst()
                .best("telephone { number_part: \"8-913-983-56-01\" }")
                .unwrap()
                .output,
            "восемь девятьсот тринадцать девятьсот восемьдесят три пятьдесят шесть ноль один"
        );
        assert_eq!(
            t.fst()
                .best("telephone { number_part: \"+7-495-12-30\" }")
                .unwrap()
                .output,
            "плюс семь четыреста девяносто пять двенадцать тридцать"
        );
    }

    #[test]
    fn test_single_reading_unless_relaxed() {
        let mut data = GrammarData::new("ru", DataSource::Embedded);
        let names = NumberNames::new(&mut data).unwrap();
        let token = "telephone { number_part: \"8-913-05\" }";

        let strict = TelephoneFst::new(&names, true).fst().paths(token);
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].output, "восемь девятьсот тринадцать ноль пять");

        let relaxed = TelephoneFst::new(&names, false).fst().paths(token);
        assert!(relaxed.len() > 1);
        assert_eq!(relaxed[0].output, strict[0].output);
        assert!(relaxed
            .iter()
            .any(|p| p.output == "восемь девять один три ноль пять"));
    }
}
