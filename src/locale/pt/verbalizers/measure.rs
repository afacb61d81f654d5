use crate::fst::{concat, insert, union};
use crate::grammar::graph_utils::{delete_field, delete_nested, field_value, DELETE_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::cardinal::CardinalFst;
use super::decimal::DecimalFst;

/// 度量渲染器，数值部分交给基数词/小数渲染器
///
/// measure { cardinal { integer: "2" } units: "km" } -> 2 km
pub struct MeasureFst {
    graph: GraphFst,
}

impl MeasureFst {
    pub fn new(cardinal: &CardinalFst, decimal: &DecimalFst, deterministic: bool) -> Self {
        let graph = GraphFst::new("measure", GrammarKind::Verbalize, deterministic);

        let amount = union([
            delete_nested("cardinal", &cardinal.numbers),
            delete_nested("decimal", &decimal.numbers),
        ]);
        let units = concat([
            DELETE_SPACE.clone(),
            insert(" "),
            delete_field("units", field_value()),
        ]);
        let fst = graph.delete_tokens(concat([amount, units]));

        Self {
            graph: graph.with_fst(fst),
        }
    }
}

impl Grammar for MeasureFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbalize_measure() {
        let m = MeasureFst::new(&CardinalFst::new(true), &DecimalFst::new(true), true);
        assert_eq!(
            m.fst()
                .best("measure { cardinal { integer: \"2\" } units: \"km\" }")
                .unwrap()
                .output,
            "2 km"
        );
        assert_eq!(
            m.fst()
                .best("measure { decimal { negative: \"false\" integer_part: \"1\" morphosyntactic_features: \",\" fractional_part: \"5\" } units: \"l\" }")
                .unwrap()
                .output,
            "1,5 l"
        );
    }
}
