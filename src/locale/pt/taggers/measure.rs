use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::{concat, cross, string_file, union};
use crate::grammar::graph_utils::{field, insert_nested, DELETE_EXTRA_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::cardinal::CardinalFst;
use super::decimal::DecimalFst;

/// 度量标注器，数值部分是嵌套的基数词或小数词元
///
/// - "dois quilômetros" -> measure { cardinal { integer: "2" } units: "km" }
/// - "um vírgula cinco litros" -> measure { decimal { negative: "false" integer_part: "1" ... } units: "l" }
pub struct MeasureFst {
    graph: GraphFst,
}

impl MeasureFst {
    pub fn new(
        cardinal: &CardinalFst,
        decimal: &DecimalFst,
        data: &mut GrammarData,
        deterministic: bool,
    ) -> Result<Self> {
        let graph = GraphFst::new("measure", GrammarKind::Classify, deterministic);

        let units = string_file(&data.lexicon("measure/units.tsv")?);

        // 单位前的 "um" 不是冠词，这里用不排除单个数字的完整基数词
        let negative = concat([
            cross("menos", "negative: \"-\""),
            DELETE_EXTRA_SPACE.clone(),
        ]);
        let cardinal_graph = concat([
            negative.optional(),
            field("integer", &cardinal.graph_no_exception),
        ]);

        let amount = union([
            insert_nested("cardinal", cardinal_graph),
            insert_nested("decimal", &decimal.final_graph),
        ]);

        let final_graph = concat([amount, DELETE_EXTRA_SPACE.clone(), field("units", units)]);
        let fst = graph.add_tokens(final_graph);

        Ok(Self {
            graph: graph.with_fst(fst),
        })
    }
}

impl Grammar for MeasureFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}
