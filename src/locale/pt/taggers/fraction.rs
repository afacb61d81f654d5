use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::{concat, cross, delete, insert, string_file, union};
use crate::grammar::graph_utils::{field, DELETE_EXTRA_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::cardinal::CardinalFst;

/// 分数标注器
///
/// - "três quartos" -> fraction { numerator: "3" denominator: "4" }
/// - "dois e três quartos" -> fraction { integer_part: "2" numerator: "3" denominator: "4" }
/// - "cinco onze avos" / "cinco sobre onze" -> denominator: "11"
pub struct FractionFst {
    graph: GraphFst,
}

impl FractionFst {
    pub fn new(cardinal: &CardinalFst, data: &mut GrammarData, deterministic: bool) -> Result<Self> {
        let graph = GraphFst::new("fraction", GrammarKind::Classify, deterministic);

        let numbers = &cardinal.graph_no_exception;
        let denominator = union([
            string_file(&data.lexicon("fractions/denominator.tsv")?),
            concat([numbers.clone(), delete(" avos")]),
        ]);

        let spoken = concat([
            field("numerator", numbers),
            DELETE_EXTRA_SPACE.clone(),
            field("denominator", denominator),
        ]);
        let over = concat([
            field("numerator", numbers),
            delete(" sobre "),
            insert(" "),
            field("denominator", numbers),
        ]);

        let integer = concat([field("integer_part", numbers), delete(" e "), insert(" ")]);
        let negative = concat([
            cross("menos", "negative: \"-\""),
            DELETE_EXTRA_SPACE.clone(),
        ]);

        let final_graph = concat([
            negative.optional(),
            integer.optional(),
            union([spoken, over]),
        ]);
        let fst = graph.add_tokens(final_graph);

        Ok(Self {
            graph: graph.with_fst(fst),
        })
    }
}

impl Grammar for FractionFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}
