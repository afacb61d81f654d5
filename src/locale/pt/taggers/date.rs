use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::{concat, cross, delete, insert, string_file, union};
use crate::grammar::graph_utils::{field, numeric_range, pad_two_digits, DIGIT};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::cardinal::CardinalFst;

/// 日期标注器
///
/// - "quinze de janeiro de dois mil e vinte" -> date { day: "15" month: "01" year: "2020" }
/// - "primeiro de maio" -> date { day: "01" month: "05" }
/// - "março de mil novecentos e noventa" -> date { month: "03" year: "1990" }
pub struct DateFst {
    graph: GraphFst,
}

impl DateFst {
    pub fn new(cardinal: &CardinalFst, data: &mut GrammarData, deterministic: bool) -> Result<Self> {
        let graph = GraphFst::new("date", GrammarKind::Classify, deterministic);

        let month = string_file(&data.lexicon("dates/months.tsv")?);

        let day = union([
            cardinal.graph_no_exception.compose(numeric_range(1, 31)),
            cross("primeiro", "1"),
        ])
        .compose(pad_two_digits());

        let year = cardinal
            .graph_no_exception
            .compose(concat([DIGIT.clone(), DIGIT.clone(), DIGIT.clone(), DIGIT.clone()]));

        let of = concat([delete(" de "), insert(" ")]);
        let year_part = concat([of.clone(), field("year", year)]);

        let day_month = concat([
            field("day", day),
            of.clone(),
            field("month", &month),
            year_part.optional(),
        ]);
        let month_year = concat([field("month", &month), year_part]);

        let fst = graph.add_tokens(union([day_month, month_year]));

        Ok(Self {
            graph: graph.with_fst(fst),
        })
    }
}

impl Grammar for DateFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}
