use anyhow::Result;

use crate::fst::{concat, cross, delete, insert, union, Transducer};
use crate::grammar::graph_utils::{field, numeric_range, pad_two_digits};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::cardinal::CardinalFst;

/// 时间标注器
///
/// - "três horas" -> time { hours: "3" minutes: "00" }
/// - "quinze horas e vinte" -> time { hours: "15" minutes: "20" }
/// - "duas e dez minutos" -> time { hours: "2" minutes: "10" }
/// - "meio-dia e meia" -> time { hours: "12" minutes: "30" }
///
/// 没有 "horas" 或 "minutos" 的 "vinte e cinco" 不算时间，留给基数词。
pub struct TimeFst {
    graph: GraphFst,
}

impl TimeFst {
    pub fn new(cardinal: &CardinalFst, deterministic: bool) -> Result<Self> {
        let graph = GraphFst::new("time", GrammarKind::Classify, deterministic);

        let hours = union([
            cardinal.graph_no_exception.compose(numeric_range(1, 23)),
            cross("zero", "0"),
        ]);
        let minutes = cardinal
            .graph_no_exception
            .compose(numeric_range(1, 59))
            .compose(pad_two_digits());

        let hour_word = union([delete(" horas"), delete(" hora")]);
        let minute_word = union([delete(" minutos"), delete(" minuto")]);
        let and = delete(" e ");

        let minutes_field = |g: &Transducer| concat([insert(" "), field("minutes", g)]);
        let on_the_hour = insert(" minutes: \"00\"");
        let half = concat([delete(" e meia"), insert(" minutes: \"30\"")]);

        let spoken_hours = field("hours", &hours);
        let named_hours = field(
            "hours",
            union([cross("meio-dia", "12"), cross("meia-noite", "0")]),
        );

        let final_graph = union([
            concat([spoken_hours.clone(), hour_word.clone(), on_the_hour.clone()]),
            concat([
                spoken_hours.clone(),
                hour_word.clone(),
                and.clone(),
                minutes_field(&minutes),
                minute_word.optional(),
            ]),
            concat([
                spoken_hours.clone(),
                and.clone(),
                minutes_field(&minutes),
                minute_word,
            ]),
            concat([spoken_hours, hour_word.optional(), half.clone()]),
            concat([named_hours.clone(), on_the_hour]),
            concat([named_hours.clone(), and, minutes_field(&minutes)]),
            concat([named_hours, half]),
        ]);
        let fst = graph.add_tokens(final_graph);

        Ok(Self {
            graph: graph.with_fst(fst),
        })
    }
}

impl Grammar for TimeFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataSource, GrammarData};

    fn time() -> TimeFst {
        let mut data = GrammarData::new("pt", DataSource::Embedded);
        let cardinal = CardinalFst::new(&mut data, true).unwrap();
        TimeFst::new(&cardinal, true).unwrap()
    }

    #[test]
    fn test_hours_and_minutes() {
        let t = time();
        assert_eq!(
            t.fst().best("três horas").unwrap().output,
            "time { hours: \"3\" minutes: \"00\" }"
        );
        assert_eq!(
            t.fst().best("quinze horas e vinte").unwrap().output,
            "time { hours: \"15\" minutes: \"20\" }"
        );
        assert_eq!(
            t.fst().best("duas e dez minutos").unwrap().output,
            "time { hours: \"2\" minutes: \"10\" }"
        );
    }

    #[test]
    fn test_named_hours_and_half() {
        let t = time();
        assert_eq!(
            t.fst().best("meio-dia e meia").unwrap().output,
            "time { hours: \"12\" minutes: \"30\" }"
        );
        assert_eq!(
            t.fst().best("meia-noite").unwrap().output,
            "time { hours: \"0\" minutes: \"00\" }"
        );
        assert_eq!(
            t.fst().best("sete e meia").unwrap().output,
            "time { hours: \"7\" minutes: \"30\" }"
        );
    }

    #[test]
    fn test_bare_number_is_not_time() {
        assert!(!time().fst().accepts("vinte e cinco"));
    }
}
