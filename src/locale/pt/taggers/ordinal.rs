use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::{concat, delete, insert, string_file, union, Lexicon, Transducer};
use crate::grammar::graph_utils::{field, strip_leading_zeros};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 序数词标注器
///
/// 阳性 "vigésimo primeiro" -> ordinal { integer: "21" morphosyntactic_features: "º" }
/// 阴性 "vigésima primeira" -> ordinal { integer: "21" morphosyntactic_features: "ª" }
pub struct OrdinalFst {
    graph: GraphFst,
}

/// 阳性词形 -> 阴性词形（-o -> -a）
fn feminine(word: &str) -> String {
    match word.strip_suffix('o') {
        Some(stem) => format!("{}a", stem),
        None => word.to_string(),
    }
}

/// 1..999 的序数词 -> 数字
fn ordinal_numbers(digit: &Lexicon, ties: &Lexicon, hundreds: &Lexicon) -> Transducer {
    let digit = string_file(digit);
    let ties = string_file(ties);
    let hundreds = string_file(hundreds);
    let space = delete(" ");

    let tens = union([
        concat([ties.clone(), insert("0")]),
        concat([ties, space.clone(), digit.clone()]),
    ]);
    let two_digits = union([tens.clone(), concat([insert("0"), digit.clone()])]);
    let padded = union([
        concat([hundreds.clone(), insert("00")]),
        concat([hundreds, space, two_digits]),
        concat([insert("0"), tens]),
        concat([insert("00"), digit]),
    ]);
    padded.compose(strip_leading_zeros())
}

impl OrdinalFst {
    pub fn new(data: &mut GrammarData, deterministic: bool) -> Result<Self> {
        let graph = GraphFst::new("ordinal", GrammarKind::Classify, deterministic);

        let digit = data.lexicon("ordinals/digit.tsv")?;
        let ties = data.lexicon("ordinals/ties.tsv")?;
        let hundreds = data.lexicon("ordinals/hundreds.tsv")?;

        let masculine = ordinal_numbers(&digit, &ties, &hundreds);
        let feminine = ordinal_numbers(
            &digit.map_surface(feminine),
            &ties.map_surface(feminine),
            &hundreds.map_surface(feminine),
        );

        let final_graph = union([
            concat([
                field("integer", masculine),
                insert(" morphosyntactic_features: \"º\""),
            ]),
            concat([
                field("integer", feminine),
                insert(" morphosyntactic_features: \"ª\""),
            ]),
        ]);
        let fst = graph.add_tokens(final_graph);

        Ok(Self {
            graph: graph.with_fst(fst),
        })
    }
}

impl Grammar for OrdinalFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSource;

    fn ordinal() -> OrdinalFst {
        let mut data = GrammarData::new("pt", DataSource::Embedded);
        OrdinalFst::new(&mut data, true).unwrap()
    }

    #[test]
    fn test_feminine_form() {
        assert_eq!(feminine("primeiro"), "primeira");
        assert_eq!(feminine("décimo"), "décima");
    }

    #[test]
    fn test_masculine_and_feminine() {
        let o = ordinal();
        assert_eq!(
            o.fst().best("vigésimo primeiro").unwrap().output,
            "ordinal { integer: \"21\" morphosyntactic_features: \"º\" }"
        );
        assert_eq!(
            o.fst().best("terceira").unwrap().output,
            "ordinal { integer: \"3\" morphosyntactic_features: \"ª\" }"
        );
        assert_eq!(
            o.fst().best("centésimo décimo").unwrap().output,
            "ordinal { integer: \"110\" morphosyntactic_features: \"º\" }"
        );
    }

    #[test]
    fn test_mixed_gender_rejected() {
        assert!(!ordinal().fst().accepts("vigésimo primeira"));
    }
}
