use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::{concat, cross, delete, insert, string_file, union};
use crate::grammar::graph_utils::{field, ALNUM};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 电子地址标注器
///
/// - "joão ponto silva arroba gmail ponto com" -> electronic { username: "joão.silva" domain: "gmail.com" }
/// - "www ponto google ponto com" -> electronic { protocol: "www." domain: "google.com" }
pub struct ElectronicFst {
    graph: GraphFst,
}

impl ElectronicFst {
    pub fn new(data: &mut GrammarData, deterministic: bool) -> Result<Self> {
        let graph = GraphFst::new("electronic", GrammarKind::Classify, deterministic);

        let symbols = string_file(&data.lexicon("electronic/symbols.tsv")?);
        let word = ALNUM.plus();

        let symbol = concat([delete(" "), symbols, delete(" ")]);
        let username = concat([word.clone(), concat([symbol, word.clone()]).star()]);

        let dot = concat([delete(" "), cross("ponto", "."), delete(" ")]);
        let domain = concat([word.clone(), concat([dot, word]).plus()]);

        let email = concat([
            field("username", username),
            delete(" arroba "),
            insert(" "),
            field("domain", &domain),
        ]);
        let url = concat([
            field("protocol", cross("www ponto", "www.")),
            delete(" "),
            insert(" "),
            field("domain", &domain),
        ]);

        let fst = graph.add_tokens(union([email, url]));

        Ok(Self {
            graph: graph.with_fst(fst),
        })
    }
}

impl Grammar for ElectronicFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSource;

    fn electronic() -> ElectronicFst {
        let mut data = GrammarData::new("pt", DataSource::Embedded);
        ElectronicFst::new(&mut data, true).unwrap()
    }

    #[test]
    fn test_email() {
        assert_eq!(
            electronic()
                .fst()
                .best("joão ponto silva arroba gmail ponto com")
                .unwrap()
                .output,
            "electronic { username: \"joão.silva\" domain: \"gmail.com\" }"
        );
    }

    #[test]
    fn test_url() {
        assert_eq!(
            electronic()
                .fst()
                .best("www ponto google ponto com ponto br")
                .unwrap()
                .output,
            "electronic { protocol: \"www.\" domain: \"google.com.br\" }"
        );
    }

    #[test]
    fn test_domain_needs_dot() {
        assert!(!electronic().fst().accepts("maria arroba gmail"));
    }
}
