use crate::fst::{concat, cross, insert, Transducer};
use crate::grammar::graph_utils::{delete_field, DELETE_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

use super::numbers::NumberNames;

/// 基数词渲染器
///
/// cardinal { negative: "true" integer: "12" } -> минус двенадцать
pub struct CardinalFst {
    graph: GraphFst,
    /// 可选负号 + 阳性拼读，不含框架
    pub numbers: Transducer,
}

impl CardinalFst {
    pub fn new(names: &NumberNames, deterministic: bool) -> Self {
        let graph = GraphFst::new("cardinal", GrammarKind::Verbalize, deterministic);

        let sign = concat([
            delete_field("negative", cross("true", "минус")),
            DELETE_SPACE.clone(),
            insert(" "),
        ]);
        let numbers = concat([
            sign.optional(),
            delete_field("integer", &names.masculine),
        ]);
        let fst = graph.delete_tokens(&numbers);

        Self {
            graph: graph.with_fst(fst),
            numbers,
        }
    }
}

impl Grammar for CardinalFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataSource, GrammarData};

    #[test]
    fn test_verbalize_cardinal() {
        let mut data = GrammarData::new("ru", DataSource::Embedded);
        let names = NumberNames::new(&mut data).unwrap();
        let c = CardinalFst::new(&names, true);
        assert_eq!(
            c.fst().best("cardinal { integer: \"2020\" }").unwrap().output,
            "две тысячи двадцать"
        );
        assert_eq!(
            c.fst()
                .best("cardinal { negative: \"true\" integer: \"12\" }")
                .unwrap()
                .output,
            "минус двенадцать"
        );
        assert!(!c.fst().accepts("cardinal { integer: \"012\" }"));
    }
}
