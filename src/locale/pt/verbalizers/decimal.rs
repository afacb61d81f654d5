use crate::fst::{concat, cross, delete, insert, union, Transducer};
use crate::grammar::graph_utils::{delete_field, field_value, DELETE_SPACE};
use crate::grammar::{Grammar, GrammarKind, GraphFst};

/// 小数渲染器
///
/// - decimal { negative: "true" integer_part: "1" morphosyntactic_features: "," fractional_part: "26" } -> -1,26
/// - decimal { negative: "false" integer_part: "2" quantity: "milhões" } -> 2 milhões
pub struct DecimalFst {
    graph: GraphFst,
    /// 不含 `negative` 字段，供金额复用
    pub numbers_wo_sign: Transducer,
    /// 含 `negative` 字段、不含框架，供度量嵌套词元复用
    pub numbers: Transducer,
}

impl DecimalFst {
    pub fn new(deterministic: bool) -> Self {
        let graph = GraphFst::new("decimal", GrammarKind::Verbalize, deterministic);

        let integer = delete_field("integer_part", field_value());
        let point = delete_field("morphosyntactic_features", field_value());
        let fractional = delete_field("fractional_part", field_value());
        let quantity = concat([
            DELETE_SPACE.clone(),
            insert(" "),
            delete_field("quantity", field_value()),
        ]);

        let with_point = concat([
            concat([integer.clone(), DELETE_SPACE.clone()]).optional(),
            point,
            DELETE_SPACE.clone(),
            fractional,
            quantity.optional(),
        ]);
        let with_quantity = concat([integer, quantity]);
        let numbers_wo_sign = union([with_point, with_quantity]);

        let sign = union([
            delete_field("negative", cross("true", "-")),
            delete_field("negative", delete("false")),
        ]);
        let numbers = concat([sign, DELETE_SPACE.clone(), numbers_wo_sign.clone()]);
        let fst = graph.delete_tokens(&numbers);

        Self {
            graph: graph.with_fst(fst),
            numbers_wo_sign,
            numbers,
        }
    }
}

impl Grammar for DecimalFst {
    fn graph_fst(&self) -> &GraphFst {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbalize_decimal() {
        let d = DecimalFst::new(true);
        let cases = [
            (
                "decimal { negative: \"true\" integer_part: \"1\" morphosyntactic_features: \",\" fractional_part: \"26\" }",
                "-1,26",
            ),
            (
                "decimal { negative: \"false\" integer_part: \"2\" quantity: \"milhões\" }",
                "2 milhões",
            ),
            (
                "decimal { negative: \"false\" integer_part: \"1\" morphosyntactic_features: \",\" fractional_part: \"26\" quantity: \"milhões\" }",
                "1,26 milhões",
            ),
            (
                "decimal { negative: \"false\" morphosyntactic_features: \".\" fractional_part: \"5\" }",
                ".5",
            ),
        ];
        for (token, expected) in cases {
            assert_eq!(d.fst().best(token).unwrap().output, expected, "{}", token);
        }
    }

    #[test]
    fn test_missing_sign_rejected() {
        let d = DecimalFst::new(true);
        assert!(!d.fst().accepts("decimal { integer_part: \"2\" quantity: \"milhões\" }"));
    }
}
