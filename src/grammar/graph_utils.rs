//! 语法公共部件：字符类、空白处理、字段插入/删除

use crate::fst::{accept, concat, cross, delete, insert, union, Transducer, Weight};

/// 金额与单位之间可删除分隔符的偏好权重
///
/// 只需要比任何现实的竞争分支都更优，数值本身没有语义
pub const DELIMITER_PREFERENCE: Weight = -10.0;

lazy_static::lazy_static! {
    pub static ref DIGIT: Transducer = Transducer::char_class("digit", |c| c.is_ascii_digit());
    pub static ref ALNUM: Transducer = Transducer::char_class("alnum", |c| c.is_alphanumeric());
    pub static ref NOT_QUOTE: Transducer = Transducer::char_class("not_quote", |c| c != '"');
    pub static ref SPACE: Transducer = Transducer::char_class("space", |c| c == ' ');
    pub static ref WHITE_SPACE: Transducer =
        Transducer::char_class("white_space", |c| c == ' ' || c == '\t');
    pub static ref CHAR: Transducer = Transducer::char_class("char", |_| true);

    /// 任意串
    pub static ref SIGMA: Transducer = CHAR.star();

    /// 删除任意数量空白
    pub static ref DELETE_SPACE: Transducer = delete(&*WHITE_SPACE).star();

    /// 一个或多个空白折叠为一个空格
    pub static ref DELETE_EXTRA_SPACE: Transducer = cross(WHITE_SPACE.plus(), " ");
}

/// `name: "<value>"`，用于标注器输出字段
pub fn field(name: &str, value: impl Into<Transducer>) -> Transducer {
    concat([
        insert(&format!("{}: \"", name)),
        value.into(),
        insert("\""),
    ])
}

/// 删除 `name: "` 与结尾引号，保留字段值（值由 `value` 约束）
pub fn delete_field(name: &str, value: impl Into<Transducer>) -> Transducer {
    concat([
        delete(name),
        delete(":"),
        DELETE_SPACE.clone(),
        delete("\""),
        value.into(),
        delete("\""),
    ])
}

/// 任意非空字段值
pub fn field_value() -> Transducer {
    NOT_QUOTE.plus()
}

/// 删除内层 `class { ... }` 框架，用于嵌套词元
pub fn delete_nested(class: &str, inner: impl Into<Transducer>) -> Transducer {
    concat([
        delete(class),
        DELETE_SPACE.clone(),
        delete("{"),
        DELETE_SPACE.clone(),
        inner.into(),
        DELETE_SPACE.clone(),
        delete("}"),
    ])
}

/// 包上内层 `class { ... }` 框架
pub fn insert_nested(class: &str, inner: impl Into<Transducer>) -> Transducer {
    concat([
        insert(&format!("{} {{ ", class)),
        inner.into(),
        insert(" }"),
    ])
}

/// 去掉前导零，并要求首位非零
pub fn strip_leading_zeros() -> Transducer {
    concat([
        delete(accept("0").star()),
        DIGIT.difference("0"),
        DIGIT.star(),
    ])
}

/// 闭区间内十进制数串的接受器
pub fn numeric_range(lo: u32, hi: u32) -> Transducer {
    union((lo..=hi).map(|n| accept(&n.to_string())))
}

/// 一位或两位数字补齐为两位
pub fn pad_two_digits() -> Transducer {
    union([
        concat([insert("0"), DIGIT.clone()]),
        concat([DIGIT.clone(), DIGIT.clone()]),
    ])
}

/// 以 `suffix` 结尾的数字串
pub fn digits_ending_with(suffix: &str) -> Transducer {
    concat([DIGIT.star(), accept(suffix)])
}

/// 可删除的单个空格，删除分支带偏好权重
pub fn optional_delimiter() -> Transducer {
    cross(&*SPACE, "")
        .add_weight(DELIMITER_PREFERENCE)
        .optional()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_zeros() {
        let t = DIGIT.plus().compose(strip_leading_zeros());
        assert_eq!(t.best("0026").unwrap().output, "26");
        assert_eq!(t.best("5").unwrap().output, "5");
        assert!(!t.accepts("000"));
        assert!(!t.accepts("0"));
    }

    #[test]
    fn test_field_round_trip() {
        let tag = field("integer_part", DIGIT.plus());
        let untag = delete_field("integer_part", field_value());
        let tagged = tag.best("42").unwrap().output;
        assert_eq!(tagged, "integer_part: \"42\"");
        assert_eq!(untag.best(&tagged).unwrap().output, "42");
    }

    #[test]
    fn test_nested_round_trip() {
        let tag = insert_nested("cardinal", field("integer", DIGIT.plus()));
        let untag = delete_nested("cardinal", delete_field("integer", field_value()));
        let tagged = tag.best("7").unwrap().output;
        assert_eq!(tagged, "cardinal { integer: \"7\" }");
        assert_eq!(untag.best(&tagged).unwrap().output, "7");
    }

    #[test]
    fn test_numeric_range_and_padding() {
        let day = numeric_range(1, 31).compose(pad_two_digits());
        assert_eq!(day.best("7").unwrap().output, "07");
        assert_eq!(day.best("31").unwrap().output, "31");
        assert!(!day.accepts("32"));
        assert!(!day.accepts("0"));
    }

    #[test]
    fn test_optional_delimiter_prefers_deletion() {
        let t = concat([accept("5"), optional_delimiter(), accept("руб.")]);
        let best = t.best("5 руб.").unwrap();
        assert_eq!(best.output, "5руб.");
        assert!(best.weight < 0.0);
        assert_eq!(t.best("5руб.").unwrap().weight, 0.0);
    }

    #[test]
    fn test_extra_space_folding() {
        let t = concat([accept("a"), DELETE_EXTRA_SPACE.clone(), accept("b")]);
        assert_eq!(t.best("a   b").unwrap().output, "a b");
    }
}
