//! 数字串拼读为俄语数词
//!
//! 千位计数词总是阴性（"две тысячи"），个位按调用方选择阳性或阴性
//! （"два рубля" / "две целых"）。名词形式随数词结尾变化：
//! 1 -> тысяча，2-4 -> тысячи，其余（含 11-14）-> тысяч。

use anyhow::Result;

use crate::data::GrammarData;
use crate::fst::{accept, concat, cross, delete, insert, string_file, union, Transducer};
use crate::grammar::graph_utils::{digits_ending_with, DIGIT};

/// 结尾为 1 但不是 11
pub fn ends_with_one() -> Transducer {
    digits_ending_with("1").difference(digits_ending_with("11"))
}

/// 结尾为 2、3、4 但不是 12、13、14
pub fn ends_with_few() -> Transducer {
    let few = union(["2", "3", "4"].map(digits_ending_with));
    let teens = union(["12", "13", "14"].map(digits_ending_with));
    few.difference(teens)
}

pub fn ends_with_many() -> Transducer {
    DIGIT
        .plus()
        .difference(union([ends_with_one(), ends_with_few()]))
}

/// 在拼读结果后追加与数词一致的名词形式
pub fn agree(number: &Transducer, one: &str, few: &str, many: &str) -> Transducer {
    union([
        concat([ends_with_one().compose(number), insert(one)]),
        concat([ends_with_few().compose(number), insert(few)]),
        concat([ends_with_many().compose(number), insert(many)]),
    ])
}

struct Parts {
    teen: Transducer,
    ties: Transducer,
    hundreds: Transducer,
}

impl Parts {
    /// "10".."99"
    fn tens(&self, units: &Transducer) -> Transducer {
        union([
            self.teen.clone(),
            concat([self.ties.clone(), delete("0")]),
            concat([self.ties.clone(), insert(" "), units.clone()]),
        ])
    }

    /// "100".."999"
    fn hundreds(&self, units: &Transducer) -> Transducer {
        concat([
            self.hundreds.clone(),
            union([
                delete("00"),
                concat([delete("0"), insert(" "), units.clone()]),
                concat([insert(" "), self.tens(units)]),
            ]),
        ])
    }

    /// "1".."999"
    fn up_to_thousand(&self, units: &Transducer) -> Transducer {
        union([units.clone(), self.tens(units), self.hundreds(units)])
    }

    /// 千位之后恰好三位；"000" 不出声，其余前面带空格
    fn remainder(&self, units: &Transducer) -> Transducer {
        union([
            delete("000"),
            concat([delete("00"), insert(" "), units.clone()]),
            concat([delete("0"), insert(" "), self.tens(units)]),
            concat([insert(" "), self.hundreds(units)]),
        ])
    }
}

/// "0".."999999" 的阳性与阴性拼读
pub struct NumberNames {
    pub masculine: Transducer,
    pub feminine: Transducer,
    /// 单个数字 "0".."9"
    pub digit: Transducer,
}

impl NumberNames {
    pub fn new(data: &mut GrammarData) -> Result<Self> {
        let zero = string_file(&data.lexicon("numbers/zero.tsv")?);
        let units = string_file(&data.lexicon("numbers/digit.tsv")?);
        let units_feminine = string_file(&data.lexicon("numbers/digit_feminine.tsv")?);
        let parts = Parts {
            teen: string_file(&data.lexicon("numbers/teen.tsv")?),
            ties: string_file(&data.lexicon("numbers/ties.tsv")?),
            hundreds: string_file(&data.lexicon("numbers/hundreds.tsv")?),
        };

        let thousands = agree(
            &parts.up_to_thousand(&units_feminine),
            " тысяча",
            " тысячи",
            " тысяч",
        );
        let number = |units: &Transducer| {
            union([
                zero.clone(),
                parts.up_to_thousand(units),
                concat([thousands.clone(), parts.remainder(units)]),
            ])
        };

        Ok(Self {
            masculine: number(&units),
            feminine: number(&units_feminine),
            digit: union([zero.clone(), units]),
        })
    }

    /// 逐位拼读，允许前导零："007" -> "ноль ноль семь"
    pub fn digitwise(&self) -> Transducer {
        concat([
            self.digit.clone(),
            concat([insert(" "), self.digit.clone()]).star(),
        ])
    }

    /// 全零串读作 "ноль"
    pub fn all_zeros() -> Transducer {
        cross(accept("0").plus(), "ноль")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSource;

    fn names() -> NumberNames {
        let mut data = GrammarData::new("ru", DataSource::Embedded);
        NumberNames::new(&mut data).unwrap()
    }

    #[test]
    fn test_masculine() {
        let n = names();
        let cases = [
            ("0", "ноль"),
            ("5", "пять"),
            ("12", "двенадцать"),
            ("40", "сорок"),
            ("21", "двадцать один"),
            ("100", "сто"),
            ("105", "сто пять"),
            ("342", "триста сорок два"),
            ("1000", "одна тысяча"),
            ("2020", "две тысячи двадцать"),
            ("5001", "пять тысяч один"),
            ("11000", "одиннадцать тысяч"),
            ("21300", "двадцать одна тысяча триста"),
            ("999999", "девятьсот девяносто девять тысяч девятьсот девяносто девять"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                n.masculine.best(input).map(|p| p.output),
                Some(expected.to_string()),
                "{}",
                input
            );
        }
    }

    #[test]
    fn test_feminine_units() {
        let n = names();
        assert_eq!(n.feminine.best("1").unwrap().output, "одна");
        assert_eq!(n.feminine.best("22").unwrap().output, "двадцать две");
    }

    #[test]
    fn test_leading_zeros_rejected() {
        let n = names();
        assert!(!n.masculine.accepts("05"));
        assert!(!n.masculine.accepts("1000000"));
        assert_eq!(n.digitwise().best("007").unwrap().output, "ноль ноль семь");
    }

    #[test]
    fn test_agreement_classes() {
        assert!(ends_with_one().accepts("21"));
        assert!(!ends_with_one().accepts("11"));
        assert!(ends_with_few().accepts("34"));
        assert!(!ends_with_few().accepts("13"));
        assert!(ends_with_many().accepts("13"));
        assert!(ends_with_many().accepts("0"));
        assert!(!ends_with_many().accepts("2"));
    }
}
