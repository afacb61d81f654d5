//! 结构化词元的类型化访问层
//!
//! 转换器之间传递的是字面文本 `class { field: "value" ... }`，
//! 应用代码通过 `Token::parse` / `Display` 互转，不直接解析花括号和引号。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 语义类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemioticClass {
    Cardinal,
    Ordinal,
    Decimal,
    Fraction,
    Measure,
    Money,
    Date,
    Time,
    Telephone,
    Electronic,
    Whitelist,
}

impl SemioticClass {
    pub const ALL: [SemioticClass; 11] = [
        SemioticClass::Cardinal,
        SemioticClass::Ordinal,
        SemioticClass::Decimal,
        SemioticClass::Fraction,
        SemioticClass::Measure,
        SemioticClass::Money,
        SemioticClass::Date,
        SemioticClass::Time,
        SemioticClass::Telephone,
        SemioticClass::Electronic,
        SemioticClass::Whitelist,
    ];

    /// 词元中使用的类名
    pub fn as_str(&self) -> &'static str {
        match self {
            SemioticClass::Cardinal => "cardinal",
            SemioticClass::Ordinal => "ordinal",
            SemioticClass::Decimal => "decimal",
            SemioticClass::Fraction => "fraction",
            SemioticClass::Measure => "measure",
            SemioticClass::Money => "money",
            SemioticClass::Date => "date",
            SemioticClass::Time => "time",
            SemioticClass::Telephone => "telephone",
            SemioticClass::Electronic => "electronic",
            SemioticClass::Whitelist => "whitelist",
        }
    }
}

impl fmt::Display for SemioticClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemioticClass {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemioticClass::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TokenError::UnknownClass(s.to_string()))
    }
}

/// 词元解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("未知的语义类别: {0}")]
    UnknownClass(String),
    #[error("位置 {offset} 处期望 '{expected}'")]
    Expected { expected: char, offset: usize },
    #[error("位置 {offset} 处缺少字段名")]
    MissingName { offset: usize },
    #[error("位置 {offset} 处的引号未闭合")]
    UnterminatedQuote { offset: usize },
    #[error("位置 {offset} 之后存在多余内容")]
    TrailingInput { offset: usize },
}

/// 词元字段：文本值或嵌套词元
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Text { name: String, value: String },
    Nested(Token),
}

/// 结构化词元
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub class: SemioticClass,
    pub fields: Vec<Field>,
}

impl Token {
    pub fn new(class: SemioticClass) -> Self {
        Self {
            class,
            fields: Vec::new(),
        }
    }

    /// 追加文本字段（构造器风格）
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.fields.push(Field::Text {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// 追加嵌套词元
    pub fn with_nested(mut self, token: Token) -> Self {
        self.fields.push(Field::Nested(token));
        self
    }

    /// 按名称取文本字段
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|f| match f {
            Field::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// 按类别取嵌套词元
    pub fn nested(&self, class: SemioticClass) -> Option<&Token> {
        self.fields.iter().find_map(|f| match f {
            Field::Nested(t) if t.class == class => Some(t),
            _ => None,
        })
    }

    /// 解析词元文本
    pub fn parse(text: &str) -> Result<Self, TokenError> {
        let mut parser = Parser::new(text);
        parser.skip_space();
        let token = parser.token()?;
        parser.skip_space();
        if parser.pos < parser.chars.len() {
            return Err(TokenError::TrailingInput { offset: parser.pos });
        }
        Ok(token)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.class)?;
        for field in &self.fields {
            match field {
                Field::Text { name, value } => write!(f, " {}: \"{}\"", name, value)?,
                Field::Nested(token) => write!(f, " {}", token)?,
            }
        }
        write!(f, " }}")
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::parse(s)
    }
}

/// 按字符扫描的递归下降解析器
struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_space(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), TokenError> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(TokenError::Expected {
                expected,
                offset: self.pos,
            })
        }
    }

    fn ident(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn token(&mut self) -> Result<Token, TokenError> {
        let name = self.ident();
        let class = name.parse::<SemioticClass>()?;
        self.skip_space();
        self.expect('{')?;

        let mut token = Token::new(class);
        loop {
            self.skip_space();
            match self.peek() {
                Some('}') => {
                    self.pos += 1;
                    return Ok(token);
                }
                None => {
                    return Err(TokenError::Expected {
                        expected: '}',
                        offset: self.pos,
                    })
                }
                Some(_) => {}
            }

            let name_offset = self.pos;
            let name = self.ident();
            if name.is_empty() {
                return Err(TokenError::MissingName {
                    offset: name_offset,
                });
            }
            self.skip_space();

            if self.peek() == Some('{') {
                // 嵌套词元：回退到类名处重新解析
                self.pos = name_offset;
                token.fields.push(Field::Nested(self.token()?));
                continue;
            }

            self.expect(':')?;
            self.skip_space();
            let value = self.quoted()?;
            token.fields.push(Field::Text { name, value });
        }
    }

    fn quoted(&mut self) -> Result<String, TokenError> {
        let start = self.pos;
        self.expect('"')?;
        let mut value = String::new();
        loop {
            match self.peek() {
                Some('"') => {
                    self.pos += 1;
                    return Ok(value);
                }
                Some(c) => {
                    value.push(c);
                    self.pos += 1;
                }
                None => return Err(TokenError::UnterminatedQuote { offset: start }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_token() {
        let token = Token::parse(
            r#"decimal { negative: "true" integer_part: "1" morphosyntactic_features: "," fractional_part: "26" }"#,
        )
        .unwrap();
        assert_eq!(token.class, SemioticClass::Decimal);
        assert_eq!(token.get("negative"), Some("true"));
        assert_eq!(token.get("morphosyntactic_features"), Some(","));
        assert_eq!(token.get("fractional_part"), Some("26"));
        assert_eq!(token.get("quantity"), None);
    }

    #[test]
    fn test_parse_nested_token() {
        let token = Token::parse(r#"measure { cardinal { integer: "2" } units: "km" }"#).unwrap();
        assert_eq!(token.class, SemioticClass::Measure);
        let inner = token.nested(SemioticClass::Cardinal).unwrap();
        assert_eq!(inner.get("integer"), Some("2"));
        assert_eq!(token.get("units"), Some("km"));
    }

    #[test]
    fn test_display_matches_grammar_framing() {
        let token = Token::new(SemioticClass::Money)
            .with("integer_part", "5")
            .with("currency", "рублей");
        assert_eq!(
            token.to_string(),
            r#"money { integer_part: "5" currency: "рублей" }"#
        );
        assert_eq!(Token::parse(&token.to_string()).unwrap(), token);
    }

    #[test]
    fn test_nested_display_round_trip() {
        let inner = Token::new(SemioticClass::Decimal)
            .with("integer_part", "1")
            .with("fractional_part", "5");
        let token = Token::new(SemioticClass::Money)
            .with_nested(inner.clone())
            .with("currency", "долларов");
        assert_eq!(
            token.to_string(),
            r#"money { decimal { integer_part: "1" fractional_part: "5" } currency: "долларов" }"#
        );
        let parsed = Token::parse(&token.to_string()).unwrap();
        assert_eq!(parsed.nested(SemioticClass::Decimal), Some(&inner));
        assert_eq!(parsed, token);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Token::parse("bogus { }").unwrap_err(),
            TokenError::UnknownClass("bogus".to_string())
        );
        assert!(matches!(
            Token::parse(r#"cardinal { integer: "2 }"#).unwrap_err(),
            TokenError::UnterminatedQuote { .. }
        ));
        assert!(matches!(
            Token::parse(r#"cardinal { integer: "2" "#).unwrap_err(),
            TokenError::Expected { expected: '}', .. }
        ));
        assert!(matches!(
            Token::parse(r#"cardinal { integer: "2" } x"#).unwrap_err(),
            TokenError::TrailingInput { .. }
        ));
    }

    #[test]
    fn test_class_names_round_trip() {
        for class in SemioticClass::ALL {
            assert_eq!(class.as_str().parse::<SemioticClass>().unwrap(), class);
        }
    }
}
