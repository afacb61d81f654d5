//! 基于加权语法的文本规范化（TN）与反向规范化（ITN）
//!
//! 每种语言为每个语义类别（基数词、小数、金额、日期……）各写一个标注器和一个渲染器，
//! 组合成一个标注并集与一个渲染并集：
//!
//! 原文 -> 标注并集 -> `class { field: "value" }` -> 渲染并集 -> 结果
//!
//! ```ignore
//! use text_norm_lib::{NormalizationMode, Normalizer, NormalizerConfig};
//!
//! let normalizer = Normalizer::new(&NormalizerConfig::new("ru", NormalizationMode::Tn))?;
//! assert_eq!(normalizer.normalize("5 руб.").text, "пять рублей");
//! ```

pub mod config;
pub mod data;
pub mod fst;
pub mod grammar;
pub mod locale;
pub mod normalizer;

pub use config::{NormalizationMode, NormalizerConfig};
pub use data::{DataSource, GrammarData};
pub use fst::{Lexicon, LexiconError, Path, Transducer, Weight};
pub use grammar::token::{Field, SemioticClass, Token, TokenError};
pub use grammar::{Grammar, GrammarKind, GraphFst};
pub use locale::LocaleGrammars;
pub use normalizer::{
    Candidate, ExportedGrammar, NormalizationResult, Normalizer, Replacement, TaggedSpan,
};

/// 初始化日志输出（重复调用无副作用）
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().try_init();
}
