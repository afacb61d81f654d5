//! pt 标注器：口语形式 -> 词元

pub mod cardinal;
pub mod date;
pub mod decimal;
pub mod electronic;
pub mod fraction;
pub mod measure;
pub mod money;
pub mod ordinal;
pub mod telephone;
pub mod time;
pub mod tokenize_and_classify;
pub mod whitelist;

pub use tokenize_and_classify::ClassifyFst;
