//! ru 标注器：书写形式 -> 词元

pub mod cardinal;
pub mod decimal;
pub mod money;
pub mod telephone;
pub mod tokenize_and_classify;
pub mod whitelist;

pub use tokenize_and_classify::ClassifyFst;
