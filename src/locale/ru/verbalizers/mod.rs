//! ru 渲染器：词元 -> 俄语读法

pub mod cardinal;
pub mod decimal;
pub mod money;
pub mod numbers;
pub mod telephone;
pub mod verbalize;
pub mod whitelist;

pub use verbalize::VerbalizeFst;
