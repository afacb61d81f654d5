//! pt 渲染器：词元 -> 书写形式

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
pub mod verbalize;
pub mod whitelist;

pub use verbalize::VerbalizeFst;
