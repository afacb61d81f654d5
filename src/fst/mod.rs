//! 转换器代数层
//!
//! 语法只通过这里的具名函数构造转换器，不关心求值方式：
//! - `accept` / `cross` / `delete` / `insert`：字面接受与改写
//! - `union` / `concat` / `closure`：正则运算
//! - `compose` / `difference` / `add_weight` / `project_input`
//! - `string_file`：由有序词表构造
//!
//! 非确定模式不是单独的代码路径，而是同一个转换器上的 `paths` / `top_k` 查询。

mod lexicon;
mod matcher;
mod transducer;

pub use lexicon::{Lexicon, LexiconError};
pub use transducer::{
    accept, concat, cross, delete, insert, string_file, union, Path, Transducer, Weight,
};
