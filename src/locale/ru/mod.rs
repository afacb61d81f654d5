//! 俄语文本规范化（TN）：书写 -> 口语
//!
//! "5 руб." -> "пять рублей"，"-12" -> "минус двенадцать"。
//! 标注器保留数字原样，数字到词的拼读全部在渲染器中完成。

pub mod taggers;
pub mod verbalizers;
