//! 句子级规范化
//!
//! ## 处理流程
//! 1. Unicode 归一化 + 空白折叠
//! 2. 按空白切词
//! 3. 在词片段上搜索最低权重切分（标注并集 / 原样保留）
//! 4. 渲染被识别的片段并拼回原句

mod engine;
mod tokenizer;
mod types;

pub use engine::{Normalizer, MAX_SPAN_WORDS, PASSTHROUGH_WEIGHT};
pub use types::{
    Candidate, ExportedGrammar, GrammarInfo, NormalizationResult, Replacement, TaggedSpan,
};
