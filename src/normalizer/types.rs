//! 规范化结果类型

use serde::{Deserialize, Serialize};

use crate::config::NormalizationMode;
use crate::fst::{Transducer, Weight};
use crate::grammar::token::{SemioticClass, Token};
use crate::grammar::GrammarKind;

/// 替换记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replacement {
    /// 原始文本
    pub original: String,
    /// 替换后文本
    pub replaced: String,
    /// 起始位置（归一化文本中的字节索引）
    pub start: usize,
    /// 结束位置（字节索引，不含）
    pub end: usize,
    /// 命中的语义类别
    pub class: SemioticClass,
    /// 标注 + 渲染的总权重，越小越优
    pub weight: Weight,
}

/// 规范化结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationResult {
    /// 规范化后的文本
    pub text: String,
    /// 是否有改动
    pub changed: bool,
    /// 实际发生的替换
    pub applied: Vec<Replacement>,
    /// 处理耗时（微秒）
    pub elapsed_us: u64,
}

impl NormalizationResult {
    /// 创建无修改的结果
    pub fn unchanged(text: String, elapsed_us: u64) -> Self {
        Self {
            text,
            changed: false,
            applied: Vec::new(),
            elapsed_us,
        }
    }
}

/// 一个候选渲染
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub weight: Weight,
}

/// 一个被识别的片段及其词元
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedSpan {
    pub original: String,
    pub start: usize,
    pub end: usize,
    pub token: Token,
}

/// 组合语法的一个阶段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarInfo {
    pub name: String,
    pub kind: GrammarKind,
    pub deterministic: bool,
}

/// 供外部导出工具使用的组合语法
#[derive(Debug, Clone)]
pub struct ExportedGrammar {
    pub lang: String,
    pub mode: NormalizationMode,
    /// 按执行顺序：标注，然后渲染
    pub stages: Vec<GrammarInfo>,
    /// classify ∘ verbalize
    pub fst: Transducer,
    /// 加载过的词表内容摘要
    pub fingerprint: String,
}

#[derive(Serialize)]
struct Manifest<'a> {
    lang: &'a str,
    mode: NormalizationMode,
    stages: &'a [GrammarInfo],
    fingerprint: &'a str,
}

impl ExportedGrammar {
    /// 不含转换器本身的 JSON 描述
    pub fn manifest(&self) -> anyhow::Result<String> {
        let manifest = Manifest {
            lang: &self.lang,
            mode: self.mode,
            stages: &self.stages,
            fingerprint: &self.fingerprint,
        };
        Ok(serde_json::to_string_pretty(&manifest)?)
    }
}
