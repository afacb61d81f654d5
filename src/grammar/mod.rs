//! 语法基类与词元协议
//!
//! 每个语义类别的标注器（classify）与渲染器（verbalize）都是一个 `GraphFst`：
//! 名称 + 类型 + 确定性标志 + 一个转换器。
//! 标注器输出 `name { field: "value" ... }`，渲染器删除同样的框架，只保留字段值。

pub mod graph_utils;
pub mod token;

use serde::{Deserialize, Serialize};

use crate::fst::{accept, concat, delete, insert, Transducer};
use graph_utils::DELETE_SPACE;

/// 语法类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammarKind {
    Classify,
    Verbalize,
}

/// 具名语法
#[derive(Debug, Clone)]
pub struct GraphFst {
    name: String,
    kind: GrammarKind,
    deterministic: bool,
    fst: Transducer,
}

impl GraphFst {
    /// 创建空语法，转换器之后通过 `with_fst` 设置
    pub fn new(name: &str, kind: GrammarKind, deterministic: bool) -> Self {
        Self {
            name: name.to_string(),
            kind,
            deterministic,
            fst: Transducer::empty(),
        }
    }

    pub fn with_fst(mut self, fst: Transducer) -> Self {
        self.fst = fst;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> GrammarKind {
        self.kind
    }

    pub fn deterministic(&self) -> bool {
        self.deterministic
    }

    pub fn fst(&self) -> &Transducer {
        &self.fst
    }

    /// 包上 `name { ... }` 框架
    pub fn add_tokens(&self, graph: impl Into<Transducer>) -> Transducer {
        concat([
            insert(&format!("{} {{ ", self.name)),
            graph.into(),
            insert(" }"),
        ])
    }

    /// 删除 `name { ... }` 框架（空白可删）
    pub fn delete_tokens(&self, graph: impl Into<Transducer>) -> Transducer {
        concat([
            delete(accept(&self.name)),
            DELETE_SPACE.clone(),
            delete("{"),
            DELETE_SPACE.clone(),
            graph.into(),
            DELETE_SPACE.clone(),
            delete("}"),
        ])
    }
}

/// 每个语义类别的语法都暴露其 `GraphFst`
pub trait Grammar {
    fn graph_fst(&self) -> &GraphFst;

    fn fst(&self) -> &Transducer {
        self.graph_fst().fst()
    }

    fn name(&self) -> &str {
        self.graph_fst().name()
    }
}
