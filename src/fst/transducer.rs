//! 转换器值与代数运算
//!
//! `Transducer` 是不可变的运算树（`Arc` 共享，克隆开销很小）。
//! 所有运算都是封闭的：并、连接、闭包、复合、差集、加权都返回新的 `Transducer`。

use std::fmt;
use std::sync::Arc;

use super::lexicon::{Lexicon, LexiconIndex};
use super::matcher::Matcher;

/// 热带半环权重：路径权重相加，越小越优
pub type Weight = f64;

/// 一条完整路径的输出
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub output: String,
    pub weight: Weight,
}

/// 加权有限状态转换器
#[derive(Clone)]
pub struct Transducer {
    node: Arc<Node>,
}

pub(crate) enum Node {
    /// 空语言
    Empty,
    /// 接受字面串并原样输出
    Accept(String),
    /// 接受满足谓词的单个字符
    Class {
        name: &'static str,
        test: fn(char) -> bool,
    },
    /// 消费 `input` 接受的串，输出固定串
    Rewrite { input: Transducer, output: String },
    Union(Vec<Transducer>),
    Concat(Vec<Transducer>),
    Closure {
        inner: Transducer,
        min: usize,
        max: Option<usize>,
    },
    Compose(Transducer, Transducer),
    /// 左侧路径中，输入串不被右侧接受的部分
    Difference(Transducer, Transducer),
    Weighted(Transducer, Weight),
    ProjectInput(Transducer),
    Lexicon(Arc<LexiconIndex>),
}

impl Transducer {
    fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    pub(crate) fn node(&self) -> &Node {
        &self.node
    }

    /// 节点标识（用于求值缓存）
    pub(crate) fn id(&self) -> usize {
        Arc::as_ptr(&self.node) as usize
    }

    /// 空语言，不接受任何输入
    pub fn empty() -> Self {
        Self::from_node(Node::Empty)
    }

    /// `s → s`，权重 0
    pub fn accept(s: &str) -> Self {
        Self::from_node(Node::Accept(s.to_string()))
    }

    /// 字面改写：`input` 接受的串 → `output`
    pub fn cross(input: impl Into<Transducer>, output: &str) -> Self {
        Self::from_node(Node::Rewrite {
            input: input.into(),
            output: output.to_string(),
        })
    }

    /// 单字符类
    pub fn char_class(name: &'static str, test: fn(char) -> bool) -> Self {
        Self::from_node(Node::Class { name, test })
    }

    /// 由词表构造：surface → canonical
    pub fn string_file(lexicon: &Lexicon) -> Self {
        if lexicon.is_empty() {
            return Self::empty();
        }
        Self::from_node(Node::Lexicon(Arc::new(LexiconIndex::new(lexicon))))
    }

    /// 并：任一分支接受即接受，保留所有结果
    pub fn union(items: impl IntoIterator<Item = Transducer>) -> Self {
        let mut flat = Vec::new();
        for item in items {
            match item.node() {
                Node::Empty => {}
                Node::Union(children) => flat.extend(children.iter().cloned()),
                _ => flat.push(item),
            }
        }
        match flat.len() {
            0 => Self::empty(),
            1 => flat.remove(0),
            _ => Self::from_node(Node::Union(flat)),
        }
    }

    /// 连接：按顺序消费输入，输出依次拼接
    pub fn concat(items: impl IntoIterator<Item = Transducer>) -> Self {
        let mut flat = Vec::new();
        for item in items {
            match item.node() {
                Node::Empty => return Self::empty(),
                Node::Concat(children) => flat.extend(children.iter().cloned()),
                Node::Accept(s) if s.is_empty() => {}
                _ => flat.push(item),
            }
        }
        match flat.len() {
            0 => Self::accept(""),
            1 => flat.remove(0),
            _ => Self::from_node(Node::Concat(flat)),
        }
    }

    pub fn union_with(&self, other: impl Into<Transducer>) -> Self {
        Self::union([self.clone(), other.into()])
    }

    pub fn concat_with(&self, other: impl Into<Transducer>) -> Self {
        Self::concat([self.clone(), other.into()])
    }

    /// 重复 `min..=max` 次，`max = None` 表示不设上限
    pub fn closure(&self, min: usize, max: Option<usize>) -> Self {
        Self::from_node(Node::Closure {
            inner: self.clone(),
            min,
            max,
        })
    }

    /// 至多一次
    pub fn optional(&self) -> Self {
        self.closure(0, Some(1))
    }

    pub fn star(&self) -> Self {
        self.closure(0, None)
    }

    pub fn plus(&self) -> Self {
        self.closure(1, None)
    }

    /// 复合：`self` 的输出作为 `other` 的输入
    pub fn compose(&self, other: impl Into<Transducer>) -> Self {
        Self::from_node(Node::Compose(self.clone(), other.into()))
    }

    /// 差集：去掉输入串被 `other` 接受的路径
    pub fn difference(&self, other: impl Into<Transducer>) -> Self {
        Self::from_node(Node::Difference(self.clone(), other.into()))
    }

    /// 给每条路径加权，不改变接受语言
    pub fn add_weight(&self, weight: Weight) -> Self {
        Self::from_node(Node::Weighted(self.clone(), weight))
    }

    /// 输入侧投影：输出等于消费的输入
    pub fn project_input(&self) -> Self {
        Self::from_node(Node::ProjectInput(self.clone()))
    }

    /// 所有完整路径，按权重升序；同一输出只保留最小权重
    pub fn paths(&self, input: &str) -> Vec<Path> {
        let mut matcher = Matcher::new(input);
        let hyps = matcher.run(self, 0);

        let mut paths: Vec<Path> = Vec::new();
        for hyp in hyps.iter().filter(|h| h.end == input.len()) {
            match paths.iter_mut().find(|p| p.output == hyp.output) {
                Some(existing) => {
                    if hyp.weight < existing.weight {
                        existing.weight = hyp.weight;
                    }
                }
                None => paths.push(Path {
                    output: hyp.output.clone(),
                    weight: hyp.weight,
                }),
            }
        }

        // 稳定排序：同权重时保留枚举顺序（并的分支顺序、词表顺序）
        paths.sort_by(|a, b| a.weight.total_cmp(&b.weight));
        paths
    }

    /// 最优路径
    pub fn best(&self, input: &str) -> Option<Path> {
        self.paths(input).into_iter().next()
    }

    /// 前 k 条路径
    pub fn top_k(&self, input: &str, k: usize) -> Vec<Path> {
        let mut paths = self.paths(input);
        paths.truncate(k);
        paths
    }

    pub fn accepts(&self, input: &str) -> bool {
        let mut matcher = Matcher::new(input);
        matcher.run(self, 0).iter().any(|h| h.end == input.len())
    }
}

impl From<&str> for Transducer {
    fn from(s: &str) -> Self {
        Transducer::accept(s)
    }
}

impl From<String> for Transducer {
    fn from(s: String) -> Self {
        Transducer::accept(&s)
    }
}

impl From<&Transducer> for Transducer {
    fn from(t: &Transducer) -> Self {
        t.clone()
    }
}

impl fmt::Debug for Transducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Empty => write!(f, "Empty"),
            Node::Accept(s) => write!(f, "Accept({:?})", s),
            Node::Class { name, .. } => write!(f, "Class({})", name),
            Node::Rewrite { input, output } => write!(f, "Rewrite({:?} -> {:?})", input, output),
            Node::Union(items) => {
                write!(f, "Union")?;
                f.debug_list().entries(items).finish()
            }
            Node::Concat(items) => {
                write!(f, "Concat")?;
                f.debug_list().entries(items).finish()
            }
            Node::Closure { inner, min, max } => {
                write!(f, "Closure({:?}, {}, {:?})", inner, min, max)
            }
            Node::Compose(a, b) => write!(f, "Compose({:?}, {:?})", a, b),
            Node::Difference(a, b) => write!(f, "Difference({:?}, {:?})", a, b),
            Node::Weighted(t, w) => write!(f, "Weighted({:?}, {})", t, w),
            Node::ProjectInput(t) => write!(f, "ProjectInput({:?})", t),
            Node::Lexicon(index) => write!(f, "Lexicon({} entries)", index.len()),
        }
    }
}

/// `s → s`
pub fn accept(s: &str) -> Transducer {
    Transducer::accept(s)
}

/// `input → output`
pub fn cross(input: impl Into<Transducer>, output: &str) -> Transducer {
    Transducer::cross(input, output)
}

/// 删除：`cross(s, "")`
pub fn delete(input: impl Into<Transducer>) -> Transducer {
    Transducer::cross(input, "")
}

/// 插入：`cross("", s)`
pub fn insert(output: &str) -> Transducer {
    Transducer::cross(Transducer::accept(""), output)
}

pub fn union(items: impl IntoIterator<Item = Transducer>) -> Transducer {
    Transducer::union(items)
}

pub fn concat(items: impl IntoIterator<Item = Transducer>) -> Transducer {
    Transducer::concat(items)
}

pub fn string_file(lexicon: &Lexicon) -> Transducer {
    Transducer::string_file(lexicon)
}
