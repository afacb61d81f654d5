//! 惰性求值器
//!
//! 对一个输入串自顶向下枚举运算树的所有路径。
//! 结果按 (节点, 起点) 缓存在单次调用内部，调用结束即丢弃，不存在共享可变状态。

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

use super::transducer::{Node, Transducer, Weight};

/// 部分路径：从某个起点消费到 `end`，输出 `output`
#[derive(Debug, Clone)]
pub(crate) struct Hyp {
    pub end: usize,
    pub output: String,
    pub weight: Weight,
}

pub(crate) struct Matcher<'a> {
    input: &'a str,
    memo: HashMap<(usize, usize), Rc<Vec<Hyp>>>,
}

impl<'a> Matcher<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            memo: HashMap::new(),
        }
    }

    /// `t` 从 `pos` 开始的所有部分路径
    pub(crate) fn run(&mut self, t: &Transducer, pos: usize) -> Rc<Vec<Hyp>> {
        let key = (t.id(), pos);
        if let Some(hit) = self.memo.get(&key) {
            return Rc::clone(hit);
        }
        let hyps = Rc::new(merge(self.eval(t, pos)));
        self.memo.insert(key, Rc::clone(&hyps));
        hyps
    }

    fn eval(&mut self, t: &Transducer, pos: usize) -> Vec<Hyp> {
        let input = self.input;
        let rest = &input[pos..];

        match t.node() {
            Node::Empty => Vec::new(),

            Node::Accept(s) => {
                if rest.starts_with(s.as_str()) {
                    vec![Hyp {
                        end: pos + s.len(),
                        output: s.clone(),
                        weight: 0.0,
                    }]
                } else {
                    Vec::new()
                }
            }

            Node::Class { test, .. } => match rest.chars().next() {
                Some(ch) if test(ch) => vec![Hyp {
                    end: pos + ch.len_utf8(),
                    output: ch.to_string(),
                    weight: 0.0,
                }],
                _ => Vec::new(),
            },

            Node::Rewrite { input: source, output } => self
                .run(source, pos)
                .iter()
                .map(|h| Hyp {
                    end: h.end,
                    output: output.clone(),
                    weight: h.weight,
                })
                .collect(),

            Node::Union(items) => {
                let mut out = Vec::new();
                for item in items {
                    out.extend(self.run(item, pos).iter().cloned());
                }
                out
            }

            Node::Concat(items) => {
                let mut frontier = vec![start(pos)];
                for item in items {
                    let mut next = Vec::new();
                    for f in &frontier {
                        for h in self.run(item, f.end).iter() {
                            next.push(extend(f, h));
                        }
                    }
                    frontier = merge(next);
                    if frontier.is_empty() {
                        break;
                    }
                }
                frontier
            }

            Node::Closure { inner, min, max } => self.closure(inner, *min, *max, pos),

            Node::Compose(first, second) => {
                let mut cache: HashMap<String, Rc<Vec<Hyp>>> = HashMap::new();
                let mut out = Vec::new();
                for h in self.run(first, pos).iter() {
                    let tails = cache
                        .entry(h.output.clone())
                        .or_insert_with(|| {
                            let mut sub = Matcher::new(&h.output);
                            sub.run(second, 0)
                        })
                        .clone();
                    for g in tails.iter().filter(|g| g.end == h.output.len()) {
                        out.push(Hyp {
                            end: h.end,
                            output: g.output.clone(),
                            weight: h.weight + g.weight,
                        });
                    }
                }
                out
            }

            Node::Difference(keep, reject) => {
                let mut verdicts: HashMap<usize, bool> = HashMap::new();
                let mut out = Vec::new();
                for h in self.run(keep, pos).iter() {
                    let span = &input[pos..h.end];
                    let rejected = *verdicts
                        .entry(h.end)
                        .or_insert_with(|| reject.accepts(span));
                    if !rejected {
                        out.push(h.clone());
                    }
                }
                out
            }

            Node::Weighted(inner, w) => self
                .run(inner, pos)
                .iter()
                .map(|h| Hyp {
                    end: h.end,
                    output: h.output.clone(),
                    weight: h.weight + w,
                })
                .collect(),

            Node::ProjectInput(inner) => self
                .run(inner, pos)
                .iter()
                .map(|h| Hyp {
                    end: h.end,
                    output: input[pos..h.end].to_string(),
                    weight: h.weight,
                })
                .collect(),

            Node::Lexicon(index) => index
                .prefixes_of(rest)
                .map(|(surface, canonical)| Hyp {
                    end: pos + surface.len(),
                    output: canonical.clone(),
                    weight: 0.0,
                })
                .collect(),
        }
    }

    fn closure(
        &mut self,
        inner: &Transducer,
        min: usize,
        max: Option<usize>,
        pos: usize,
    ) -> Vec<Hyp> {
        let mut results = Vec::new();
        let mut frontier = vec![start(pos)];
        if min == 0 {
            results.extend(frontier.iter().cloned());
        }

        let mut count = 0usize;
        while max.map_or(true, |m| count < m) {
            let mut next = Vec::new();
            for f in &frontier {
                for h in self.run(inner, f.end).iter() {
                    // 达到下限后不再接受空匹配，保证终止
                    if count >= min && h.end == f.end {
                        continue;
                    }
                    next.push(extend(f, h));
                }
            }
            count += 1;
            frontier = merge(next);
            if frontier.is_empty() {
                break;
            }
            if count >= min {
                results.extend(frontier.iter().cloned());
            }
        }

        results
    }
}

fn start(pos: usize) -> Hyp {
    Hyp {
        end: pos,
        output: String::new(),
        weight: 0.0,
    }
}

fn extend(prefix: &Hyp, tail: &Hyp) -> Hyp {
    let mut output = String::with_capacity(prefix.output.len() + tail.output.len());
    output.push_str(&prefix.output);
    output.push_str(&tail.output);
    Hyp {
        end: tail.end,
        output,
        weight: prefix.weight + tail.weight,
    }
}

/// 合并相同 (end, output) 的部分路径，保留最小权重和首次出现的位置
fn merge(hyps: Vec<Hyp>) -> Vec<Hyp> {
    let mut index: HashMap<(usize, String), usize> = HashMap::with_capacity(hyps.len());
    let mut merged: Vec<Hyp> = Vec::with_capacity(hyps.len());
    for hyp in hyps {
        match index.entry((hyp.end, hyp.output.clone())) {
            Entry::Occupied(e) => {
                let slot = &mut merged[*e.get()];
                if hyp.weight < slot.weight {
                    slot.weight = hyp.weight;
                }
            }
            Entry::Vacant(e) => {
                e.insert(merged.len());
                merged.push(hyp);
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::{accept, cross, delete, union};

    #[test]
    fn test_memo_shares_subresults() {
        let word = union([cross("um", "1"), cross("dois", "2")]);
        let t = union([
            Transducer::concat([word.clone(), delete(" "), word.clone()]),
            Transducer::concat([word.clone(), delete(" "), word.clone(), accept("!")]),
        ]);
        let mut matcher = Matcher::new("um dois");
        let hyps = matcher.run(&t, 0);
        assert!(hyps.iter().any(|h| h.end == 7 && h.output == "12"));
    }

    #[test]
    fn test_merge_keeps_minimum_weight() {
        let merged = merge(vec![
            Hyp {
                end: 1,
                output: "a".into(),
                weight: 2.0,
            },
            Hyp {
                end: 1,
                output: "a".into(),
                weight: 1.0,
            },
            Hyp {
                end: 1,
                output: "b".into(),
                weight: 0.0,
            },
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].weight, 1.0);
        assert_eq!(merged[1].output, "b");
    }

    #[test]
    fn test_partial_paths_report_all_ends() {
        let t = accept("a").star();
        let mut matcher = Matcher::new("aaa");
        let ends: Vec<usize> = matcher.run(&t, 0).iter().map(|h| h.end).collect();
        assert_eq!(ends, vec![0, 1, 2, 3]);
    }
}
