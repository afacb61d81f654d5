//! 句子级规范化引擎
//!
//! 在词序列上做动态规划：每个不超过 `MAX_SPAN_WORDS` 个词的片段交给标注并集，
//! 命中时以标注权重计分并渲染；未命中的词原样保留，每词计 `PASSTHROUGH_WEIGHT`。

use std::time::Instant;

use anyhow::{Context, Result};
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizerConfig;
use crate::data::{DataSource, GrammarData};
use crate::fst::Weight;
use crate::grammar::token::{SemioticClass, Token};
use crate::grammar::GraphFst;
use crate::locale::{self, LocaleGrammars};
use crate::normalizer::tokenizer::{Word, WordTokenizer};
use crate::normalizer::types::{
    Candidate, ExportedGrammar, GrammarInfo, NormalizationResult, Replacement, TaggedSpan,
};

/// 一个片段最多跨越的词数
pub const MAX_SPAN_WORDS: usize = 12;

/// 不被任何标注器接受的词原样输出的代价
pub const PASSTHROUGH_WEIGHT: Weight = 100.0;

/// 片段的一种读法
#[derive(Debug, Clone)]
struct Reading {
    token: String,
    class: SemioticClass,
    rendered: String,
    weight: Weight,
    /// 被读法覆盖部分的结束字节索引，其后的词尾标点原样保留
    core_end: usize,
}

#[derive(Debug, Clone)]
enum Segment {
    Plain(usize),
    Tagged {
        first: usize,
        end: usize,
        reading: Reading,
    },
}

#[derive(Debug, Clone)]
struct Hypothesis {
    weight: Weight,
    segments: Vec<Segment>,
}

impl Hypothesis {
    fn extend(&self, weight: Weight, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self {
            weight: self.weight + weight,
            segments,
        }
    }
}

/// 规范化引擎（构建一次，之后只读共享）
pub struct Normalizer {
    config: NormalizerConfig,
    grammars: LocaleGrammars,
    fingerprint: String,
}

impl Normalizer {
    /// 按配置构建语法；任何数据或自检错误都会使构建失败
    pub fn new(config: &NormalizerConfig) -> Result<Self> {
        config.validate()?;

        let source = match &config.data_dir {
            Some(dir) => DataSource::Directory(dir.clone()),
            None => DataSource::Embedded,
        };
        tracing::info!(
            "创建规范化器: lang={} mode={:?} source={:?}",
            config.lang,
            config.mode,
            source
        );

        let mut data =
            GrammarData::new(&config.lang, source).with_whitelist(config.whitelist.clone());
        let grammars = locale::build(&config.lang, config.mode, &mut data, config.deterministic)
            .with_context(|| format!("构建 {} 语法失败", config.lang))?;

        if config.verify_on_build {
            locale::self_check(&config.lang, &grammars)?;
        }

        Ok(Self {
            config: config.clone(),
            grammars,
            fingerprint: data.fingerprint(),
        })
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn classify(&self) -> &GraphFst {
        &self.grammars.classify
    }

    pub fn verbalize(&self) -> &GraphFst {
        &self.grammars.verbalize
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// 规范化文本
    ///
    /// 不可失败：没有任何片段被识别时返回归一化后的原文
    pub fn normalize(&self, text: &str) -> NormalizationResult {
        let start = Instant::now();

        if text.is_empty() {
            return NormalizationResult::unchanged(String::new(), 0);
        }

        let normalized = unicode_normalize(text);
        let words = WordTokenizer::tokenize(&normalized);
        let Some(best) = self.search(&normalized, &words, 1).into_iter().next() else {
            return NormalizationResult::unchanged(normalized, elapsed_us(start));
        };

        let output = render(&normalized, &words, &best.segments);
        let applied: Vec<Replacement> = best
            .segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Tagged { first, reading, .. } => {
                    let original = &normalized[words[*first].start..reading.core_end];
                    (original != reading.rendered).then(|| Replacement {
                        original: original.to_string(),
                        replaced: reading.rendered.clone(),
                        start: words[*first].start,
                        end: reading.core_end,
                        class: reading.class,
                        weight: reading.weight,
                    })
                }
                Segment::Plain(_) => None,
            })
            .collect();

        tracing::debug!("规范化完成: {} 处替换", applied.len());
        let changed = output != text;
        NormalizationResult {
            text: output,
            changed,
            applied,
            elapsed_us: elapsed_us(start),
        }
    }

    /// 按总权重排列的不同渲染结果，最多 `k` 个
    pub fn normalize_candidates(&self, text: &str, k: usize) -> Vec<Candidate> {
        if k == 0 {
            return Vec::new();
        }
        let normalized = unicode_normalize(text);
        let words = WordTokenizer::tokenize(&normalized);
        self.search(&normalized, &words, k)
            .into_iter()
            .map(|h| Candidate {
                text: render(&normalized, &words, &h.segments),
                weight: h.weight,
            })
            .collect()
    }

    /// 最优切分中每个被识别片段的词元
    pub fn tag(&self, text: &str) -> Result<Vec<TaggedSpan>> {
        let normalized = unicode_normalize(text);
        let words = WordTokenizer::tokenize(&normalized);
        let Some(best) = self.search(&normalized, &words, 1).into_iter().next() else {
            return Ok(Vec::new());
        };

        best.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Tagged { first, reading, .. } => Some((first, reading)),
                Segment::Plain(_) => None,
            })
            .map(|(first, reading)| {
                let start = words[*first].start;
                Ok(TaggedSpan {
                    original: normalized[start..reading.core_end].to_string(),
                    start,
                    end: reading.core_end,
                    token: Token::parse(&reading.token)
                        .with_context(|| format!("无法解析词元: {}", reading.token))?,
                })
            })
            .collect()
    }

    /// 并行规范化多段互不相关的文本，结果顺序与输入一致
    pub fn normalize_batch<S>(&self, texts: &[S]) -> Vec<NormalizationResult>
    where
        S: AsRef<str> + Sync,
    {
        if texts.is_empty() {
            return Vec::new();
        }
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(texts.len());
        let chunk = texts.len().div_ceil(workers);

        std::thread::scope(|scope| {
            let handles: Vec<_> = texts
                .chunks(chunk)
                .map(|part| {
                    scope.spawn(move || {
                        part.iter()
                            .map(|t| self.normalize(t.as_ref()))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(results) => results,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }

    /// 标注与渲染组合后的单个转换器，附带元数据与数据指纹
    pub fn pipeline(&self) -> ExportedGrammar {
        let info = |g: &GraphFst| GrammarInfo {
            name: g.name().to_string(),
            kind: g.kind(),
            deterministic: g.deterministic(),
        };
        ExportedGrammar {
            lang: self.config.lang.clone(),
            mode: self.config.mode,
            stages: vec![
                info(&self.grammars.classify),
                info(&self.grammars.verbalize),
            ],
            fst: self
                .grammars
                .classify
                .fst()
                .compose(self.grammars.verbalize.fst()),
            fingerprint: self.fingerprint.clone(),
        }
    }

    /// 保留前 k 个假设的切分搜索
    fn search(&self, text: &str, words: &[Word], k: usize) -> Vec<Hypothesis> {
        let n = words.len();
        let mut chart: Vec<Vec<Hypothesis>> = vec![Vec::new(); n + 1];
        chart[0].push(Hypothesis {
            weight: 0.0,
            segments: Vec::new(),
        });

        for end in 1..=n {
            let mut options: Vec<Hypothesis> = chart[end - 1]
                .iter()
                .map(|h| h.extend(PASSTHROUGH_WEIGHT, Segment::Plain(end - 1)))
                .collect();

            for first in end.saturating_sub(MAX_SPAN_WORDS)..end {
                if chart[first].is_empty() {
                    continue;
                }
                for reading in self.span_readings(text, &words[first..end], k) {
                    for h in &chart[first] {
                        options.push(h.extend(
                            reading.weight,
                            Segment::Tagged {
                                first,
                                end,
                                reading: reading.clone(),
                            },
                        ));
                    }
                }
            }

            options.sort_by(|a, b| a.weight.total_cmp(&b.weight));
            let mut seen = Vec::new();
            options.retain(|h| {
                let prefix = render(text, words, &h.segments);
                if seen.contains(&prefix) {
                    false
                } else {
                    seen.push(prefix);
                    true
                }
            });
            options.truncate(k);
            chart[end] = options;
        }

        chart.pop().unwrap_or_default()
    }

    /// 片段的读法；整段不被接受时依次尝试剥离末词的词尾标点
    fn span_readings(&self, text: &str, span: &[Word], k: usize) -> Vec<Reading> {
        let (Some(first), Some(last)) = (span.first(), span.last()) else {
            return Vec::new();
        };

        let cuts = std::iter::once(last.end)
            .chain(last.trailing_splits().into_iter().map(|s| last.start + s));
        for core_end in cuts {
            let readings = self.readings(&text[first.start..core_end], core_end, k);
            if !readings.is_empty() {
                return readings;
            }
        }
        Vec::new()
    }

    fn readings(&self, core: &str, core_end: usize, k: usize) -> Vec<Reading> {
        let mut readings = Vec::new();

        for tagged in self.grammars.classify.fst().top_k(core, k) {
            let class = match Token::parse(&tagged.output) {
                Ok(token) => token.class,
                Err(e) => {
                    tracing::warn!("标注输出不是合法词元 {:?}: {}", tagged.output, e);
                    continue;
                }
            };

            let rendered = self.grammars.verbalize.fst().top_k(&tagged.output, k);
            if rendered.is_empty() {
                tracing::warn!("词元无法渲染: {}", tagged.output);
            }
            for path in rendered {
                readings.push(Reading {
                    token: tagged.output.clone(),
                    class,
                    rendered: path.output,
                    weight: tagged.weight + path.weight,
                    core_end,
                });
            }
        }

        readings.sort_by(|a, b| a.weight.total_cmp(&b.weight));
        let mut seen: Vec<String> = Vec::new();
        readings.retain(|r| {
            if seen.contains(&r.rendered) {
                false
            } else {
                seen.push(r.rendered.clone());
                true
            }
        });
        readings.truncate(k);
        readings
    }
}

fn render(text: &str, words: &[Word], segments: &[Segment]) -> String {
    let pieces: Vec<String> = segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(idx) => words[*idx].text.clone(),
            Segment::Tagged { end, reading, .. } => {
                let trailing = &text[reading.core_end..words[*end - 1].end];
                format!("{}{}", reading.rendered, trailing)
            }
        })
        .collect();
    pieces.join(" ")
}

fn elapsed_us(start: Instant) -> u64 {
    start.elapsed().as_micros() as u64
}

/// Unicode 归一化 (NFC) + 空白折叠
fn unicode_normalize(text: &str) -> String {
    let nfc: String = text.nfc().collect();

    let mut result = String::with_capacity(nfc.len());
    let mut prev_whitespace = false;
    for ch in nfc.chars() {
        if ch.is_whitespace() {
            if !prev_whitespace {
                result.push(' ');
                prev_whitespace = true;
            }
        } else {
            result.push(ch);
            prev_whitespace = false;
        }
    }

    result.trim().to_string()
}
