//! 词表加载
//!
//! 词表是有序的 (surface, canonical) 字符串对，TSV 格式：
//! - `surface<TAB>canonical`
//! - 单列表示 canonical 与 surface 相同（接受器）
//! - 空行忽略
//!
//! 顺序决定同权重歧义时的优先级：先列出的条目胜出。

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// 词表加载错误
#[derive(Debug, Error)]
pub enum LexiconError {
    /// 文件缺失或不可读
    #[error("无法读取词表 {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 行格式不合法
    #[error("词表 {origin} 第 {line} 行格式不合法: {reason}")]
    Malformed {
        origin: String,
        line: usize,
        reason: String,
    },
}

/// 有序词表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    origin: String,
    entries: Vec<(String, String)>,
}

impl Lexicon {
    /// 从文件加载词表
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&path.display().to_string(), &content)
    }

    /// 解析 TSV 文本
    ///
    /// `origin` 用于错误信息与加载日志
    pub fn parse(origin: &str, content: &str) -> Result<Self, LexiconError> {
        let mut entries = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let malformed = |reason: &str| LexiconError::Malformed {
                origin: origin.to_string(),
                line: idx + 1,
                reason: reason.to_string(),
            };

            let mut columns = line.split('\t');
            let surface = columns.next().unwrap_or_default();
            let canonical = columns.next();
            if columns.next().is_some() {
                return Err(malformed("列数超过 2"));
            }
            if surface.is_empty() {
                return Err(malformed("surface 为空"));
            }

            let canonical = canonical.unwrap_or(surface);
            entries.push((surface.to_string(), canonical.to_string()));
        }

        Ok(Self {
            origin: origin.to_string(),
            entries,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 改写 surface 列，保持顺序（例如由阳性词形派生阴性词形）
    pub fn map_surface(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            origin: self.origin.clone(),
            entries: self
                .entries
                .iter()
                .map(|(s, c)| (f(s), c.clone()))
                .collect(),
        }
    }
}

/// 按首字符索引的词表，供求值器做前缀匹配
#[derive(Debug)]
pub(crate) struct LexiconIndex {
    entries: Vec<(String, String)>,
    by_first: HashMap<char, Vec<usize>>,
}

impl LexiconIndex {
    pub(crate) fn new(lexicon: &Lexicon) -> Self {
        let mut by_first: HashMap<char, Vec<usize>> = HashMap::new();
        for (i, (surface, _)) in lexicon.entries.iter().enumerate() {
            if let Some(ch) = surface.chars().next() {
                by_first.entry(ch).or_default().push(i);
            }
        }
        Self {
            entries: lexicon.entries.clone(),
            by_first,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// 所有 surface 是 `rest` 前缀的条目，按词表顺序
    pub(crate) fn prefixes_of<'a>(
        &'a self,
        rest: &'a str,
    ) -> impl Iterator<Item = &'a (String, String)> + 'a {
        let candidates = rest
            .chars()
            .next()
            .and_then(|ch| self.by_first.get(&ch))
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        candidates
            .iter()
            .map(move |&i| &self.entries[i])
            .filter(move |(surface, _)| rest.starts_with(surface.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_two_columns_and_identity() {
        let lex = Lexicon::parse("mem", "um\t1\ndois\t2\n\nzero\n").unwrap();
        assert_eq!(lex.len(), 3);
        assert_eq!(lex.entries()[0], ("um".to_string(), "1".to_string()));
        assert_eq!(lex.entries()[2], ("zero".to_string(), "zero".to_string()));
    }

    #[test]
    fn test_parse_rejects_extra_columns() {
        let err = Lexicon::parse("mem", "um\t1\ndois\t2\tx\n").unwrap_err();
        match err {
            LexiconError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_surface() {
        assert!(Lexicon::parse("mem", "\t1\n").is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Lexicon::load(&dir.path().join("missing.tsv")).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }

    #[test]
    fn test_load_from_file_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("currency.tsv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "real\tR$").unwrap();
        writeln!(file, "euro\t€").unwrap();
        drop(file);

        let lex = Lexicon::load(&path).unwrap();
        let surfaces: Vec<&str> = lex.entries().iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(surfaces, vec!["real", "euro"]);
        assert!(lex.origin().ends_with("currency.tsv"));
    }

    #[test]
    fn test_index_prefix_lookup_in_order() {
        let lex = Lexicon::parse("mem", "dez\t10\ndezesseis\t16\ndois\t2\n").unwrap();
        let index = LexiconIndex::new(&lex);
        let hits: Vec<&str> = index
            .prefixes_of("dezesseis mil")
            .map(|(_, c)| c.as_str())
            .collect();
        assert_eq!(hits, vec!["10", "16"]);
    }
}
