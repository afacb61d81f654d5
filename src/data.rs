//! 语法数据源
//!
//! 词表默认编译进二进制（`include_str!`），也可以指向外部数据目录
//! `<dir>/<lang>/<relative path>`。所有加载过的词表都会计入数据指纹，
//! 供导出方判断语法是否需要重建。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

use crate::fst::Lexicon;

/// 语言白名单词表的相对路径，可被配置覆盖
pub const WHITELIST: &str = "whitelist.tsv";

macro_rules! embedded {
    ($($path:literal),* $(,)?) => {
        &[$(($path, include_str!(concat!("../data/", $path)))),*]
    };
}

/// 内置词表
static EMBEDDED: &[(&str, &str)] = embedded![
    "pt/numbers/zero.tsv",
    "pt/numbers/digit.tsv",
    "pt/numbers/teen.tsv",
    "pt/numbers/ties.tsv",
    "pt/numbers/hundreds.tsv",
    "pt/numbers/quantity_suffix.tsv",
    "pt/ordinals/digit.tsv",
    "pt/ordinals/ties.tsv",
    "pt/ordinals/hundreds.tsv",
    "pt/fractions/denominator.tsv",
    "pt/money/currency_singular.tsv",
    "pt/money/currency_plural.tsv",
    "pt/money/minor_unit.tsv",
    "pt/measure/units.tsv",
    "pt/dates/months.tsv",
    "pt/electronic/symbols.tsv",
    "pt/whitelist.tsv",
    "ru/numbers/zero.tsv",
    "ru/numbers/digit.tsv",
    "ru/numbers/digit_feminine.tsv",
    "ru/numbers/teen.tsv",
    "ru/numbers/ties.tsv",
    "ru/numbers/hundreds.tsv",
    "ru/numbers/quantity.tsv",
    "ru/currency/currency_singular.tsv",
    "ru/currency/currency_plural.tsv",
    "ru/whitelist.tsv",
];

/// 词表来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Embedded,
    Directory(PathBuf),
}

/// 单次语法构建使用的数据上下文
pub struct GrammarData {
    lang: String,
    source: DataSource,
    whitelist_override: Option<PathBuf>,
    hasher: Sha256,
    loaded: usize,
}

impl GrammarData {
    pub fn new(lang: &str, source: DataSource) -> Self {
        Self {
            lang: lang.to_string(),
            source,
            whitelist_override: None,
            hasher: Sha256::new(),
            loaded: 0,
        }
    }

    /// 用外部文件替换语言自带的白名单
    pub fn with_whitelist(mut self, path: Option<PathBuf>) -> Self {
        self.whitelist_override = path;
        self
    }

    /// 加载词表；缺失或格式错误都是构建期致命错误
    pub fn lexicon(&mut self, relative: &str) -> Result<Lexicon> {
        let lexicon = match (&self.whitelist_override, relative) {
            (Some(path), WHITELIST) => {
                tracing::info!("使用自定义白名单: {:?}", path);
                load_file(path)?
            }
            _ => match &self.source {
                DataSource::Embedded => {
                    let key = format!("{}/{}", self.lang, relative);
                    let content = EMBEDDED
                        .iter()
                        .find(|(name, _)| *name == key)
                        .map(|(_, content)| *content)
                        .ok_or_else(|| anyhow::anyhow!("内置数据中不存在词表: {}", key))?;
                    Lexicon::parse(&key, content)?
                }
                DataSource::Directory(dir) => load_file(&dir.join(&self.lang).join(relative))?,
            },
        };

        self.hasher.update(relative.as_bytes());
        self.hasher.update(b"\0");
        for (surface, canonical) in lexicon.entries() {
            self.hasher.update(surface.as_bytes());
            self.hasher.update(b"\t");
            self.hasher.update(canonical.as_bytes());
            self.hasher.update(b"\n");
        }
        self.loaded += 1;

        tracing::debug!("加载词表 {} ({} 条)", lexicon.origin(), lexicon.len());
        Ok(lexicon)
    }

    /// 已加载词表数
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    /// 已加载词表内容的 SHA-256 十六进制摘要
    pub fn fingerprint(&self) -> String {
        format!("{:x}", self.hasher.clone().finalize())
    }
}

fn load_file(path: &Path) -> Result<Lexicon> {
    Lexicon::load(path).with_context(|| format!("加载词表失败: {}", path.display()))
}
