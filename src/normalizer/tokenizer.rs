//! 按空白切词，记录每个词在归一化文本中的字节区间

/// 可从词尾剥离的标点
const TRAILING_PUNCTUATION: &[char] = &[',', '.', '!', '?', ';', ':', ')', '»', '"', '…'];

/// 词
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    /// 起始字节索引
    pub start: usize,
    /// 结束字节索引（不含）
    pub end: usize,
}

impl Word {
    /// 词尾标点的切分点，从剥离最少到最多排列
    ///
    /// "руб.," 先切在 "руб." 之后，再切在 "руб" 之后；整词全是标点时不切
    pub fn trailing_splits(&self) -> Vec<usize> {
        if self.text.chars().all(|c| TRAILING_PUNCTUATION.contains(&c)) {
            return Vec::new();
        }

        let mut splits = Vec::new();
        for (idx, ch) in self.text.char_indices().rev() {
            if !TRAILING_PUNCTUATION.contains(&ch) {
                break;
            }
            if idx > 0 {
                splits.push(idx);
            }
        }
        splits
    }
}

/// 分词器
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn tokenize(text: &str) -> Vec<Word> {
        let mut words = Vec::new();
        let mut start: Option<usize> = None;

        for (idx, ch) in text.char_indices() {
            match (ch.is_whitespace(), start) {
                (true, Some(s)) => {
                    words.push(Word {
                        text: text[s..idx].to_string(),
                        start: s,
                        end: idx,
                    });
                    start = None;
                }
                (false, None) => start = Some(idx),
                _ => {}
            }
        }

        if let Some(s) = start {
            words.push(Word {
                text: text[s..].to_string(),
                start: s,
                end: text.len(),
            });
        }

        words
    }
}
