//! 停用词表
//!
//! 文件格式：UTF-8 文本，每行一个停用词，首尾空白会被去除，空行忽略

use std::collections::HashSet;

/// 停用词集合
///
/// 进程启动时加载一次，之后只读共享
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// 从文件内容解析停用词表
    pub fn parse(content: &str) -> Self {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        Self::from_words(content.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    /// 由词语列表构造
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
