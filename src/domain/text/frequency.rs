//! 词频统计
//!
//! 过滤规则：停用词、单字符词、纯空白词不计入；统计后按最小词频过滤

use std::collections::HashMap;

use serde::Serialize;

use super::stop_words::StopWordSet;

/// 词频表与图表展示的条目上限
pub const TOP_N: usize = 20;

/// 单个词语及其出现次数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Tally {
    count: u32,
    /// 首次出现的位置，用于同频排序
    first_seen: usize,
}

/// 判断一个分词结果是否计入词频
#[inline]
pub fn is_countable(token: &str, stop_words: &StopWordSet) -> bool {
    if token.trim().is_empty() {
        return false;
    }
    token.chars().count() > 1 && !stop_words.contains(token)
}

/// 词频映射
///
/// 迭代顺序无意义，展示前一律通过 [`FrequencyMap::top`] 排序
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    tallies: HashMap<String, Tally>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 统计分词序列中可计入的词语
    pub fn count_tokens<I, S>(tokens: I, stop_words: &StopWordSet) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for (position, token) in tokens.into_iter().enumerate() {
            let token = token.as_ref();
            if !is_countable(token, stop_words) {
                continue;
            }
            map.tallies
                .entry(token.to_string())
                .and_modify(|tally| tally.count += 1)
                .or_insert(Tally {
                    count: 1,
                    first_seen: position,
                });
        }
        map
    }

    /// 由 (词语, 次数) 构造，先出现的词在同频时排在前面
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut map = Self::new();
        for (word, count) in counts {
            map.insert(word, count);
        }
        map
    }

    /// 设置词语次数；次数为 0 时忽略
    pub fn insert(&mut self, word: impl Into<String>, count: u32) {
        if count == 0 {
            return;
        }
        let first_seen = self.tallies.len();
        self.tallies
            .entry(word.into())
            .and_modify(|tally| tally.count = count)
            .or_insert(Tally { count, first_seen });
    }

    /// 移除次数低于 `min_freq` 的词语
    pub fn retain_min_frequency(&mut self, min_freq: u32) {
        self.tallies.retain(|_, tally| tally.count >= min_freq);
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.tallies.get(word).map(|tally| tally.count)
    }

    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.tallies
            .iter()
            .map(|(word, tally)| (word.as_str(), tally.count))
    }

    /// 取出现次数最多的前 `n` 个词
    ///
    /// 按次数降序；次数相同时按首次出现顺序
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        let mut entries: Vec<(&String, &Tally)> = self.tallies.iter().collect();
        entries.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        entries
            .into_iter()
            .take(n)
            .map(|(word, tally)| WordCount::new(word.clone(), tally.count))
            .collect()
    }
}
