//! Word Segmenter Port - 中文分词抽象
//!
//! 分词算法由外部词典分词库负责，这里只约定输入输出

/// Word Segmenter Port
pub trait WordSegmenterPort: Send + Sync {
    /// 将文本切分为有序的词语序列，切分结果拼接后等于原文
    fn cut<'a>(&self, text: &'a str) -> Vec<&'a str>;
}
