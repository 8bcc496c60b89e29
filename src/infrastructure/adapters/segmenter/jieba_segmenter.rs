//! Jieba Segmenter
//!
//! 实现 WordSegmenterPort trait，精确模式分词

use jieba_rs::Jieba;

use crate::application::ports::WordSegmenterPort;

/// jieba 分词器
///
/// 词典在构造时加载，构造开销较大，全局只创建一次
pub struct JiebaSegmenter {
    jieba: Jieba,
    /// 是否启用 HMM 识别未登录词
    hmm: bool,
}

impl JiebaSegmenter {
    pub fn new(hmm: bool) -> Self {
        let jieba = Jieba::new();
        tracing::info!(hmm, "Jieba dictionary loaded");
        Self { jieba, hmm }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl WordSegmenterPort for JiebaSegmenter {
    fn cut<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.jieba.cut(text, self.hmm)
    }
}
