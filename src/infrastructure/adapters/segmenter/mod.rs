//! Segmenter Adapter - jieba 中文分词

mod jieba_segmenter;

pub use jieba_segmenter::JiebaSegmenter;
