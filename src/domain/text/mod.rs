//! Text Context - 文本词频
//!
//! 停用词表与词频统计，不依赖具体的分词实现

mod frequency;
mod stop_words;

pub use frequency::{is_countable, FrequencyMap, WordCount, TOP_N};
pub use stop_words::StopWordSet;
