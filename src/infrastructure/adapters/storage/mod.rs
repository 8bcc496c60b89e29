//! Storage Adapter - 停用词文件加载

mod stop_words_file;

pub use stop_words_file::{load_stop_words, StopWordsError, DEFAULT_STOP_WORDS_PATH};
