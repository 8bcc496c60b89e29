//! Count Query Handlers

use std::sync::Arc;
use std::time::Instant;

use crate::application::error::ApplicationError;
use crate::application::ports::WordSegmenterPort;
use crate::application::queries::CountWords;
use crate::domain::{FrequencyMap, StopWordSet};

/// CountWords Handler
///
/// 停用词表在构造时注入，整个进程生命周期内只加载一次
#[derive(Clone)]
pub struct CountWordsHandler {
    segmenter: Arc<dyn WordSegmenterPort>,
    stop_words: Arc<StopWordSet>,
}

impl CountWordsHandler {
    pub fn new(segmenter: Arc<dyn WordSegmenterPort>, stop_words: Arc<StopWordSet>) -> Self {
        Self {
            segmenter,
            stop_words,
        }
    }

    pub fn handle(&self, query: CountWords) -> Result<FrequencyMap, ApplicationError> {
        if query.min_freq == 0 {
            return Err(ApplicationError::validation("min_freq must be at least 1"));
        }

        let start = Instant::now();
        let tokens = self.segmenter.cut(&query.text);
        let token_count = tokens.len();

        let mut frequencies = FrequencyMap::count_tokens(tokens, &self.stop_words);
        let distinct = frequencies.len();
        frequencies.retain_min_frequency(query.min_freq);

        tracing::debug!(
            tokens = token_count,
            distinct,
            retained = frequencies.len(),
            min_freq = query.min_freq,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Word frequencies counted"
        );

        Ok(frequencies)
    }
}
