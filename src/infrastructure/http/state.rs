//! Application State
//!
//! 进程级只读资源：流水线处理器和已注册的可视化库

use std::sync::Arc;

use crate::application::{
    AnalyzeUrlHandler, ChartBackends, PageFetcherPort, WordSegmenterPort, DEFAULT_MIN_FREQ,
};
use crate::domain::{ChartLibrary, StopWordSet};

/// 应用状态
pub struct AppState {
    pub analyze_handler: AnalyzeUrlHandler,
    /// 页面和 API 可选的可视化库（注册顺序）
    pub libraries: Vec<ChartLibrary>,
    /// 页面首次打开时滑块的初始值
    pub default_min_freq: u32,
}

impl AppState {
    pub fn new(
        fetcher: Arc<dyn PageFetcherPort>,
        segmenter: Arc<dyn WordSegmenterPort>,
        stop_words: Arc<StopWordSet>,
        backends: ChartBackends,
    ) -> Self {
        Self {
            libraries: backends.libraries(),
            analyze_handler: AnalyzeUrlHandler::new(fetcher, segmenter, stop_words, backends),
            default_min_freq: DEFAULT_MIN_FREQ,
        }
    }

    pub fn with_default_min_freq(mut self, min_freq: u32) -> Self {
        self.default_min_freq = min_freq;
        self
    }

    /// 默认可视化库：第一个注册的库
    pub fn default_library(&self) -> ChartLibrary {
        self.libraries.first().copied().unwrap_or_default()
    }
}
