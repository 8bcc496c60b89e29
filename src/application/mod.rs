//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（PageFetcher、WordSegmenter、ChartBackend）
//! - queries: 流水线各阶段的查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use error::ApplicationError;

pub use ports::{
    ChartBackendPort, ChartBackends, FetchError, PageFetcherPort, RenderError, RenderedChart,
    WordSegmenterPort,
};

pub use queries::{
    // Queries
    AnalysisReport,
    AnalyzeUrl,
    BuildCharts,
    CountWords,
    FetchPage,
    Notice,
    DEFAULT_MIN_FREQ,
    MIN_FREQ_RANGE,
    // Handlers
    handlers::{
        build_charts, AnalyzeUrlHandler, BuildChartsHandler, CountWordsHandler, FetchPageHandler,
        FetchedPage,
    },
};
