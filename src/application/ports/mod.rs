//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod chart_backend;
mod page_fetcher;
mod word_segmenter;

#[cfg(test)]
pub(crate) mod fakes;

pub use chart_backend::{ChartBackendPort, ChartBackends, RenderError, RenderedChart};
pub use page_fetcher::{FetchError, PageFetcherPort};
pub use word_segmenter::WordSegmenterPort;
