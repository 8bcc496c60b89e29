//! Page Fetcher Port - 网页抓取抽象
//!
//! 定义抓取网页并提取可见文本的接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 抓取错误
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("无效的 URL: {0}")]
    InvalidUrl(String),

    #[error("请求超时: {0}")]
    Timeout(String),

    #[error("网络错误: {0}")]
    NetworkError(String),

    #[error("读取响应失败: {0}")]
    BodyError(String),
}

/// Page Fetcher Port
///
/// 给定 URL，返回页面去除 script/style/iframe 后的可见文本
#[async_trait]
pub trait PageFetcherPort: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}
