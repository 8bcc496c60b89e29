//! Fetch Query Handlers

use std::sync::Arc;

use crate::application::ports::PageFetcherPort;
use crate::application::queries::{FetchPage, Notice};

/// 抓取结果
///
/// 失败时 `text` 为空并带有提示，下游把空文本当作“无内容”处理
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub text: String,
    pub notice: Option<Notice>,
}

/// FetchPage Handler
pub struct FetchPageHandler {
    fetcher: Arc<dyn PageFetcherPort>,
}

impl FetchPageHandler {
    pub fn new(fetcher: Arc<dyn PageFetcherPort>) -> Self {
        Self { fetcher }
    }

    pub async fn handle(&self, query: FetchPage) -> FetchedPage {
        match self.fetcher.fetch_text(&query.url).await {
            Ok(text) => {
                tracing::debug!(
                    url = %query.url,
                    text_chars = text.chars().count(),
                    "Page text extracted"
                );
                FetchedPage { text, notice: None }
            }
            Err(e) => {
                tracing::warn!(url = %query.url, error = %e, "Failed to fetch page");
                FetchedPage {
                    text: String::new(),
                    notice: Some(Notice::error(format!("获取内容失败: {}", e))),
                }
            }
        }
    }
}
