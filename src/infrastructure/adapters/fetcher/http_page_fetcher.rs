//! HTTP Page Fetcher - 抓取网页并提取可见文本
//!
//! 实现 PageFetcherPort trait：
//! - 固定的浏览器 User-Agent
//! - 忽略服务器声明的编码，一律按 UTF-8 解码（非法字节替换为 U+FFFD）
//! - 非 2xx 状态只记录告警，响应体照常处理

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

use super::html_text::extract_visible_text;
use crate::application::ports::{FetchError, PageFetcherPort};

/// 默认 User-Agent
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// HTTP 抓取器配置
#[derive(Debug, Clone)]
pub struct HttpPageFetcherConfig {
    /// 请求头 User-Agent
    pub user_agent: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpPageFetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpPageFetcherConfig {
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 抓取器
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(config: HttpPageFetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn with_default_config() -> Result<Self, FetchError> {
        Self::new(HttpPageFetcherConfig::default())
    }
}

fn classify_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(e.to_string())
    } else if e.is_builder() {
        FetchError::InvalidUrl(e.to_string())
    } else if e.is_connect() {
        FetchError::NetworkError(format!("无法连接: {}", e))
    } else if e.is_body() || e.is_decode() {
        FetchError::BodyError(e.to_string())
    } else {
        FetchError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl PageFetcherPort for HttpPageFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let start = Instant::now();

        tracing::debug!(url = %url, "Fetching page");

        let response = self.client.get(url).send().await.map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                "Non-success status, using body anyway"
            );
        }

        let body = response.bytes().await.map_err(classify_error)?;
        let html = String::from_utf8_lossy(&body);
        let text = extract_visible_text(&html);

        tracing::info!(
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            text_chars = text.chars().count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Page fetched"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::Html, routing::get, Router};
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_config_default() {
        let config = HttpPageFetcherConfig::default();
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.with_timeout(5).timeout_secs, 5);
    }

    #[tokio::test]
    async fn test_fetch_strips_script() {
        let base = serve(Router::new().route(
            "/page",
            get(|| async { Html("<html><script>x=1</script><body>你好 世界</body></html>") }),
        ))
        .await;

        let fetcher = HttpPageFetcher::with_default_config().unwrap();
        let text = fetcher.fetch_text(&format!("{}/page", base)).await.unwrap();

        assert!(!text.contains("x=1"));
        assert!(text.contains("你好 世界"));
    }

    #[tokio::test]
    async fn test_fetch_sends_browser_user_agent() {
        let base = serve(Router::new().route(
            "/ua",
            get(|headers: axum::http::HeaderMap| async move {
                let ua = headers
                    .get(axum::http::header::USER_AGENT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Html(format!("<body>{}</body>", ua))
            }),
        ))
        .await;

        let fetcher = HttpPageFetcher::with_default_config().unwrap();
        let text = fetcher.fetch_text(&format!("{}/ua", base)).await.unwrap();
        assert_eq!(text, DEFAULT_USER_AGENT);
    }

    #[tokio::test]
    async fn test_fetch_decodes_utf8_regardless_of_declared_charset() {
        let base = serve(Router::new().route(
            "/gbk",
            get(|| async {
                (
                    [(axum::http::header::CONTENT_TYPE, "text/html; charset=gbk")],
                    "<body>中文内容</body>",
                )
            }),
        ))
        .await;

        let fetcher = HttpPageFetcher::with_default_config().unwrap();
        let text = fetcher.fetch_text(&format!("{}/gbk", base)).await.unwrap();
        assert_eq!(text, "中文内容");
    }

    #[tokio::test]
    async fn test_non_success_status_still_returns_body_text() {
        let base = serve(Router::new().route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, Html("<body>页面不存在</body>")) }),
        ))
        .await;

        let fetcher = HttpPageFetcher::with_default_config().unwrap();
        let text = fetcher.fetch_text(&format!("{}/missing", base)).await.unwrap();
        assert_eq!(text, "页面不存在");
    }

    #[tokio::test]
    async fn test_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // 接受连接但从不响应
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let fetcher =
            HttpPageFetcher::new(HttpPageFetcherConfig::default().with_timeout(1)).unwrap();
        let result = fetcher.fetch_text(&format!("http://{}/", addr)).await;

        assert!(matches!(result, Err(FetchError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let fetcher = HttpPageFetcher::with_default_config().unwrap();
        let result = fetcher.fetch_text("not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = HttpPageFetcher::with_default_config().unwrap();
        let result = fetcher.fetch_text(&format!("http://{}/", addr)).await;
        assert!(matches!(result, Err(FetchError::NetworkError(_))));
    }
}
