//! HTTP Middleware
//!
//! 请求日志中间件

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 请求日志中间件
///
/// 记录每个请求的耗时；状态码为 4xx 记 warn，5xx 记 error。
/// 业务错误（errno != 0）在 ApiError::into_response() 中记录
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(method = %method, uri = %uri, status, latency_ms, "HTTP server error");
    } else if response.status().is_client_error() {
        tracing::warn!(method = %method, uri = %uri, status, latency_ms, "HTTP client error");
    } else {
        tracing::debug!(method = %method, uri = %uri, status, latency_ms, "HTTP request");
    }

    response
}
