//! HTTP Routes
//!
//! Endpoints:
//! - /                GET   分析页面（表单参数：url、min_freq、library、chart_kind）
//! - /api/ping        GET   健康检查
//! - /api/analyze     POST  分析 URL，返回词频表和图表
//! - /api/libraries   GET   可视化库及其图表类型

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/analyze", post(handlers::analyze))
        .route("/libraries", get(handlers::list_libraries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::state::testing::{state_with_text, state_with_timeout};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn get_page(state: AppState, uri: &str) -> String {
        let response = create_routes()
            .with_state(Arc::new(state))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_string(response).await
    }

    async fn post_analyze(state: AppState, body: Value) -> Value {
        let response = create_routes()
            .with_state(Arc::new(state))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let response = create_routes()
            .with_state(Arc::new(state_with_text("")))
            .oneshot(Request::builder().uri("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["errno"], 0);
        assert_eq!(json["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn test_libraries() {
        let response = create_routes()
            .with_state(Arc::new(state_with_text("")))
            .oneshot(Request::builder().uri("/api/libraries").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        let names: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["echarts", "plotly", "plotters"]);
    }

    #[tokio::test]
    async fn test_analyze_json() {
        let json = post_analyze(
            state_with_text("苹果 苹果 苹果 的 的 香蕉 香蕉 梨"),
            json!({ "url": "http://example.com", "library": "plotly", "chart_kind": "scatter" }),
        )
        .await;

        assert_eq!(json["errno"], 0);
        assert_eq!(
            json["data"]["table"],
            json!([{ "word": "苹果", "count": 3 }, { "word": "香蕉", "count": 2 }])
        );
        assert_eq!(json["data"]["chart"]["kind"], "scatter");
        assert_eq!(json["data"]["chart"]["label_rotation"], 45);
        assert_eq!(json["data"]["rendered"]["html"], "<div>苹果,香蕉</div>");
    }

    #[tokio::test]
    async fn test_analyze_rejects_bad_input() {
        let out_of_range = post_analyze(
            state_with_text(""),
            json!({ "url": "http://example.com", "min_freq": 11 }),
        )
        .await;
        assert_eq!(out_of_range["errno"], 400);

        let unknown_library = post_analyze(
            state_with_text(""),
            json!({ "url": "http://example.com", "library": "gnuplot" }),
        )
        .await;
        assert_eq!(unknown_library["errno"], 400);
        assert!(unknown_library["data"].is_null());
    }

    #[tokio::test]
    async fn test_analyze_fetch_failure_is_a_notice() {
        let json = post_analyze(state_with_timeout(), json!({ "url": "http://example.com" })).await;

        assert_eq!(json["errno"], 0);
        let message = json["data"]["notices"][0]["message"].as_str().unwrap();
        assert!(message.starts_with("获取内容失败: "));
        assert_eq!(json["data"]["table"], json!([]));
        assert!(json["data"]["chart"].is_null());
    }

    #[tokio::test]
    async fn test_index_without_url_shows_form() {
        let html = get_page(state_with_text("苹果 苹果"), "/").await;

        assert!(html.contains("文本分析可视化工具"));
        assert!(html.contains("value=\"2\""));
        assert!(!html.contains("词频统计 (Top 20)"));
    }

    #[tokio::test]
    async fn test_index_runs_pipeline() {
        let html = get_page(
            state_with_text("苹果 苹果 香蕉 香蕉 香蕉"),
            "/?url=http%3A%2F%2Fexample.com&min_freq=2&library=echarts&chart_kind=bar",
        )
        .await;

        assert!(html.contains("词频统计 (Top 20)"));
        assert!(html.find("<td>香蕉</td>").unwrap() < html.find("<td>苹果</td>").unwrap());
        assert!(html.contains("可视化图表 - 柱状图"));
        assert!(html.contains("<div>香蕉,苹果</div>"));
    }

    #[tokio::test]
    async fn test_index_is_lenient() {
        let html = get_page(
            state_with_text("苹果 苹果"),
            "/?url=http%3A%2F%2Fexample.com&min_freq=99&library=unknown&chart_kind=scatter",
        )
        .await;

        // 越界截断为 10，未知库回退到 ECharts，散点图回退到词云
        assert!(html.contains("value=\"10\""));
        assert!(html.contains("<option value=\"echarts\" selected>"));
        assert!(html.contains("<option value=\"wordcloud\" selected>"));
        assert!(html.contains("没有找到任何词频数据"));
    }
}
