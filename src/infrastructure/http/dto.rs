//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::{ChartKind, ChartLibrary};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// 错误响应
    pub fn error(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

// ============================================================================
// Analyze DTOs
// ============================================================================

/// `POST /api/analyze` 请求体
///
/// 可视化库和图表类型接受英文标识或中文名称，缺省时使用默认值
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
    #[serde(default)]
    pub min_freq: Option<u32>,
    #[serde(default)]
    pub library: Option<String>,
    #[serde(default)]
    pub chart_kind: Option<String>,
}

// ============================================================================
// Library DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ChartKindResponse {
    pub name: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LibraryResponse {
    pub name: &'static str,
    pub display_name: &'static str,
    pub chart_kinds: Vec<ChartKindResponse>,
}

impl From<ChartLibrary> for LibraryResponse {
    fn from(library: ChartLibrary) -> Self {
        Self {
            name: library.as_str(),
            display_name: library.display_name(),
            chart_kinds: library
                .chart_kinds()
                .iter()
                .map(|kind: &ChartKind| ChartKindResponse {
                    name: kind.as_str(),
                    label: kind.label(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let ok = serde_json::to_value(ApiResponse::success(1)).unwrap();
        assert_eq!(ok, serde_json::json!({ "errno": 0, "error": "", "data": 1 }));

        let err = serde_json::to_value(ApiResponse::error(400, "bad")).unwrap();
        assert_eq!(err, serde_json::json!({ "errno": 400, "error": "bad", "data": null }));
    }

    #[test]
    fn test_analyze_request_defaults() {
        let req: AnalyzeRequest = serde_json::from_str(r#"{"url":"http://a"}"#).unwrap();
        assert_eq!(req.url, "http://a");
        assert!(req.min_freq.is_none());
        assert!(req.library.is_none());
        assert!(req.chart_kind.is_none());
    }

    #[test]
    fn test_library_response() {
        let response = LibraryResponse::from(ChartLibrary::Echarts);
        assert_eq!(response.name, "echarts");
        assert_eq!(response.chart_kinds[0].name, "wordcloud");
        assert_eq!(response.chart_kinds[0].label, "词云图");
    }
}
