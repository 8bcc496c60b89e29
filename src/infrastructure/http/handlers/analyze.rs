//! Analyze HTTP Handlers
//!
//! JSON API：分析 URL、列出可视化库

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{AnalysisReport, AnalyzeUrl};
use crate::domain::{ChartKind, ChartLibrary};
use crate::infrastructure::http::dto::{AnalyzeRequest, ApiResponse, LibraryResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /api/analyze
///
/// 抓取失败、无词频数据、渲染失败都体现在报告中，errno 仍为 0
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<AnalysisReport>>, ApiError> {
    let library = match req.library.as_deref() {
        Some(name) => name.parse::<ChartLibrary>()?,
        None => state.default_library(),
    };
    if !state.libraries.contains(&library) {
        return Err(ApiError::BadRequest(format!(
            "Chart library not available: {}",
            library
        )));
    }

    let chart_kind = req
        .chart_kind
        .as_deref()
        .map(str::parse::<ChartKind>)
        .transpose()?;

    let report = state
        .analyze_handler
        .handle(AnalyzeUrl {
            url: req.url,
            min_freq: req.min_freq.unwrap_or(state.default_min_freq),
            library,
            chart_kind,
        })
        .await?;

    Ok(Json(ApiResponse::success(report)))
}

/// GET /api/libraries
pub async fn list_libraries(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<LibraryResponse>>> {
    Json(ApiResponse::success(
        state
            .libraries
            .iter()
            .copied()
            .map(LibraryResponse::from)
            .collect(),
    ))
}
