//! Page Handler
//!
//! GET / 渲染分析页面。查询参数全部宽松解析：无法识别的值使用默认值，
//! 最小词频截断到允许范围内

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{AnalysisReport, AnalyzeUrl, Notice, MIN_FREQ_RANGE};
use crate::domain::{ChartKind, ChartLibrary};
use crate::infrastructure::http::presenter::{render_error_page, render_page};
use crate::infrastructure::http::state::AppState;

/// 表单参数
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub url: Option<String>,
    pub min_freq: Option<String>,
    pub library: Option<String>,
    pub chart_kind: Option<String>,
}

impl PageParams {
    fn into_query(self, state: &AppState) -> AnalyzeUrl {
        let min_freq = self
            .min_freq
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(state.default_min_freq)
            .clamp(*MIN_FREQ_RANGE.start(), *MIN_FREQ_RANGE.end());

        let library = self
            .library
            .and_then(|v| v.parse::<ChartLibrary>().ok())
            .filter(|library| state.libraries.contains(library))
            .unwrap_or_else(|| state.default_library());

        AnalyzeUrl {
            url: self.url.unwrap_or_default().trim().to_string(),
            min_freq,
            library,
            chart_kind: self.chart_kind.and_then(|v| v.parse::<ChartKind>().ok()),
        }
    }
}

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let query = params.into_query(&state);
    let fallback = AnalysisReport::new(
        &query.url,
        query.min_freq,
        query.library,
        query.library.resolve_kind(query.chart_kind),
    );

    let report = match state.analyze_handler.handle(query).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "Analysis failed");
            let mut report = fallback;
            report.notices.push(Notice::error(e.to_string()));
            report
        }
    };

    Html(render_page(&report, &state.libraries).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to render page");
        render_error_page(&e.to_string())
    }))
}
