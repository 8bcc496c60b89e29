//! 分析报告
//!
//! 一次交互的全部输出：页面提示、Top 20 词频表、选中的图表及其渲染结果

use serde::Serialize;

use crate::application::ports::RenderedChart;
use crate::domain::{ChartKind, ChartLibrary, ChartObject, WordCount};

/// 页面内提示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    /// 附加的调试信息（如图表对象的 Debug 输出）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub url: String,
    pub min_freq: u32,
    pub library: ChartLibrary,
    pub chart_kind: ChartKind,
    /// 抓取失败、无词频数据等导致流水线中止的提示
    pub notices: Vec<Notice>,
    /// 词频表（降序，最多 20 行）
    pub table: Vec<WordCount>,
    /// 选中的图表对象
    pub chart: Option<ChartObject>,
    pub rendered: Option<RenderedChart>,
    /// 渲染失败时的提示，附带图表对象的调试输出
    pub render_error: Option<Notice>,
}

impl AnalysisReport {
    pub fn new(
        url: impl Into<String>,
        min_freq: u32,
        library: ChartLibrary,
        chart_kind: ChartKind,
    ) -> Self {
        Self {
            url: url.into(),
            min_freq,
            library,
            chart_kind,
            notices: Vec::new(),
            table: Vec::new(),
            chart: None,
            rendered: None,
            render_error: None,
        }
    }

    /// 流水线是否在中途停止
    pub fn halted(&self) -> bool {
        !self.notices.is_empty()
    }
}
