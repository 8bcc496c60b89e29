//! Chart Adapters - 三种可视化库的图表后端
//!
//! - ECharts / Plotly：构建 JSON 描述，渲染为容器 + 内联脚本，由浏览器绘制
//! - Plotters：服务端绘制为内联 SVG

mod echarts;
mod plotly;
mod plotters_svg;

pub use echarts::{
    EchartsBackend, EchartsConfig, BROWSER_CHART_HEIGHT, ECHARTS_SCRIPT_URL,
    ECHARTS_WORDCLOUD_SCRIPT_URL,
};
pub use plotly::{PlotlyBackend, PlotlyConfig, PLOTLY_SCRIPT_URL};
pub use plotters_svg::{PlottersBackend, PlottersConfig, DEFAULT_FIGURE_SIZE, DEFAULT_FONT_FAMILY};

use serde::Serialize;

use crate::application::ports::RenderError;
use crate::domain::{ChartError, ChartKind, ChartLibrary, ChartObject, ChartSpec};

/// 页面中图表容器的 id
pub const CHART_CONTAINER_ID: &str = "cipin-chart";

/// 序列化为可安全嵌入 `<script>` 的 JSON
pub(crate) fn script_json<T: Serialize>(value: &T) -> Result<String, RenderError> {
    serde_json::to_string(value)
        .map(|json| json.replace("</", "<\\/"))
        .map_err(|e| RenderError::SerializeError(e.to_string()))
}

/// 图表容器
pub(crate) fn chart_container(height: u32) -> String {
    format!(
        r#"<div id="{}" style="width:100%;height:{}px"></div>"#,
        CHART_CONTAINER_ID, height
    )
}

pub(crate) fn ensure_supported(library: ChartLibrary, kind: ChartKind) -> Result<(), ChartError> {
    if library.supports(kind) {
        Ok(())
    } else {
        Err(ChartError::UnsupportedKind { library, kind })
    }
}

pub(crate) fn ensure_owned(library: ChartLibrary, chart: &ChartObject) -> Result<(), RenderError> {
    if chart.library == library {
        Ok(())
    } else {
        Err(RenderError::SpecMismatch {
            expected: library,
            actual: chart.library,
        })
    }
}

pub(crate) fn chart_object(
    library: ChartLibrary,
    kind: ChartKind,
    words: &[String],
    frequencies: &[u32],
    label_rotation: i32,
    spec: ChartSpec,
) -> ChartObject {
    ChartObject {
        library,
        kind,
        title: kind.title().to_string(),
        words: words.to_vec(),
        frequencies: frequencies.to_vec(),
        label_rotation,
        spec,
    }
}

#[cfg(test)]
pub(crate) fn sample_series() -> (Vec<String>, Vec<u32>) {
    (vec!["苹果".to_string(), "香蕉".to_string()], vec![5, 3])
}
