//! ECharts Backend
//!
//! 词云、柱状图、折线图，option JSON 交给浏览器端 ECharts 绘制

use serde_json::{json, Value};

use super::{
    chart_container, chart_object, ensure_owned, ensure_supported, script_json, CHART_CONTAINER_ID,
};
use crate::application::ports::{ChartBackendPort, RenderError, RenderedChart};
use crate::domain::chart::LABEL_ROTATION_DEGREES;
use crate::domain::{ChartError, ChartKind, ChartLibrary, ChartObject, ChartSpec};

/// 词云字号范围
pub const WORD_CLOUD_SIZE_RANGE: [u32; 2] = [20, 100];

/// 柱状图 / 折线图的系列名
const SERIES_NAME: &str = "词频";

pub const ECHARTS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";
pub const ECHARTS_WORDCLOUD_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/echarts-wordcloud@2/dist/echarts-wordcloud.min.js";

/// 浏览器端图表容器高度（像素）
pub const BROWSER_CHART_HEIGHT: u32 = 400;

#[derive(Debug, Clone)]
pub struct EchartsConfig {
    pub script_url: String,
    pub wordcloud_script_url: String,
    /// 容器高度（像素）
    pub height: u32,
}

impl Default for EchartsConfig {
    fn default() -> Self {
        Self {
            script_url: ECHARTS_SCRIPT_URL.to_string(),
            wordcloud_script_url: ECHARTS_WORDCLOUD_SCRIPT_URL.to_string(),
            height: BROWSER_CHART_HEIGHT,
        }
    }
}

pub struct EchartsBackend {
    config: EchartsConfig,
}

impl EchartsBackend {
    pub fn new(config: EchartsConfig) -> Self {
        Self { config }
    }

    fn word_cloud_option(words: &[String], frequencies: &[u32]) -> Value {
        let data: Vec<Value> = words
            .iter()
            .zip(frequencies)
            .map(|(word, count)| json!({ "name": word, "value": count }))
            .collect();

        json!({
            "title": { "text": ChartKind::WordCloud.title() },
            "tooltip": { "show": true },
            "series": [{
                "type": "wordCloud",
                "sizeRange": WORD_CLOUD_SIZE_RANGE,
                "data": data,
            }],
        })
    }

    fn axis_option(kind: ChartKind, words: &[String], frequencies: &[u32]) -> Value {
        let series_type = match kind {
            ChartKind::Line => "line",
            _ => "bar",
        };

        json!({
            "title": { "text": kind.title() },
            "tooltip": { "trigger": "axis" },
            "xAxis": {
                "type": "category",
                "data": words,
                "axisLabel": { "rotate": LABEL_ROTATION_DEGREES, "interval": 0 },
            },
            "yAxis": { "type": "value" },
            "series": [{
                "name": SERIES_NAME,
                "type": series_type,
                "data": frequencies,
                "label": { "show": true },
            }],
        })
    }
}

impl Default for EchartsBackend {
    fn default() -> Self {
        Self::new(EchartsConfig::default())
    }
}

impl ChartBackendPort for EchartsBackend {
    fn library(&self) -> ChartLibrary {
        ChartLibrary::Echarts
    }

    fn build(
        &self,
        kind: ChartKind,
        words: &[String],
        frequencies: &[u32],
    ) -> Result<ChartObject, ChartError> {
        ensure_supported(self.library(), kind)?;

        let (option, rotation) = match kind {
            ChartKind::WordCloud => (Self::word_cloud_option(words, frequencies), 0),
            _ => (
                Self::axis_option(kind, words, frequencies),
                LABEL_ROTATION_DEGREES,
            ),
        };

        Ok(chart_object(
            self.library(),
            kind,
            words,
            frequencies,
            rotation,
            ChartSpec::EchartsOption(option),
        ))
    }

    fn render(&self, chart: &ChartObject) -> Result<RenderedChart, RenderError> {
        ensure_owned(self.library(), chart)?;
        let ChartSpec::EchartsOption(option) = &chart.spec else {
            return Err(RenderError::SerializeError(
                "chart spec is not an ECharts option".to_string(),
            ));
        };

        let mut html = chart_container(self.config.height);
        html.push_str(&format!(r#"<script src="{}"></script>"#, self.config.script_url));
        if chart.kind == ChartKind::WordCloud {
            html.push_str(&format!(
                r#"<script src="{}"></script>"#,
                self.config.wordcloud_script_url
            ));
        }
        html.push_str(&format!(
            concat!(
                "<script>(function(){{",
                "var chart=echarts.init(document.getElementById(\"{}\"));",
                "chart.setOption({});",
                "window.addEventListener(\"resize\",function(){{chart.resize();}});",
                "}})();</script>"
            ),
            CHART_CONTAINER_ID,
            script_json(option)?
        ));

        Ok(RenderedChart {
            library: chart.library,
            kind: chart.kind,
            html,
        })
    }
}
