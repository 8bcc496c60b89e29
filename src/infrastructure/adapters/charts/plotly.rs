//! Plotly Backend
//!
//! 柱状图、折线图、散点图，figure JSON 交给浏览器端 Plotly 绘制

use serde_json::{json, Value};

use super::echarts::BROWSER_CHART_HEIGHT;
use super::{
    chart_container, chart_object, ensure_owned, ensure_supported, script_json, CHART_CONTAINER_ID,
};
use crate::application::ports::{ChartBackendPort, RenderError, RenderedChart};
use crate::domain::chart::LABEL_ROTATION_DEGREES;
use crate::domain::{ChartError, ChartKind, ChartLibrary, ChartObject, ChartSpec};

pub const PLOTLY_SCRIPT_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Debug, Clone)]
pub struct PlotlyConfig {
    pub script_url: String,
    pub height: u32,
}

impl Default for PlotlyConfig {
    fn default() -> Self {
        Self {
            script_url: PLOTLY_SCRIPT_URL.to_string(),
            height: BROWSER_CHART_HEIGHT,
        }
    }
}

pub struct PlotlyBackend {
    config: PlotlyConfig,
}

impl PlotlyBackend {
    pub fn new(config: PlotlyConfig) -> Self {
        Self { config }
    }

    fn figure(kind: ChartKind, words: &[String], frequencies: &[u32]) -> Value {
        let mut trace = match kind {
            ChartKind::Line => json!({ "type": "scatter", "mode": "lines" }),
            ChartKind::Scatter => json!({ "type": "scatter", "mode": "markers" }),
            _ => json!({ "type": "bar" }),
        };
        trace["x"] = json!(words);
        trace["y"] = json!(frequencies);
        trace["name"] = json!("频次");

        json!({
            "data": [trace],
            "layout": {
                "title": { "text": kind.title() },
                "xaxis": { "title": { "text": "词语" }, "tickangle": LABEL_ROTATION_DEGREES },
                "yaxis": { "title": { "text": "频次" } },
            },
        })
    }
}

impl Default for PlotlyBackend {
    fn default() -> Self {
        Self::new(PlotlyConfig::default())
    }
}

impl ChartBackendPort for PlotlyBackend {
    fn library(&self) -> ChartLibrary {
        ChartLibrary::Plotly
    }

    fn build(
        &self,
        kind: ChartKind,
        words: &[String],
        frequencies: &[u32],
    ) -> Result<ChartObject, ChartError> {
        ensure_supported(self.library(), kind)?;

        Ok(chart_object(
            self.library(),
            kind,
            words,
            frequencies,
            LABEL_ROTATION_DEGREES,
            ChartSpec::PlotlyFigure(Self::figure(kind, words, frequencies)),
        ))
    }

    fn render(&self, chart: &ChartObject) -> Result<RenderedChart, RenderError> {
        ensure_owned(self.library(), chart)?;
        let ChartSpec::PlotlyFigure(figure) = &chart.spec else {
            return Err(RenderError::SerializeError(
                "chart spec is not a Plotly figure".to_string(),
            ));
        };

        let mut html = chart_container(self.config.height);
        html.push_str(&format!(r#"<script src="{}"></script>"#, self.config.script_url));
        html.push_str(&format!(
            concat!(
                "<script>(function(){{",
                "var figure={};",
                "Plotly.newPlot(\"{}\",figure.data,figure.layout,{{\"responsive\":true}});",
                "}})();</script>"
            ),
            script_json(figure)?,
            CHART_CONTAINER_ID
        ));

        Ok(RenderedChart {
            library: chart.library,
            kind: chart.kind,
            html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::charts::sample_series;

    #[test]
    fn test_scatter_chart() {
        let (words, freqs) = sample_series();
        let chart = PlotlyBackend::default()
            .build(ChartKind::Scatter, &words, &freqs)
            .unwrap();

        assert_eq!(chart.words, vec!["苹果", "香蕉"]);
        assert_eq!(chart.frequencies, vec![5, 3]);
        assert_eq!(chart.label_rotation, 45);
        assert_eq!(chart.title, "词频散点图");

        let ChartSpec::PlotlyFigure(figure) = &chart.spec else {
            panic!("expected plotly figure");
        };
        assert_eq!(figure["data"][0]["mode"], "markers");
        assert_eq!(figure["data"][0]["x"], json!(["苹果", "香蕉"]));
        assert_eq!(figure["data"][0]["y"], json!([5, 3]));
        assert_eq!(figure["layout"]["xaxis"]["tickangle"], 45);
    }

    #[test]
    fn test_trace_types() {
        let (words, freqs) = sample_series();
        let backend = PlotlyBackend::default();

        let bar = backend.build(ChartKind::Bar, &words, &freqs).unwrap();
        let line = backend.build(ChartKind::Line, &words, &freqs).unwrap();
        let (ChartSpec::PlotlyFigure(bar), ChartSpec::PlotlyFigure(line)) = (&bar.spec, &line.spec)
        else {
            panic!("expected plotly figures");
        };

        assert_eq!(bar["data"][0]["type"], "bar");
        assert_eq!(line["data"][0]["type"], "scatter");
        assert_eq!(line["data"][0]["mode"], "lines");
        assert_eq!(line["layout"]["title"]["text"], "词频趋势图");
    }

    #[test]
    fn test_word_cloud_is_unsupported() {
        let (words, freqs) = sample_series();
        let result = PlotlyBackend::default().build(ChartKind::WordCloud, &words, &freqs);
        assert!(matches!(
            result,
            Err(ChartError::UnsupportedKind {
                library: ChartLibrary::Plotly,
                kind: ChartKind::WordCloud
            })
        ));
    }

    #[test]
    fn test_render_embeds_figure() {
        let (words, freqs) = sample_series();
        let backend = PlotlyBackend::default();
        let rendered = backend
            .render(&backend.build(ChartKind::Bar, &words, &freqs).unwrap())
            .unwrap();

        assert_eq!(rendered.kind, ChartKind::Bar);
        assert!(rendered.html.contains("Plotly.newPlot(\"cipin-chart\""));
        assert!(rendered.html.contains("plotly-2.35.2.min.js"));
        assert!(rendered.html.contains("\"tickangle\":45"));
    }
}
