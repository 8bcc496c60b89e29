//! Plotters Backend
//!
//! 服务端绘制柱状图、折线图、散点图，输出内联 SVG。
//! 字体族只写入 SVG 的 font-family 属性，由浏览器选择字形，不依赖服务器字体。
//! plotters 的标签只支持 90° 的整数倍旋转，x 轴标签在绘制完成后以旋转的
//! `<text>` 元素追加到 SVG 中：逆时针倾斜，文字末端对齐刻度

use anyhow::{anyhow, Context};
use html_escape::{encode_double_quoted_attribute, encode_text};
use plotters::prelude::*;

use super::{chart_object, ensure_owned, ensure_supported, CHART_CONTAINER_ID};
use crate::application::ports::{ChartBackendPort, RenderError, RenderedChart};
use crate::domain::chart::{FigureSpec, LABEL_ROTATION_DEGREES};
use crate::domain::{ChartError, ChartKind, ChartLibrary, ChartObject, ChartSpec};

const SERIES_COLOR: RGBColor = RGBColor(84, 112, 198);
const CAPTION_FONT_SIZE: u32 = 28;
const LABEL_FONT_SIZE: u32 = 14;
const X_LABEL_AREA: u32 = 90;
const Y_LABEL_AREA: u32 = 60;

/// 默认图片尺寸（宽, 高）
pub const DEFAULT_FIGURE_SIZE: (u32, u32) = (1200, 600);
pub const DEFAULT_FONT_FAMILY: &str = "SimHei, Microsoft YaHei, sans-serif";

#[derive(Debug, Clone)]
pub struct PlottersConfig {
    pub width: u32,
    pub height: u32,
    /// 写入 SVG 的字体族，需包含中文字体
    pub font_family: String,
}

impl Default for PlottersConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIGURE_SIZE.0,
            height: DEFAULT_FIGURE_SIZE.1,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

pub struct PlottersBackend {
    config: PlottersConfig,
}

impl PlottersBackend {
    pub fn new(config: PlottersConfig) -> Self {
        Self { config }
    }
}

impl Default for PlottersBackend {
    fn default() -> Self {
        Self::new(PlottersConfig::default())
    }
}

/// 绘制图表，返回完整的 SVG 文档
fn draw_svg(chart: &ChartObject, figure: &FigureSpec) -> anyhow::Result<String> {
    let font = figure.font_family.as_str();
    let slots = chart.series_len().max(1) as f64;
    let max = chart.frequencies.iter().copied().max().unwrap_or(0) as f64;
    let points: Vec<(f64, f64)> = chart
        .frequencies
        .iter()
        .enumerate()
        .map(|(i, &count)| (i as f64 + 0.5, count as f64))
        .collect();

    let mut svg = String::new();
    let anchors: Vec<(i32, i32)> = {
        let root = SVGBackend::with_string(&mut svg, (figure.width, figure.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, (font, CAPTION_FONT_SIZE).into_font())
            .margin(20)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(0f64..slots, 0f64..max * 1.2 + 1.0)?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|_: &f64| String::new())
            .y_label_formatter(&|v: &f64| format!("{:.0}", v))
            .y_desc("频次")
            .label_style((font, LABEL_FONT_SIZE).into_font())
            .draw()?;

        match chart.kind {
            ChartKind::Bar => {
                ctx.draw_series(points.iter().map(|&(x, y)| {
                    Rectangle::new([(x - 0.35, 0.0), (x + 0.35, y)], SERIES_COLOR.filled())
                }))?;
            }
            ChartKind::Line => {
                ctx.draw_series(LineSeries::new(
                    points.iter().copied(),
                    SERIES_COLOR.stroke_width(2),
                ))?;
                ctx.draw_series(
                    points
                        .iter()
                        .map(|&point| Circle::new(point, 5, SERIES_COLOR.filled())),
                )?;
            }
            ChartKind::Scatter => {
                ctx.draw_series(
                    points
                        .iter()
                        .map(|&point| Circle::new(point, 6, SERIES_COLOR.filled())),
                )?;
            }
            other => return Err(anyhow!("plotters cannot draw {}", other)),
        }

        let plotting_area = ctx.plotting_area();
        let anchors: Vec<(i32, i32)> = points
            .iter()
            .map(|&(x, _)| plotting_area.map_coordinate(&(x, 0.0)))
            .collect();

        root.present().context("failed to finish svg document")?;
        anchors
    };

    let labels: String = chart
        .words
        .iter()
        .zip(&anchors)
        .map(|(word, &(x, y))| {
            let y = y + 12;
            format!(
                r#"<text x="{x}" y="{y}" transform="rotate({angle} {x} {y})" font-family="{family}" font-size="{size}" text-anchor="end">{word}</text>"#,
                angle = -chart.label_rotation,
                family = encode_double_quoted_attribute(font),
                size = LABEL_FONT_SIZE,
                word = encode_text(word),
            )
        })
        .collect();

    let end = svg
        .rfind("</svg>")
        .ok_or_else(|| anyhow!("svg document is not closed"))?;
    svg.insert_str(end, &labels);

    Ok(svg)
}

impl ChartBackendPort for PlottersBackend {
    fn library(&self) -> ChartLibrary {
        ChartLibrary::Plotters
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
            ChartSpec::Figure(FigureSpec {
                width: self.config.width,
                height: self.config.height,
                font_family: self.config.font_family.clone(),
            }),
        ))
    }

    fn render(&self, chart: &ChartObject) -> Result<RenderedChart, RenderError> {
        ensure_owned(self.library(), chart)?;
        let ChartSpec::Figure(figure) = &chart.spec else {
            return Err(RenderError::SerializeError(
                "chart spec is not a plotters figure".to_string(),
            ));
        };

        let svg =
            draw_svg(chart, figure).map_err(|e| RenderError::DrawError(format!("{:#}", e)))?;

        tracing::debug!(kind = %chart.kind, bytes = svg.len(), "Figure drawn");

        Ok(RenderedChart {
            library: chart.library,
            kind: chart.kind,
            html: format!(r#"<div id="{}" class="figure">{}</div>"#, CHART_CONTAINER_ID, svg),
        })
    }
}
