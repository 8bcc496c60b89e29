//! Chart Context - Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ChartError;

/// 图表类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    WordCloud,
    Bar,
    Line,
    Scatter,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::WordCloud => "wordcloud",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
        }
    }

    /// 界面上显示的名称
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::WordCloud => "词云图",
            ChartKind::Bar => "柱状图",
            ChartKind::Line => "折线图",
            ChartKind::Scatter => "散点图",
        }
    }

    /// 图表标题
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::WordCloud => "词云图",
            ChartKind::Bar => "词频柱状图",
            ChartKind::Line => "词频趋势图",
            ChartKind::Scatter => "词频散点图",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    /// 同时接受英文标识和中文名称
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wordcloud" | "word_cloud" | "词云图" => Ok(ChartKind::WordCloud),
            "bar" | "柱状图" => Ok(ChartKind::Bar),
            "line" | "折线图" => Ok(ChartKind::Line),
            "scatter" | "散点图" => Ok(ChartKind::Scatter),
            _ => Err(ChartError::UnknownKind(s.to_string())),
        }
    }
}

/// 可视化库（渲染后端）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartLibrary {
    /// 浏览器端 ECharts，支持词云
    #[default]
    Echarts,
    /// 浏览器端 Plotly
    Plotly,
    /// 服务端 plotters 绘制
    Plotters,
}

impl ChartLibrary {
    pub const ALL: [ChartLibrary; 3] = [
        ChartLibrary::Echarts,
        ChartLibrary::Plotly,
        ChartLibrary::Plotters,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartLibrary::Echarts => "echarts",
            ChartLibrary::Plotly => "plotly",
            ChartLibrary::Plotters => "plotters",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChartLibrary::Echarts => "ECharts",
            ChartLibrary::Plotly => "Plotly",
            ChartLibrary::Plotters => "Plotters",
        }
    }

    /// 该库支持的图表类型（固定顺序，第一个为默认）
    pub fn chart_kinds(&self) -> &'static [ChartKind] {
        match self {
            ChartLibrary::Echarts => &[ChartKind::WordCloud, ChartKind::Bar, ChartKind::Line],
            ChartLibrary::Plotly | ChartLibrary::Plotters => {
                &[ChartKind::Bar, ChartKind::Line, ChartKind::Scatter]
            }
        }
    }

    pub fn supports(&self, kind: ChartKind) -> bool {
        self.chart_kinds().contains(&kind)
    }

    /// 选择图表类型：不支持或未指定时回退到该库的第一个类型
    pub fn resolve_kind(&self, requested: Option<ChartKind>) -> ChartKind {
        match requested {
            Some(kind) if self.supports(kind) => kind,
            _ => self.chart_kinds()[0],
        }
    }
}

impl fmt::Display for ChartLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ChartLibrary {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "echarts" | "pyecharts" => Ok(ChartLibrary::Echarts),
            "plotly" => Ok(ChartLibrary::Plotly),
            "plotters" | "matplotlib" => Ok(ChartLibrary::Plotters),
            _ => Err(ChartError::UnknownLibrary(s.to_string())),
        }
    }
}
