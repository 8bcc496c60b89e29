//! Analysis Queries
//!
//! 流水线各阶段的查询：抓取 → 分词统计 → 构建图表，以及串起全部阶段的 AnalyzeUrl

use std::ops::RangeInclusive;

use crate::domain::{ChartKind, ChartLibrary, FrequencyMap};

/// 最小词频允许范围
pub const MIN_FREQ_RANGE: RangeInclusive<u32> = 1..=10;

/// 最小词频默认值
pub const DEFAULT_MIN_FREQ: u32 = 2;

/// 抓取网页可见文本
#[derive(Debug, Clone)]
pub struct FetchPage {
    pub url: String,
}

/// 分词并统计词频
#[derive(Debug, Clone)]
pub struct CountWords {
    pub text: String,
    pub min_freq: u32,
}

/// 用指定可视化库构建图表集合
#[derive(Debug, Clone, Copy)]
pub struct BuildCharts<'a> {
    pub frequencies: &'a FrequencyMap,
    pub library: ChartLibrary,
}

/// 完整分析一个 URL
#[derive(Debug, Clone)]
pub struct AnalyzeUrl {
    pub url: String,
    pub min_freq: u32,
    pub library: ChartLibrary,
    /// 未指定或该库不支持时使用库的默认类型
    pub chart_kind: Option<ChartKind>,
}
