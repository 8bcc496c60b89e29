//! Chart Query Handlers
//!
//! Top N 选取与排序在这里统一完成，各后端只负责把序列变成自己的图表对象

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ChartBackendPort, ChartBackends, RenderedChart};
use crate::application::queries::BuildCharts;
use crate::domain::{ChartError, ChartLibrary, ChartObject, ChartSet, FrequencyMap, TOP_N};

/// 用一个后端构建它支持的全部图表
///
/// 词频为空时返回 [`ChartError::NoFrequencyData`]，不构建任何图表
pub fn build_charts(
    frequencies: &FrequencyMap,
    backend: &dyn ChartBackendPort,
) -> Result<ChartSet, ChartError> {
    if frequencies.is_empty() {
        return Err(ChartError::NoFrequencyData);
    }

    let (words, counts): (Vec<String>, Vec<u32>) = frequencies
        .top(TOP_N)
        .into_iter()
        .map(|entry| (entry.word, entry.count))
        .unzip();

    let mut charts = ChartSet::new();
    for &kind in backend.chart_kinds() {
        charts.insert(backend.build(kind, &words, &counts)?);
    }
    Ok(charts)
}

/// BuildCharts Handler
#[derive(Clone)]
pub struct BuildChartsHandler {
    backends: ChartBackends,
}

impl BuildChartsHandler {
    pub fn new(backends: ChartBackends) -> Self {
        Self { backends }
    }

    pub fn handle(&self, query: BuildCharts<'_>) -> Result<ChartSet, ApplicationError> {
        let backend = self.backend(query.library)?;
        let charts = build_charts(query.frequencies, backend.as_ref())?;

        tracing::debug!(
            library = %query.library,
            charts = charts.len(),
            "Charts built"
        );

        Ok(charts)
    }

    /// 渲染单个图表对象
    pub fn render(&self, chart: &ChartObject) -> Result<RenderedChart, ApplicationError> {
        let backend = self.backend(chart.library)?;
        Ok(backend.render(chart)?)
    }

    fn backend(
        &self,
        library: ChartLibrary,
    ) -> Result<Arc<dyn ChartBackendPort>, ApplicationError> {
        self.backends.get(library).ok_or_else(|| {
            ApplicationError::validation(format!("Chart library not available: {}", library))
        })
    }
}
