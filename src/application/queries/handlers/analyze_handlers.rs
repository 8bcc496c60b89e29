//! Analyze Query Handler
//!
//! 串起完整流水线：URL → 文本 → 词频 → 图表集合 → 渲染选中图表。
//! 抓取失败和无词频数据时在报告中写入提示并停止，后续阶段不再执行；
//! 渲染失败只影响图表本身，词频表照常返回。
//! 分词和渲染是 CPU 密集操作，放到阻塞线程池执行

use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;

use crate::application::error::ApplicationError;
use crate::application::ports::{ChartBackends, PageFetcherPort, WordSegmenterPort};
use crate::application::queries::{
    AnalysisReport, AnalyzeUrl, BuildCharts, CountWords, FetchPage, Notice, MIN_FREQ_RANGE,
};
use crate::domain::{ChartError, StopWordSet, TOP_N};

use super::{BuildChartsHandler, CountWordsHandler, FetchPageHandler};

/// AnalyzeUrl Handler
pub struct AnalyzeUrlHandler {
    fetch_handler: FetchPageHandler,
    count_handler: CountWordsHandler,
    chart_handler: BuildChartsHandler,
}

impl AnalyzeUrlHandler {
    pub fn new(
        fetcher: Arc<dyn PageFetcherPort>,
        segmenter: Arc<dyn WordSegmenterPort>,
        stop_words: Arc<StopWordSet>,
        backends: ChartBackends,
    ) -> Self {
        Self {
            fetch_handler: FetchPageHandler::new(fetcher),
            count_handler: CountWordsHandler::new(segmenter, stop_words),
            chart_handler: BuildChartsHandler::new(backends),
        }
    }

    pub async fn handle(&self, query: AnalyzeUrl) -> Result<AnalysisReport, ApplicationError> {
        if !MIN_FREQ_RANGE.contains(&query.min_freq) {
            return Err(ApplicationError::validation(format!(
                "min_freq must be between {} and {}",
                MIN_FREQ_RANGE.start(),
                MIN_FREQ_RANGE.end()
            )));
        }

        let chart_kind = query.library.resolve_kind(query.chart_kind);
        let mut report = AnalysisReport::new(&query.url, query.min_freq, query.library, chart_kind);

        if query.url.trim().is_empty() {
            return Ok(report);
        }

        let start = Instant::now();

        // 1. 抓取
        let page = self
            .fetch_handler
            .handle(FetchPage {
                url: query.url.clone(),
            })
            .await;
        if let Some(notice) = page.notice {
            report.notices.push(notice);
            return Ok(report);
        }
        if page.text.is_empty() {
            tracing::info!(url = %query.url, "Page has no visible text");
            return Ok(report);
        }

        // 2. 分词统计
        let count_handler = self.count_handler.clone();
        let count = CountWords {
            text: page.text,
            min_freq: query.min_freq,
        };
        let frequencies = tokio::task::spawn_blocking(move || count_handler.handle(count))
            .await
            .map_err(join_error)??;

        // 3. 构建图表
        let charts = match self.chart_handler.handle(BuildCharts {
            frequencies: &frequencies,
            library: query.library,
        }) {
            Ok(charts) => charts,
            Err(ApplicationError::Chart(e @ ChartError::NoFrequencyData)) => {
                tracing::info!(
                    url = %query.url,
                    min_freq = query.min_freq,
                    "No word survived filtering"
                );
                report.notices.push(Notice::error(e.to_string()));
                return Ok(report);
            }
            Err(e) => return Err(e),
        };

        report.table = frequencies.top(TOP_N);

        // 4. 渲染选中的图表，其余丢弃
        let chart = charts.take(chart_kind).ok_or_else(|| {
            ApplicationError::internal(format!("{} did not build {}", query.library, chart_kind))
        })?;

        let chart_handler = self.chart_handler.clone();
        let (chart, rendered) = tokio::task::spawn_blocking(move || {
            let rendered = chart_handler.render(&chart);
            (chart, rendered)
        })
        .await
        .map_err(join_error)?;

        match rendered {
            Ok(rendered) => report.rendered = Some(rendered),
            Err(e) => {
                tracing::error!(
                    library = %query.library,
                    kind = %chart_kind,
                    error = %e,
                    "Chart rendering failed"
                );
                let notice = Notice::error(format!("图表渲染失败: {}", e));
                report.render_error = Some(notice.with_detail(format!("{:#?}", chart)));
            }
        }
        report.chart = Some(chart);

        tracing::info!(
            url = %query.url,
            library = %query.library,
            kind = %chart_kind,
            words = frequencies.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Analysis completed"
        );

        Ok(report)
    }
}

fn join_error(e: JoinError) -> ApplicationError {
    ApplicationError::internal(format!("blocking task failed: {}", e))
}
