//! 测试用端口实现

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread::{self, ThreadId};

use super::{
    ChartBackendPort, FetchError, PageFetcherPort, RenderError, RenderedChart, WordSegmenterPort,
};
use crate::domain::chart::LABEL_ROTATION_DEGREES;
use crate::domain::{ChartError, ChartKind, ChartLibrary, ChartObject, ChartSpec};

/// 始终返回固定文本的抓取器
pub struct StaticPageFetcher {
    pub text: String,
}

impl StaticPageFetcher {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl PageFetcherPort for StaticPageFetcher {
    async fn fetch_text(&self, _url: &str) -> Result<String, FetchError> {
        Ok(self.text.clone())
    }
}

/// 始终超时的抓取器
pub struct TimeoutPageFetcher;

#[async_trait]
impl PageFetcherPort for TimeoutPageFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        Err(FetchError::Timeout(url.to_string()))
    }
}

/// 按空白切分并记录调用次数与调用线程的分词器
#[derive(Default)]
pub struct WhitespaceSegmenter {
    calls: AtomicUsize,
    last_thread: Mutex<Option<ThreadId>>,
}

impl WhitespaceSegmenter {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_thread(&self) -> Option<ThreadId> {
        *self.last_thread.lock().unwrap()
    }
}

impl WordSegmenterPort for WhitespaceSegmenter {
    fn cut<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_thread.lock().unwrap() = Some(thread::current().id());
        text.split_whitespace().collect()
    }
}

/// 只记录数据的图表后端，可配置为渲染失败
pub struct FakeChartBackend {
    pub library: ChartLibrary,
    pub fail_render: bool,
    render_thread: Mutex<Option<ThreadId>>,
}

impl FakeChartBackend {
    pub fn new(library: ChartLibrary) -> Self {
        Self {
            library,
            fail_render: false,
            render_thread: Mutex::new(None),
        }
    }

    pub fn failing(library: ChartLibrary) -> Self {
        Self {
            fail_render: true,
            ..Self::new(library)
        }
    }

    pub fn last_render_thread(&self) -> Option<ThreadId> {
        *self.render_thread.lock().unwrap()
    }
}

impl ChartBackendPort for FakeChartBackend {
    fn library(&self) -> ChartLibrary {
        self.library
    }

    fn build(
        &self,
        kind: ChartKind,
        words: &[String],
        frequencies: &[u32],
    ) -> Result<ChartObject, ChartError> {
        if !self.library.supports(kind) {
            return Err(ChartError::UnsupportedKind {
                library: self.library,
                kind,
            });
        }
        Ok(ChartObject {
            library: self.library,
            kind,
            title: kind.title().to_string(),
            words: words.to_vec(),
            frequencies: frequencies.to_vec(),
            label_rotation: LABEL_ROTATION_DEGREES,
            spec: ChartSpec::PlotlyFigure(serde_json::Value::Null),
        })
    }

    fn render(&self, chart: &ChartObject) -> Result<RenderedChart, RenderError> {
        *self.render_thread.lock().unwrap() = Some(thread::current().id());
        if self.fail_render {
            return Err(RenderError::DrawError("fake failure".to_string()));
        }
        Ok(RenderedChart {
            library: chart.library,
            kind: chart.kind,
            html: format!("<div>{}</div>", chart.words.join(",")),
        })
    }
}
