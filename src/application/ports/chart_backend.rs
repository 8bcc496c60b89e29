//! Chart Backend Port - 图表渲染后端抽象
//!
//! 每个可视化库一个实现：负责构建图表对象和把图表对象渲染为页面片段

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::{ChartError, ChartKind, ChartLibrary, ChartObject};

/// 渲染错误
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("序列化图表失败: {0}")]
    SerializeError(String),

    #[error("绘制图表失败: {0}")]
    DrawError(String),

    #[error("图表对象不属于 {expected}: {actual}")]
    SpecMismatch {
        expected: ChartLibrary,
        actual: ChartLibrary,
    },
}

/// 渲染结果：可直接嵌入页面的 HTML 片段
#[derive(Debug, Clone, Serialize)]
pub struct RenderedChart {
    pub library: ChartLibrary,
    pub kind: ChartKind,
    pub html: String,
}

/// Chart Backend Port
pub trait ChartBackendPort: Send + Sync {
    fn library(&self) -> ChartLibrary;

    /// 该后端构建的图表类型
    fn chart_kinds(&self) -> &'static [ChartKind] {
        self.library().chart_kinds()
    }

    /// 用词语（x）和频次（y）构建指定类型的图表对象
    fn build(
        &self,
        kind: ChartKind,
        words: &[String],
        frequencies: &[u32],
    ) -> Result<ChartObject, ChartError>;

    /// 将图表对象渲染为 HTML 片段
    fn render(&self, chart: &ChartObject) -> Result<RenderedChart, RenderError>;
}

/// 按可视化库索引的后端集合
#[derive(Clone, Default)]
pub struct ChartBackends {
    backends: Vec<Arc<dyn ChartBackendPort>>,
}

impl ChartBackends {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册后端；同一个库只保留最后注册的实现
    pub fn with(mut self, backend: Arc<dyn ChartBackendPort>) -> Self {
        self.backends.retain(|b| b.library() != backend.library());
        self.backends.push(backend);
        self
    }

    pub fn get(&self, library: ChartLibrary) -> Option<Arc<dyn ChartBackendPort>> {
        self.backends
            .iter()
            .find(|b| b.library() == library)
            .cloned()
    }

    pub fn libraries(&self) -> Vec<ChartLibrary> {
        self.backends.iter().map(|b| b.library()).collect()
    }
}
