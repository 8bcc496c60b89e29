//! Chart Context - Errors

use thiserror::Error;

use super::{ChartKind, ChartLibrary};

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("没有找到任何词频数据")]
    NoFrequencyData,

    #[error("未知的可视化库: {0}")]
    UnknownLibrary(String),

    #[error("未知的图表类型: {0}")]
    UnknownKind(String),

    #[error("{library} 不支持{kind}")]
    UnsupportedKind {
        library: ChartLibrary,
        kind: ChartKind,
    },
}
