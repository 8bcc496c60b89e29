//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Text Context: 停用词与词频统计
//! - Chart Context: 图表类型、可视化库与图表对象

pub mod chart;
pub mod text;

pub use chart::{ChartError, ChartKind, ChartLibrary, ChartObject, ChartSet, ChartSpec};
pub use text::{FrequencyMap, StopWordSet, WordCount, TOP_N};
