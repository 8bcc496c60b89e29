//! 应用层 - 查询
//!
//! 整条流水线只读不写：抓取、统计、构建图表都是查询

mod analysis_queries;
mod report;

pub mod handlers;

pub use analysis_queries::*;
pub use report::{AnalysisReport, Notice};
