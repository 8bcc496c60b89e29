//! 应用层错误定义
//!
//! 统一的查询错误类型。抓取失败、无词频数据和渲染失败属于页面内提示，
//! 不经过这里

use thiserror::Error;

use crate::application::ports::RenderError;
use crate::domain::ChartError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 图表构建错误
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// 图表渲染错误
    #[error(transparent)]
    Render(#[from] RenderError),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}
