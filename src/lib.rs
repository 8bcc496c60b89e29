//! Cipin - 网页中文词频可视化
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Text Context: 停用词、词频统计、Top N 选取
//! - Chart Context: 可视化库、图表类型、图表对象
//!
//! 应用层 (application/):
//! - Ports: 端口定义（PageFetcher, WordSegmenter, ChartBackend）
//! - Queries: 抓取 → 分词统计 → 构建图表 → 渲染的流水线
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: reqwest + scraper 抓取、jieba 分词、停用词文件、ECharts / Plotly / Plotters 后端
//! - HTTP: 分析页面 + JSON API

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
