//! Query Handlers
//!
//! 流水线各阶段的处理器

mod analyze_handlers;
mod chart_handlers;
mod count_handlers;
mod fetch_handlers;

pub use analyze_handlers::AnalyzeUrlHandler;
pub use chart_handlers::{build_charts, BuildChartsHandler};
pub use count_handlers::CountWordsHandler;
pub use fetch_handlers::{FetchPageHandler, FetchedPage};
