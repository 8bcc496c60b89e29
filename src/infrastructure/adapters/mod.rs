//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod charts;
pub mod fetcher;
pub mod segmenter;
pub mod storage;

pub use charts::*;
pub use fetcher::*;
pub use segmenter::*;
pub use storage::*;
