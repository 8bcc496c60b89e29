//! HTTP Handlers

mod analyze;
mod page;
mod ping;

pub use analyze::*;
pub use page::*;
pub use ping::*;
