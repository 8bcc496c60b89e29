//! Fetcher Adapter - 网页抓取与正文提取

mod html_text;
mod http_page_fetcher;

pub use html_text::extract_visible_text;
pub use http_page_fetcher::*;
