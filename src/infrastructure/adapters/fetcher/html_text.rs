//! HTML 可见文本提取
//!
//! 去掉 script、style、iframe 及其内容，按文档顺序拼接其余文本节点（不含注释）

use scraper::{Html, Node};

/// 连同内容一起去除的元素
const STRIPPED_ELEMENTS: &[&str] = &["script", "style", "iframe"];

/// 提取 HTML 文档的可见文本
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();

    for node in document.tree.root().descendants() {
        let Node::Text(fragment) = node.value() else {
            continue;
        };
        let stripped = node.ancestors().any(|ancestor| {
            matches!(
                ancestor.value(),
                Node::Element(element) if STRIPPED_ELEMENTS.contains(&element.name())
            )
        });
        if !stripped {
            text.push_str(fragment);
        }
    }

    text
}
