//! Visible-text extraction from HTML markup.

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Tags whose entire subtree is dropped before text extraction. These
/// never contribute readable page content.
const STRIPPED_TAGS: &[&str] = &["script", "style", "nav", "header", "footer", "noscript"];

/// Parse `html` and return its visible text with whitespace collapsed.
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::new();
    collect_text(document.tree.root(), &mut raw);
    normalize_whitespace(&raw)
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Element(element) => {
            if STRIPPED_TAGS.contains(&element.name()) {
                return;
            }
        }
        Node::Text(text) => {
            out.push_str(&text.text);
            out.push('\n');
        }
        _ => {}
    }
    for child in node.children() {
        collect_text(child, out);
    }
}

/// Collapse runs of whitespace: trim each line, split remaining runs,
/// rejoin non-empty fragments with single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .flat_map(|line| line.trim().split_whitespace())
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
