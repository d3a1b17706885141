//! Request handlers.
//!
//! Handlers extract form input, call exactly one component, and map the
//! outcome into a template. No handler performs its own text analysis.

mod analyze;
mod pages;
mod wordcloud;

pub use analyze::{ner_page, ner_submit, pos_page, pos_submit, web_page, web_submit};
pub use pages::{about, help, index};
pub use wordcloud::{wordcloud_page, wordcloud_submit};

use askama::Template;
use axum::response::Html;

/// Render a template into an HTML response, falling back to a plain
/// error string when rendering itself fails.
pub(crate) fn render_page<T: Template>(template: T) -> Html<String> {
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}
