//! Small shared utilities.

mod html;

pub use html::html_escape;
