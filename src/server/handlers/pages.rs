//! Static page handlers.

use axum::response::IntoResponse;

use super::super::template_structs::{AboutTemplate, HelpTemplate, IndexTemplate};
use super::render_page;

pub async fn index() -> impl IntoResponse {
    render_page(IndexTemplate { title: "TextLens" })
}

pub async fn about() -> impl IntoResponse {
    render_page(AboutTemplate { title: "About" })
}

pub async fn help() -> impl IntoResponse {
    render_page(HelpTemplate { title: "Help" })
}
