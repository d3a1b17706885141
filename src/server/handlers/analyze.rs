//! Entity and POS form handlers, for pasted text and fetched pages.

use axum::{
    extract::State,
    response::IntoResponse,
    Form,
};
use serde::Deserialize;
use tracing::{debug, warn};

use super::super::template_structs::{EntityRow, NerTemplate, PosGroup, PosRow, PosTemplate, WebTemplate};
use super::super::AppState;
use super::render_page;
use crate::nlp::EntityExtraction;

/// Form payload for the text-based operations.
#[derive(Debug, Deserialize)]
pub struct TextForm {
    pub user_input: Option<String>,
}

/// Form payload for the URL-based operation.
#[derive(Debug, Deserialize)]
pub struct UrlForm {
    pub url_input: Option<String>,
}

fn entity_rows(result: &EntityExtraction) -> Vec<EntityRow> {
    result
        .entities
        .iter()
        .map(|e| EntityRow {
            text: e.text.clone(),
            label: e.label.clone(),
        })
        .collect()
}

pub async fn ner_page() -> impl IntoResponse {
    render_page(NerTemplate::empty())
}

pub async fn ner_submit(
    State(state): State<AppState>,
    Form(form): Form<TextForm>,
) -> impl IntoResponse {
    let input = form.user_input.unwrap_or_default();
    let text = input.trim().to_string();

    let mut template = NerTemplate::empty();
    if text.is_empty() {
        return render_page(template);
    }
    template.input_text = input;

    debug!(chars = text.len(), "ner request");
    match state.nlp.entities(&text) {
        Ok(result) => {
            template.has_result = true;
            template.entities = entity_rows(&result);
            template.highlight = result.html;
        }
        Err(e) => {
            warn!("entity extraction failed: {e}");
            template.has_error = true;
            template.error = e.to_string();
        }
    }

    render_page(template)
}

pub async fn pos_page() -> impl IntoResponse {
    render_page(PosTemplate::empty())
}

pub async fn pos_submit(
    State(state): State<AppState>,
    Form(form): Form<TextForm>,
) -> impl IntoResponse {
    let input = form.user_input.unwrap_or_default();
    let text = input.trim().to_string();

    let mut template = PosTemplate::empty();
    if text.is_empty() {
        return render_page(template);
    }
    template.input_text = input;

    debug!(chars = text.len(), "pos request");
    match state.nlp.pos_tags(&text) {
        Ok(result) => {
            template.has_result = true;
            template.rows = result
                .annotations
                .iter()
                .map(|a| PosRow {
                    token: a.token.clone(),
                    category: a.category.clone(),
                    tag: a.tag.clone(),
                })
                .collect();
            template.groups = result
                .groups
                .iter()
                .map(|(category, tokens)| PosGroup {
                    category: category.clone(),
                    tokens: tokens.join(", "),
                })
                .collect();
            template.highlight = result.html;
        }
        Err(e) => {
            warn!("pos tagging failed: {e}");
            template.has_error = true;
            template.error = e.to_string();
        }
    }

    render_page(template)
}

pub async fn web_page() -> impl IntoResponse {
    render_page(WebTemplate::empty())
}

pub async fn web_submit(
    State(state): State<AppState>,
    Form(form): Form<UrlForm>,
) -> impl IntoResponse {
    let url = form.url_input.unwrap_or_default();
    let url = url.trim().to_string();

    let mut template = WebTemplate::empty();
    if url.is_empty() {
        template.has_error = true;
        template.error = "Please provide a URL to analyze.".to_string();
        return render_page(template);
    }
    template.url_input = url.clone();

    let text = match state.fetcher.fetch(&url).await {
        Ok(text) => text,
        Err(e) => {
            warn!(%url, "fetch failed: {e}");
            template.has_error = true;
            template.error = format!("Could not read the page: {e}.");
            return render_page(template);
        }
    };

    match state.nlp.entities(&text) {
        Ok(result) => {
            template.has_result = true;
            template.entities = entity_rows(&result);
            template.highlight = result.html;
        }
        Err(e) => {
            warn!("entity extraction failed: {e}");
            template.has_error = true;
            template.error = e.to_string();
        }
    }

    render_page(template)
}
