//! Word-cloud form handler.

use axum::{extract::State, response::IntoResponse, Form};
use serde::Deserialize;
use tracing::{debug, warn};

use super::super::template_structs::WordCloudTemplate;
use super::super::AppState;
use super::render_page;
use crate::cloud::{self, DEFAULT_BACKGROUND, DEFAULT_MAX_WORDS};

/// Form payload for the word-cloud page.
#[derive(Debug, Deserialize)]
pub struct WordCloudForm {
    pub user_input: Option<String>,
    pub url_input: Option<String>,
    pub max_words: Option<String>,
    pub background: Option<String>,
}

/// Coerce the `max_words` field to a positive integer, defaulting when
/// missing or unparseable.
pub(crate) fn parse_max_words(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_WORDS)
}

pub async fn wordcloud_page() -> impl IntoResponse {
    render_page(WordCloudTemplate::empty())
}

pub async fn wordcloud_submit(
    State(state): State<AppState>,
    Form(form): Form<WordCloudForm>,
) -> impl IntoResponse {
    let max_words = parse_max_words(form.max_words.as_deref());
    let background = form
        .background
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_BACKGROUND)
        .to_string();

    let mut template = WordCloudTemplate::empty();
    template.input_text = form.user_input.clone().unwrap_or_default();
    template.url_input = form.url_input.clone().unwrap_or_default();
    template.max_words = form.max_words.clone().unwrap_or_default();
    template.background = background.clone();

    // Direct text wins; a URL is fetched only when no text was pasted.
    let direct = form
        .user_input
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let url = form
        .url_input
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let text = match (direct, url) {
        (Some(text), _) => text,
        (None, Some(url)) => match state.fetcher.fetch(&url).await {
            Ok(text) => text,
            Err(e) => {
                warn!(%url, "fetch failed: {e}");
                template.has_error = true;
                template.error = format!("Could not read the page: {e}.");
                return render_page(template);
            }
        },
        (None, None) => {
            template.has_error = true;
            template.error = "Please provide some text or a URL.".to_string();
            return render_page(template);
        }
    };

    debug!(chars = text.len(), max_words, "wordcloud request");
    match cloud::render(&text, max_words, &background) {
        Ok(image) => {
            template.has_result = true;
            template.image_base64 = image.png_base64;
            template.word_count = image.word_count;
        }
        Err(e) => {
            warn!("word cloud rendering failed: {e}");
            template.has_error = true;
            template.error = e.to_string();
        }
    }

    render_page(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_max_words_valid() {
        assert_eq!(parse_max_words(Some("25")), 25);
        assert_eq!(parse_max_words(Some(" 7 ")), 7);
    }

    #[test]
    fn test_parse_max_words_coerced_to_default() {
        assert_eq!(parse_max_words(Some("abc")), DEFAULT_MAX_WORDS);
        assert_eq!(parse_max_words(Some("")), DEFAULT_MAX_WORDS);
        assert_eq!(parse_max_words(Some("-5")), DEFAULT_MAX_WORDS);
        assert_eq!(parse_max_words(Some("0")), DEFAULT_MAX_WORDS);
        assert_eq!(parse_max_words(None), DEFAULT_MAX_WORDS);
    }
}
