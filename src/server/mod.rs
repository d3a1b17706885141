//! Web server for the NLP inspection pages.
//!
//! Provides HTML forms for:
//! - Named-entity recognition over pasted text
//! - Part-of-speech tagging with category grouping
//! - Entity extraction from a fetched URL
//! - Word-cloud image generation

mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::fetch::TextFetcher;
use crate::nlp::{LanguageModel, NlpAdapter};

/// Shared state for the web server.
///
/// The model handle is read-only after startup; the fetcher holds one
/// reusable HTTP client. Both are safe for concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub nlp: NlpAdapter,
    pub fetcher: Arc<TextFetcher>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let model = match LanguageModel::load(settings.model_path.as_deref()) {
            Ok(model) => {
                tracing::info!(model = model.name(), "language model loaded");
                Some(model)
            }
            Err(e) => {
                // The server still starts; analysis pages answer with an
                // error until the process is restarted with a good model.
                tracing::error!("failed to load language model: {e}");
                None
            }
        };

        let fetcher = TextFetcher::new(settings.fetch_timeout, settings.user_agent.as_deref());

        Self {
            nlp: NlpAdapter::new(model),
            fetcher: Arc::new(fetcher),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_app() -> axum::Router {
        let state = AppState {
            nlp: NlpAdapter::new(Some(LanguageModel::embedded().unwrap())),
            fetcher: Arc::new(TextFetcher::new(Duration::from_secs(2), None)),
        };
        create_router(state)
    }

    fn test_app_without_model() -> axum::Router {
        let state = AppState {
            nlp: NlpAdapter::new(None),
            fetcher: Arc::new(TextFetcher::new(Duration::from_secs(2), None)),
        };
        create_router(state)
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<!DOCTYPE html>") || html.contains("<html"));
        assert!(html.contains("TextLens"));
    }

    #[tokio::test]
    async fn test_static_pages() {
        for uri in ["/about", "/help"] {
            let response = test_app()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        }
    }

    #[tokio::test]
    async fn test_ner_form_page() {
        let response = test_app()
            .oneshot(Request::builder().uri("/ner").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("user_input"));
    }

    #[tokio::test]
    async fn test_ner_submit_finds_entities() {
        let response = test_app()
            .oneshot(form_post("/ner", "user_input=Alice+went+to+Paris."))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Alice"));
        assert!(html.contains("PERSON"));
        assert!(html.contains("GPE"));
    }

    #[tokio::test]
    async fn test_ner_submit_empty_input_is_empty_page() {
        let response = test_app()
            .oneshot(form_post("/ner", "user_input="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(!html.contains("PERSON"));
    }

    #[tokio::test]
    async fn test_ner_zero_entities_still_renders() {
        let response = test_app()
            .oneshot(form_post("/ner", "user_input=the+quick+fox+jumps"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("No entities found"));
    }

    #[tokio::test]
    async fn test_ner_without_model_shows_error() {
        let response = test_app_without_model()
            .oneshot(form_post("/ner", "user_input=Alice+went+to+Paris."))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("language model is not loaded"));
    }

    #[tokio::test]
    async fn test_pos_submit_groups_tokens() {
        let response = test_app()
            .oneshot(form_post("/pos", "user_input=The+quick+fox+jumps"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("DET"));
        assert!(html.contains("VERB"));
        assert!(html.contains("jumps"));
    }

    #[tokio::test]
    async fn test_pos_escapes_markup_in_input() {
        let response = test_app()
            .oneshot(form_post("/pos", "user_input=%3Cscript%3Ealert(1)%3C%2Fscript%3E"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(!html.contains("<script>alert"));
    }

    #[tokio::test]
    async fn test_web_submit_requires_url() {
        let response = test_app()
            .oneshot(form_post("/web", "url_input="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Please provide a URL"));
    }

    #[tokio::test]
    async fn test_web_submit_bad_url_shows_error() {
        let response = test_app()
            .oneshot(form_post("/web", "url_input=not+a+url"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Could not read the page"));
    }

    #[tokio::test]
    async fn test_wordcloud_submit_renders_image() {
        let response = test_app()
            .oneshot(form_post(
                "/wordcloud",
                "user_input=rust+rust+rust+web+server+cloud&max_words=50",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_wordcloud_non_numeric_max_words_is_coerced() {
        let response = test_app()
            .oneshot(form_post(
                "/wordcloud",
                "user_input=rust+rust+web&max_words=abc",
            ))
            .await
            .unwrap();

        // The request still succeeds with the default cap.
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_wordcloud_empty_input_shows_error() {
        let response = test_app()
            .oneshot(form_post("/wordcloud", "user_input=&url_input="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Please provide some text or a URL"));
        assert!(!html.contains("data:image/png;base64,"));
    }
}
