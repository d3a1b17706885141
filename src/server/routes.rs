//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        // Analysis forms: GET shows the empty form, POST processes it
        .route("/ner", get(handlers::ner_page).post(handlers::ner_submit))
        .route("/pos", get(handlers::pos_page).post(handlers::pos_submit))
        .route("/web", get(handlers::web_page).post(handlers::web_submit))
        .route(
            "/wordcloud",
            get(handlers::wordcloud_page).post(handlers::wordcloud_submit),
        )
        // Static pages
        .route("/about", get(handlers::about))
        .route("/help", get(handlers::help))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
