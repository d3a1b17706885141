//! TextLens - quick NLP inspection through the browser.
//!
//! A small web front end for looking at named entities, part-of-speech
//! tags, and word clouds for pasted text or fetched web pages.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use textlens::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "textlens=debug"
    } else {
        "textlens=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cli::run().await
}
