//! Fetch a web page and reduce it to plain text.
//!
//! One GET with a browser-like User-Agent and a bounded timeout, no
//! retries. The caller decides whether a failure reaches the user.

mod extract;

pub use extract::{extract_visible_text, normalize_whitespace};

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Browser-like User-Agent sent with every fetch. Some sites refuse the
/// default library identification outright.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Failure fetching or reducing a page to text.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The supplied string is not a retrievable network location.
    #[error("not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network-level failure, including timeouts.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// The page parsed but contained no visible text.
    #[error("page contains no extractable text")]
    EmptyDocument,
}

/// HTTP client wrapper that turns URLs into plain text.
#[derive(Clone)]
pub struct TextFetcher {
    client: Client,
}

impl TextFetcher {
    /// Create a fetcher with the given timeout and optional User-Agent
    /// override.
    pub fn new(timeout: Duration, user_agent: Option<&str>) -> Self {
        let client = Client::builder()
            .user_agent(user_agent.unwrap_or(USER_AGENT))
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch `url` and return its visible text, whitespace-normalized.
    ///
    /// Non-2xx statuses are failures; markup stripping removes script,
    /// style, nav, header, and footer subtrees before text extraction.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let url = Url::parse(url.trim())?;
        debug!(%url, "fetching page");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let text = extract_visible_text(&body);
        if text.is_empty() {
            return Err(FetchError::EmptyDocument);
        }

        debug!(chars = text.len(), "extracted page text");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> TextFetcher {
        TextFetcher::new(Duration::from_secs(2), None)
    }

    #[tokio::test]
    async fn test_invalid_url_rejected() {
        let err = fetcher().fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        // Reserved TLD per RFC 2606; never resolves.
        let err = fetcher()
            .fetch("http://unreachable.invalid/")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }
}
