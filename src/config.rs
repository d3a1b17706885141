//! Runtime settings for the TextLens server.

use std::path::PathBuf;
use std::time::Duration;

/// Default HTTP fetch timeout in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8000;

/// Settings assembled from CLI flags and environment variables.
///
/// There is no persisted configuration; everything the process needs is
/// known at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Host to bind the web server to.
    pub host: String,
    /// Port to bind the web server to.
    pub port: u16,
    /// Optional path to a language model bundle overriding the embedded one.
    pub model_path: Option<PathBuf>,
    /// Timeout applied to every outbound page fetch.
    pub fetch_timeout: Duration,
    /// Optional User-Agent override for outbound fetches.
    pub user_agent: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model_path: None,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}
