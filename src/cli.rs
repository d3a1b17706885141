//! Command-line interface.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::{Settings, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_PORT};
use crate::server;

#[derive(Parser)]
#[command(name = "textlens", version, about = "NLP inspection through the browser")]
pub struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web interface.
    Serve {
        /// Host to bind to.
        #[arg(long, default_value = DEFAULT_HOST, env = "TEXTLENS_HOST")]
        host: String,

        /// Port to bind to.
        #[arg(long, default_value_t = DEFAULT_PORT, env = "TEXTLENS_PORT")]
        port: u16,

        /// Path to a language model bundle (JSON). Uses the embedded
        /// English bundle when omitted.
        #[arg(long, env = "TEXTLENS_MODEL")]
        model: Option<PathBuf>,

        /// Timeout for outbound page fetches, in seconds.
        #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS, env = "TEXTLENS_FETCH_TIMEOUT")]
        fetch_timeout: u64,

        /// User-Agent header for outbound page fetches.
        #[arg(long, env = "TEXTLENS_USER_AGENT")]
        user_agent: Option<String>,
    },
}

/// Check for the verbose flag before clap runs, so logging can be set up
/// ahead of argument parsing.
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

/// Parse arguments and dispatch.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            host,
            port,
            model,
            fetch_timeout,
            user_agent,
        } => {
            let settings = Settings {
                host,
                port,
                model_path: model,
                fetch_timeout: Duration::from_secs(fetch_timeout),
                user_agent,
            };
            server::serve(&settings).await
        }
    }
}
