//! Runs the message API server.
//!
//! Usage:
//!
//! ```text
//! pigeon [--bind <addr>] [--log-level <filter>]
//! ```
//!
//! Both flags fall back to `PIGEON_BIND` and `PIGEON_LOG`. `RUST_LOG`, when
//! set, overrides the log level.

use clap::Parser;
use pigeon::{app, config::ServerConfig, http};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::parse();

    let filter = EnvFilter::try_from_default_env().or_else(|_| config.log_filter())?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let listener = http::bind(config.bind).await?;
    http::serve(listener, app::in_memory_use_case(), http::shutdown_signal()).await?;
    Ok(())
}
