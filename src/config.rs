//! Server configuration.
//!
//! Values come from command-line flags with environment-variable fallbacks.
//! `RUST_LOG`, when set, takes precedence over `--log-level`; that override
//! is applied by the binary, not here.

use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8080;

/// Log filter used unless configured otherwise.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The log filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {source}")]
    InvalidLogFilter {
        /// The rejected directive.
        directive: String,
        /// Parser failure.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Runtime configuration for the message API server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "pigeon", version, about = "Message CRUD service over HTTP")]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "PIGEON_BIND", default_value_t = default_bind())]
    pub bind: SocketAddr,

    /// `tracing` filter directive, e.g. `info` or `pigeon=debug,tower_http=info`.
    #[arg(long, env = "PIGEON_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,
}

const fn default_bind() -> SocketAddr {
    SocketAddr::new(std::net::IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl ServerConfig {
    /// Parses the configured log level into a filter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogFilter`] when the directive is not a
    /// valid `tracing` filter.
    pub fn log_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_level).map_err(|source| ConfigError::InvalidLogFilter {
            directive: self.log_level.clone(),
            source,
        })
    }
}
