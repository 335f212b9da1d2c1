//! Logging setup for the service binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary so embedding applications keep control of their own output.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured log filter could not be parsed.
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        /// The filter string that failed to parse.
        value: String,
        /// The underlying parse error.
        #[source]
        source: ParseError,
    },

    /// A global subscriber was already installed.
    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Builds the log filter, preferring `RUST_LOG` over `default_level`.
pub fn build_filter(default_level: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level).map_err(|source| TelemetryError::EnvFilter {
            value: default_level.to_string(),
            source,
        }),
    }
}

/// Installs a compact fmt subscriber as the global default.
pub fn init(default_level: &str) -> Result<(), TelemetryError> {
    let env_filter = build_filter(default_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
