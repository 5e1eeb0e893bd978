#![forbid(unsafe_code)]

//! Structured logging support.
//!
//! With the `tracing` feature the usual `tracing` macros are re-exported from
//! the crate root. With `tracing-json` a JSON subscriber can be installed for
//! production hosts; the filter follows `RUST_LOG` syntax.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a global JSON subscriber.
///
/// `filter` is used when `RUST_LOG` is unset, e.g. `"zonegrid=debug"`.
/// Fails if a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging(filter: &str) -> Result<(), LoggingInitError> {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .map_err(|err| LoggingInitError::Filter(err.to_string()))?;
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|err| LoggingInitError::AlreadyInstalled(err.to_string()))
}

/// Failure to install the JSON subscriber.
#[cfg(feature = "tracing-json")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingInitError {
    /// The filter directive could not be parsed.
    Filter(String),
    /// Another global subscriber is already set.
    AlreadyInstalled(String),
}

#[cfg(feature = "tracing-json")]
impl std::fmt::Display for LoggingInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Filter(msg) => write!(f, "invalid log filter: {msg}"),
            Self::AlreadyInstalled(msg) => write!(f, "subscriber already installed: {msg}"),
        }
    }
}

#[cfg(feature = "tracing-json")]
impl std::error::Error for LoggingInitError {}
