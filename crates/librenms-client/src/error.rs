//! LibreNMS client errors

use thiserror::Error;

/// Errors that can occur when talking to the LibreNMS API
///
/// Error-shaped JSON returned by LibreNMS (e.g. `{"status": "error", ...}`) is
/// not an error here: the decoded body is handed back to the caller as-is.
#[derive(Debug, Error)]
pub enum LibreNmsError {
    /// Caller-supplied arguments failed a local check; nothing was sent
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Connection, TLS, timeout or body-decoding failure from the HTTP client
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Client configuration could not be loaded
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl LibreNmsError {
    /// Shorthand for the most common validation failure
    pub(crate) fn missing(parameter: &str) -> Self {
        Self::Validation(format!("missing parameter {parameter}"))
    }

    /// Returns true if the error was raised before any request was issued
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
