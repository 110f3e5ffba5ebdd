//! Client configuration
//!
//! The three construction inputs of a [`LibreNmsClient`](crate::LibreNmsClient):
//! base URL, API token and the TLS verification flag.

use crate::error::LibreNmsError;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the LibreNMS base URL
pub const LIBRENMS_URL_ENV: &str = "LIBRENMS_URL";
/// Environment variable holding the API token
pub const LIBRENMS_TOKEN_ENV: &str = "LIBRENMS_TOKEN";
/// Environment variable toggling TLS certificate verification
pub const LIBRENMS_VERIFY_SSL_ENV: &str = "LIBRENMS_VERIFY_SSL";

/// Connection settings for a single LibreNMS instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibreNmsConfig {
    /// LibreNMS root URL, e.g. `https://librenms.example.com`
    pub base_url: String,

    /// API token sent as `X-Auth-Token`
    pub api_token: String,

    /// If false, the client will not verify the TLS certificate
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
}

fn default_verify_ssl() -> bool {
    true
}

impl LibreNmsConfig {
    /// Create a configuration that verifies TLS certificates
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            verify_ssl: default_verify_ssl(),
        }
    }

    /// Load configuration from `LIBRENMS_URL`, `LIBRENMS_TOKEN` and
    /// `LIBRENMS_VERIFY_SSL`.
    ///
    /// URL and token are required. The verification flag defaults to true and
    /// accepts `true/false`, `1/0`, `yes/no`.
    pub fn from_env() -> Result<Self, LibreNmsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, LibreNmsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(LIBRENMS_URL_ENV).ok_or_else(|| {
            LibreNmsError::Config(format!("{LIBRENMS_URL_ENV} environment variable is required"))
        })?;
        let api_token = lookup(LIBRENMS_TOKEN_ENV).ok_or_else(|| {
            LibreNmsError::Config(format!("{LIBRENMS_TOKEN_ENV} environment variable is required"))
        })?;
        let verify_ssl = match lookup(LIBRENMS_VERIFY_SSL_ENV) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                LibreNmsError::Config(format!(
                    "{LIBRENMS_VERIFY_SSL_ENV} must be a boolean, got '{raw}'"
                ))
            })?,
            None => default_verify_ssl(),
        };

        Ok(Self { base_url, api_token, verify_ssl })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
