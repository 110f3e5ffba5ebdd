//! LibreNMS API client
//!
//! One method per LibreNMS endpoint, grouped by API section. Every method
//! builds a route relative to `<base_url>/api/v0/` and hands it to one of the
//! [`ApiTransport`] verb primitives.

mod devicegroups;
mod devices;
mod locations;
mod ports;
mod routing;
mod switching;
mod system;

#[cfg(test)]
mod devices_test;

use crate::common::HttpClient;
use crate::common::query::QueryParams;
use crate::config::LibreNmsConfig;
use crate::error::LibreNmsError;
use crate::transport::ApiTransport;
use tracing::debug;

/// LibreNMS API client
///
/// Immutable after construction and safe to share between tasks.
#[derive(Debug, Clone)]
pub struct LibreNmsClient<T: ApiTransport = HttpClient> {
    transport: T,
}

impl LibreNmsClient<HttpClient> {
    /// Create a new LibreNMS client
    ///
    /// # Arguments
    /// * `base_url` - LibreNMS root URL (e.g., "https://librenms.example.com")
    /// * `token` - API token for authentication
    /// * `verify_ssl` - if false, the TLS certificate is not verified
    pub fn new(base_url: &str, token: impl Into<String>, verify_ssl: bool) -> Result<Self, LibreNmsError> {
        let transport = HttpClient::new(base_url, token.into(), verify_ssl)?;
        debug!("LibreNMS client targeting {}", transport.api_url());
        Ok(Self { transport })
    }

    /// Create a client from a loaded configuration
    pub fn from_config(config: &LibreNmsConfig) -> Result<Self, LibreNmsError> {
        Self::new(&config.base_url, config.api_token.clone(), config.verify_ssl)
    }
}

impl<T: ApiTransport> LibreNmsClient<T> {
    /// Use a custom transport (e.g. a mock in tests)
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Base URL including the `api/v0/` suffix
    pub fn api_url(&self) -> &str {
        self.transport.api_url()
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// `columns` parameter shared by the port listing endpoints
fn column_params(columns: Option<&[&str]>) -> QueryParams {
    QueryParams::new().with("columns", columns)
}
