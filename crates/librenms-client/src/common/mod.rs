//! Common utilities for the LibreNMS API client
//!
//! Holds the HTTP verb primitives every endpoint method goes through.

pub mod query;

use crate::error::LibreNmsError;
use crate::transport::ApiTransport;
use query::QueryParams;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// API version path appended to the base URL
pub const API_PATH: &str = "api/v0/";

/// Header carrying the API token
pub const AUTH_HEADER: &str = "X-Auth-Token";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client wrapper with authentication
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    api_url: String,
    token: String,
}

impl HttpClient {
    /// Build a reqwest client and wrap it
    ///
    /// # Arguments
    /// * `base_url` - LibreNMS root URL, with or without trailing slash
    /// * `token` - API token
    /// * `verify_ssl` - if false, invalid TLS certificates are accepted
    pub fn new(base_url: &str, token: String, verify_ssl: bool) -> Result<Self, LibreNmsError> {
        let client = Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(!verify_ssl)
            .build()?;

        Ok(Self::with_client(client, base_url, token))
    }

    /// Wrap an already configured reqwest client
    pub fn with_client(client: Client, base_url: &str, token: String) -> Self {
        Self {
            client,
            api_url: api_url(base_url),
            token,
        }
    }

    /// Build a full URL from a route
    pub fn build_url(&self, route: &str) -> String {
        format!("{}{}", self.api_url, route)
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTH_HEADER, &self.token)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    async fn send(request: RequestBuilder) -> Result<Value, LibreNmsError> {
        let response = request.send().await?;
        debug!("LibreNMS responded with status {}", response.status());
        Ok(response.json().await?)
    }
}

/// Top-level field names of a request body, for logging
///
/// Bodies carry SNMP communities and SNMPv3 passphrases, so values are never logged.
fn body_fields(body: &Value) -> Vec<&str> {
    match body {
        Value::Object(map) => map.keys().map(String::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Normalize a base URL to `<base>/api/v0/`
pub fn api_url(base_url: &str) -> String {
    let mut url = base_url.to_string();
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(API_PATH);
    url
}

#[async_trait::async_trait]
impl ApiTransport for HttpClient {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get(&self, route: &str, params: &QueryParams) -> Result<Value, LibreNmsError> {
        let url = self.build_url(route);
        let query = params.encode();
        debug!("GET {} with query: {:?}", url, query);

        Self::send(self.authorized(self.client.get(&url)).query(&query)).await
    }

    async fn post(&self, route: &str, body: &Value) -> Result<Value, LibreNmsError> {
        let url = self.build_url(route);
        debug!("POST {} with fields: {:?}", url, body_fields(body));

        Self::send(self.authorized(self.client.post(&url)).json(body)).await
    }

    async fn patch(&self, route: &str, body: &Value) -> Result<Value, LibreNmsError> {
        let url = self.build_url(route);
        debug!("PATCH {} with fields: {:?}", url, body_fields(body));

        Self::send(self.authorized(self.client.patch(&url)).json(body)).await
    }

    async fn delete(&self, route: &str, body: Option<&Value>) -> Result<Value, LibreNmsError> {
        let url = self.build_url(route);
        let mut request = self.authorized(self.client.delete(&url));
        if let Some(body) = body {
            debug!("DELETE {} with fields: {:?}", url, body_fields(body));
            request = request.json(body);
        } else {
            debug!("DELETE {}", url);
        }
        Self::send(request).await
    }
}
