//! ApiTransport trait for mocking
//!
//! Abstracts the four HTTP verb primitives so that endpoint methods can be
//! exercised without a running LibreNMS instance. [`HttpClient`](crate::HttpClient)
//! is the production implementation.

use crate::common::query::QueryParams;
use crate::error::LibreNmsError;
use serde_json::Value;

/// Verb primitives every endpoint method delegates to
///
/// Routes are relative to [`api_url`](ApiTransport::api_url). Implementations
/// return the decoded response body regardless of HTTP status and make a
/// single attempt per call.
#[async_trait::async_trait]
pub trait ApiTransport: Send + Sync {
    /// Base URL including the `api/v0/` suffix
    fn api_url(&self) -> &str;

    async fn get(&self, route: &str, params: &QueryParams) -> Result<Value, LibreNmsError>;
    async fn post(&self, route: &str, body: &Value) -> Result<Value, LibreNmsError>;
    async fn patch(&self, route: &str, body: &Value) -> Result<Value, LibreNmsError>;
    async fn delete(&self, route: &str, body: Option<&Value>) -> Result<Value, LibreNmsError>;
}
