//! Mock transport for unit testing
//!
//! Records every request an endpoint method issues and answers with a canned
//! JSON body, so route and parameter construction can be checked without a
//! running LibreNMS instance.

use crate::common::query::QueryParams;
use crate::error::LibreNmsError;
use crate::transport::ApiTransport;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// HTTP method of a recorded request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// A request as seen by the transport
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub route: String,
    /// Query parameters after encoding (GET only)
    pub query: Vec<(String, String)>,
    /// JSON body (POST/PATCH, and DELETE when given)
    pub body: Option<Value>,
}

/// Mock transport for testing
///
/// Unless a response was registered for a `(method, route)` pair, every call
/// answers with `{"status": "ok"}`.
#[derive(Debug, Clone)]
pub struct MockTransport {
    api_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<HashMap<(Method, String), Value>>>,
}

impl MockTransport {
    /// Create a new mock transport
    pub fn new(base_url: &str) -> Self {
        Self {
            api_url: crate::common::api_url(base_url),
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Register the body returned for `method` on `route` (for test setup)
    pub fn respond(&self, method: Method, route: &str, body: Value) {
        lock(&self.responses).insert((method, route.to_string()), body);
    }

    /// All requests issued so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }

    fn record(&self, method: Method, route: &str, query: Vec<(String, String)>, body: Option<Value>) -> Value {
        lock(&self.requests).push(RecordedRequest {
            method,
            route: route.to_string(),
            query,
            body,
        });
        lock(&self.responses)
            .get(&(method, route.to_string()))
            .cloned()
            .unwrap_or_else(|| json!({ "status": "ok" }))
    }
}

// A poisoned lock only means another test thread panicked mid-record.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[async_trait::async_trait]
impl ApiTransport for MockTransport {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get(&self, route: &str, params: &QueryParams) -> Result<Value, LibreNmsError> {
        Ok(self.record(Method::Get, route, params.encode(), None))
    }

    async fn post(&self, route: &str, body: &Value) -> Result<Value, LibreNmsError> {
        Ok(self.record(Method::Post, route, Vec::new(), Some(body.clone())))
    }

    async fn patch(&self, route: &str, body: &Value) -> Result<Value, LibreNmsError> {
        Ok(self.record(Method::Patch, route, Vec::new(), Some(body.clone())))
    }

    async fn delete(&self, route: &str, body: Option<&Value>) -> Result<Value, LibreNmsError> {
        Ok(self.record(Method::Delete, route, Vec::new(), body.cloned()))
    }
}
