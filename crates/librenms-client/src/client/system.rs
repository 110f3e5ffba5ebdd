//! System endpoint

use super::LibreNmsClient;
use crate::common::query::QueryParams;
use crate::error::LibreNmsError;
use crate::transport::ApiTransport;
use serde_json::Value;

impl<T: ApiTransport> LibreNmsClient<T> {
    /// Version and build information of the LibreNMS instance
    ///
    /// Cheap and authenticated, so it doubles as a token check.
    pub async fn system(&self) -> Result<Value, LibreNmsError> {
        self.transport.get("system", &QueryParams::new()).await
    }
}
