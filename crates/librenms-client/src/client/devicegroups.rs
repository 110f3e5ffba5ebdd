//! Device group endpoints (`devicegroups/...`)

use super::LibreNmsClient;
use crate::common::query::QueryParams;
use crate::error::LibreNmsError;
use crate::models::{DeviceGroupUpdate, Maintenance, NewDeviceGroup};
use crate::transport::ApiTransport;
use serde_json::{Value, json};

impl<T: ApiTransport> LibreNmsClient<T> {
    /// All device groups
    pub async fn get_devicegroups(&self) -> Result<Value, LibreNmsError> {
        self.transport.get("devicegroups", &QueryParams::new()).await
    }

    /// Create a static or dynamic device group
    pub async fn add_devicegroup(&self, group: &NewDeviceGroup) -> Result<Value, LibreNmsError> {
        if group.name.trim().is_empty() {
            return Err(LibreNmsError::missing("name"));
        }
        self.transport.post("devicegroups", &group.body()).await
    }

    /// Update name, description or membership of a device group
    pub async fn update_devicegroup(&self, name: &str, update: &DeviceGroupUpdate) -> Result<Value, LibreNmsError> {
        if update.is_empty() {
            return Err(LibreNmsError::Validation(format!(
                "no fields to update for device group {name}"
            )));
        }
        self.transport
            .patch(&format!("devicegroups/{name}"), &update.body())
            .await
    }

    /// Delete a device group by name
    pub async fn delete_devicegroup(&self, name: &str) -> Result<Value, LibreNmsError> {
        self.transport.delete(&format!("devicegroups/{name}"), None).await
    }

    /// Devices in a group; `full` returns complete device records instead of IDs
    pub async fn get_devices_by_group(&self, name: &str, full: bool) -> Result<Value, LibreNmsError> {
        let params = QueryParams::new().with("full", full.then_some("1"));
        self.transport.get(&format!("devicegroups/{name}"), &params).await
    }

    /// Put every device of a group into maintenance mode
    pub async fn maintenance_devicegroup(
        &self,
        name: &str,
        maintenance: &Maintenance,
    ) -> Result<Value, LibreNmsError> {
        self.transport
            .post(&format!("devicegroups/{name}/maintenance"), &json!(maintenance))
            .await
    }
}
