//! Location endpoints

use super::LibreNmsClient;
use crate::common::query::QueryParams;
use crate::error::LibreNmsError;
use crate::models::{LocationUpdate, Maintenance, NewLocation};
use crate::transport::ApiTransport;
use serde_json::{Value, json};

impl<T: ApiTransport> LibreNmsClient<T> {
    /// All locations
    pub async fn list_locations(&self) -> Result<Value, LibreNmsError> {
        self.transport.get("resources/locations", &QueryParams::new()).await
    }

    /// Get a location by name or ID
    pub async fn get_location(&self, location: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("location/{location}"), &QueryParams::new())
            .await
    }

    /// Create a location
    ///
    /// Fails with `Validation` when the name is blank.
    pub async fn add_location(&self, location: &NewLocation) -> Result<Value, LibreNmsError> {
        if location.location.trim().is_empty() {
            return Err(LibreNmsError::missing("location"));
        }
        self.transport.post("locations", &json!(location)).await
    }

    /// Change the coordinates of a location
    pub async fn edit_location(&self, location: &str, update: &LocationUpdate) -> Result<Value, LibreNmsError> {
        if update.is_empty() {
            return Err(LibreNmsError::Validation(format!(
                "no fields to update for location {location}"
            )));
        }
        self.transport
            .patch(&format!("locations/{location}"), &json!(update))
            .await
    }

    /// Delete a location by name
    pub async fn delete_location(&self, location: &str) -> Result<Value, LibreNmsError> {
        self.transport.delete(&format!("locations/{location}"), None).await
    }

    /// Put every device at a location into maintenance mode
    pub async fn maintenance_location(
        &self,
        location: &str,
        maintenance: &Maintenance,
    ) -> Result<Value, LibreNmsError> {
        self.transport
            .post(&format!("locations/{location}/maintenance"), &json!(maintenance))
            .await
    }
}
