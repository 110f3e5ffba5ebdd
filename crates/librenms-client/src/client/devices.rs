//! Device endpoints (`devices/...`, `inventory/...`)

use super::{LibreNmsClient, column_params};
use crate::common::query::QueryParams;
use crate::error::LibreNmsError;
use crate::models::{DeviceListing, InventoryFilter, Maintenance, NewDevice};
use crate::transport::ApiTransport;
use serde_json::{Value, json};

impl<T: ApiTransport> LibreNmsClient<T> {
    /// List devices matching a filter or search
    ///
    /// # Arguments
    /// * `listing` - state filter or column search, see [`DeviceListing::from_parts`];
    ///   a search with a blank query fails validation without sending anything
    /// * `order` - optional sort column, e.g. `hostname`
    pub async fn list_devices(&self, listing: &DeviceListing, order: Option<&str>) -> Result<Value, LibreNmsError> {
        listing.validate()?;
        let params = listing.params().with("order", order);
        self.transport.get("devices", &params).await
    }

    /// Get details of a single device
    ///
    /// # Arguments
    /// * `hostname` - device hostname or ID
    pub async fn get_device(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}"), &QueryParams::new())
            .await
    }

    /// Add a device
    ///
    /// The device is validated before anything is sent.
    pub async fn add_device(&self, device: &NewDevice) -> Result<Value, LibreNmsError> {
        device.validate()?;
        self.transport.post("devices", &device.body()).await
    }

    /// Delete a device
    pub async fn delete_device(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport.delete(&format!("devices/{hostname}"), None).await
    }

    /// Update one or more columns of a device
    ///
    /// # Arguments
    /// * `hostname` - device hostname or ID
    /// * `fields` - `(column, value)` pairs, at least one
    pub async fn update_device_fields(
        &self,
        hostname: &str,
        fields: &[(&str, Value)],
    ) -> Result<Value, LibreNmsError> {
        if fields.is_empty() {
            return Err(LibreNmsError::missing("field"));
        }
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        let data: Vec<&Value> = fields.iter().map(|(_, value)| value).collect();

        self.transport
            .patch(&format!("devices/{hostname}"), &json!({ "field": names, "data": data }))
            .await
    }

    /// Rename a device
    pub async fn rename_device(&self, hostname: &str, new_hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .patch(&format!("devices/{hostname}/rename/{new_hostname}"), &json!({}))
            .await
    }

    /// Trigger a discovery run for a device
    pub async fn discover_device(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}/discover"), &QueryParams::new())
            .await
    }

    /// Availability percentages of a device over the standard periods
    pub async fn get_device_availability(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}/availability"), &QueryParams::new())
            .await
    }

    /// Outage history of a device
    pub async fn get_device_outages(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}/outages"), &QueryParams::new())
            .await
    }

    /// List the graph types available for a device
    pub async fn get_graphs(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}/graphs"), &QueryParams::new())
            .await
    }

    /// List health graphs, optionally narrowed to a sensor type and sensor
    ///
    /// A `sensor_id` is only meaningful together with a `health_type` and is
    /// ignored without one.
    pub async fn list_available_health_graphs(
        &self,
        hostname: &str,
        health_type: Option<&str>,
        sensor_id: Option<u64>,
    ) -> Result<Value, LibreNmsError> {
        let route = match (health_type, sensor_id) {
            (Some(kind), Some(id)) => format!("devices/{hostname}/health/{kind}/{id}"),
            (Some(kind), None) => format!("devices/{hostname}/health/{kind}"),
            (None, _) => format!("devices/{hostname}/health"),
        };
        self.transport.get(&route, &QueryParams::new()).await
    }

    /// List the ports of a device
    ///
    /// # Arguments
    /// * `hostname` - device hostname or ID
    /// * `columns` - port columns to return, default `ifName`
    pub async fn get_device_ports(&self, hostname: &str, columns: Option<&[&str]>) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}/ports"), &column_params(columns))
            .await
    }

    /// Port details for one interface of a device
    pub async fn get_port_stats_by_port_hostname(
        &self,
        hostname: &str,
        ifname: &str,
        columns: Option<&[&str]>,
    ) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}/ports/{ifname}"), &column_params(columns))
            .await
    }

    /// IP addresses configured on a device
    pub async fn get_device_ip_addresses(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}/ip"), &QueryParams::new())
            .await
    }

    /// Components discovered on a device
    pub async fn get_components(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}/components"), &QueryParams::new())
            .await
    }

    /// Port stacking relations (parent and child interfaces) of a device
    pub async fn get_port_stack(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}/port_stack"), &QueryParams::new())
            .await
    }

    /// VLANs configured on a device
    pub async fn get_device_vlans(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}/vlans"), &QueryParams::new())
            .await
    }

    /// Neighbour links (CDP, LLDP) seen by a device
    pub async fn list_device_links(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}/links"), &QueryParams::new())
            .await
    }

    /// Forwarding database entries of a device
    pub async fn get_device_fdb(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}/fdb"), &QueryParams::new())
            .await
    }

    /// Put a device into maintenance mode
    pub async fn maintenance_device(
        &self,
        hostname: &str,
        maintenance: &Maintenance,
    ) -> Result<Value, LibreNmsError> {
        self.transport
            .post(&format!("devices/{hostname}/maintenance"), &json!(maintenance))
            .await
    }

    /// Whether a device is currently under maintenance
    pub async fn device_under_maintenance(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("devices/{hostname}/maintenance"), &QueryParams::new())
            .await
    }

    /// Inventory entries of a device, filtered by class and parent
    pub async fn get_inventory(&self, hostname: &str, filter: &InventoryFilter) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("inventory/{hostname}"), &filter.params())
            .await
    }

    /// Full, unfiltered inventory of a device
    pub async fn get_inventory_for_device(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("inventory/{hostname}/all"), &QueryParams::new())
            .await
    }
}
