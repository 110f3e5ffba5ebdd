//! Port endpoints (`ports/...`)

use super::{LibreNmsClient, column_params};
use crate::common::query::QueryParams;
use crate::error::LibreNmsError;
use crate::models::PortSearchField;
use crate::transport::ApiTransport;
use serde_json::{Value, json};

impl<T: ApiTransport> LibreNmsClient<T> {
    /// List all ports
    ///
    /// # Arguments
    /// * `columns` - port columns to return, e.g. `["ifName", "ifAlias"]`
    pub async fn get_all_ports(&self, columns: Option<&[&str]>) -> Result<Value, LibreNmsError> {
        self.transport.get("ports", &column_params(columns)).await
    }

    /// Search ports by ifAlias, ifDescr and/or ifName
    ///
    /// Callers holding the field as a string can parse it first:
    /// `"ifAlias".parse::<PortSearchField>()?` fails with a validation error
    /// for anything outside the allowed set.
    pub async fn search_ports(
        &self,
        field: PortSearchField,
        search: &str,
        columns: Option<&[&str]>,
    ) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&field.route(search), &column_params(columns))
            .await
    }

    /// Ports whose FDB entries contain a MAC address
    ///
    /// # Arguments
    /// * `mac` - MAC address in any notation LibreNMS understands
    /// * `first_only` - return only the most likely port (`filter=first`)
    pub async fn ports_with_associated_mac(&self, mac: &str, first_only: bool) -> Result<Value, LibreNmsError> {
        let params = QueryParams::new().with("filter", first_only.then_some("first"));
        self.transport.get(&format!("ports/mac/{mac}"), &params).await
    }

    /// Returns port information given a specific port ID
    pub async fn get_port_info(&self, port_id: u64) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("ports/{port_id}"), &QueryParams::new())
            .await
    }

    /// IP addresses configured on a port
    pub async fn get_port_ip_info(&self, port_id: u64) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("ports/{port_id}/ip"), &QueryParams::new())
            .await
    }

    /// ifAlias of a port
    pub async fn get_port_description(&self, port_id: u64) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("ports/{port_id}/description"), &QueryParams::new())
            .await
    }

    /// Set the port description (ifAlias); an empty string resets it
    pub async fn update_port_description(&self, port_id: u64, description: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .patch(
                &format!("ports/{port_id}/description"),
                &json!({ "description": description }),
            )
            .await
    }
}
