//! Switching endpoints: VLANs, links and the forwarding database

use super::LibreNmsClient;
use crate::common::query::QueryParams;
use crate::error::LibreNmsError;
use crate::transport::ApiTransport;
use serde_json::Value;

impl<T: ApiTransport> LibreNmsClient<T> {
    /// All VLANs across devices
    pub async fn list_vlans(&self) -> Result<Value, LibreNmsError> {
        self.transport.get("resources/vlans", &QueryParams::new()).await
    }

    /// Neighbour links discovered via CDP/LLDP
    pub async fn list_links(&self) -> Result<Value, LibreNmsError> {
        self.transport.get("resources/links", &QueryParams::new()).await
    }

    /// A single neighbour link by id
    pub async fn get_link(&self, id: u64) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("resources/links/{id}"), &QueryParams::new())
            .await
    }

    /// FDB entries, optionally only those for one MAC address
    pub async fn list_fdb(&self, mac: Option<&str>) -> Result<Value, LibreNmsError> {
        let route = match mac {
            Some(mac) => format!("resources/fdb/{mac}"),
            None => "resources/fdb".to_string(),
        };
        self.transport.get(&route, &QueryParams::new()).await
    }
}
