//! Routing endpoints: BGP, OSPF, VRF, IPsec and IP resources

use super::LibreNmsClient;
use crate::common::query::QueryParams;
use crate::error::LibreNmsError;
use crate::models::{BgpFilter, IpFamily};
use crate::transport::ApiTransport;
use serde_json::{Value, json};

impl<T: ApiTransport> LibreNmsClient<T> {
    /// List BGP sessions matching all set filter fields
    pub async fn list_bgp(&self, filter: &BgpFilter) -> Result<Value, LibreNmsError> {
        self.transport.get("bgp", &filter.params()).await
    }

    /// Get a BGP session by ID
    pub async fn get_bgp(&self, id: u64) -> Result<Value, LibreNmsError> {
        self.transport.get(&format!("bgp/{id}"), &QueryParams::new()).await
    }

    /// Set the description of a BGP session
    pub async fn edit_bgp_descr(&self, id: u64, description: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .post(&format!("bgp/{id}"), &json!({ "bgp_descr": description }))
            .await
    }

    /// BGP counters, optionally for a single device
    pub async fn list_cbgp(&self, hostname: Option<&str>) -> Result<Value, LibreNmsError> {
        let params = QueryParams::new().with("hostname", hostname);
        self.transport.get("routing/bgp/cbgp", &params).await
    }

    /// All IP addresses known to LibreNMS, optionally of one family
    pub async fn list_ip_addresses(&self, family: Option<IpFamily>) -> Result<Value, LibreNmsError> {
        let route = match family {
            Some(family) => format!("resources/ip/addresses/{}", family.as_str()),
            None => "resources/ip/addresses".to_string(),
        };
        self.transport.get(&route, &QueryParams::new()).await
    }

    /// All IP networks known to LibreNMS, optionally of one family
    pub async fn list_ip_networks(&self, family: Option<IpFamily>) -> Result<Value, LibreNmsError> {
        let route = match family {
            Some(family) => format!("resources/ip/networks/{}", family.as_str()),
            None => "resources/ip/networks".to_string(),
        };
        self.transport.get(&route, &QueryParams::new()).await
    }

    /// IP addresses inside a network
    pub async fn get_network_ip_addresses(&self, network_id: u64) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("resources/ip/networks/{network_id}/ip"), &QueryParams::new())
            .await
    }

    /// IPsec tunnels of a device
    pub async fn list_ipsec(&self, hostname: &str) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("routing/ipsec/data/{hostname}"), &QueryParams::new())
            .await
    }

    /// OSPF instances, optionally for one device
    pub async fn list_ospf(&self, hostname: Option<&str>) -> Result<Value, LibreNmsError> {
        let params = QueryParams::new().with("hostname", hostname);
        self.transport.get("ospf", &params).await
    }

    /// VRFs, optionally narrowed by device and name
    pub async fn list_vrf(&self, hostname: Option<&str>, vrf_name: Option<&str>) -> Result<Value, LibreNmsError> {
        let params = QueryParams::new()
            .with("hostname", hostname)
            .with("vrfname", vrf_name);
        self.transport.get("routing/vrf", &params).await
    }

    /// A single VRF by id
    pub async fn get_vrf(&self, id: u64) -> Result<Value, LibreNmsError> {
        self.transport
            .get(&format!("routing/vrf/{id}"), &QueryParams::new())
            .await
    }
}
