//! Unit tests for device endpoints

#[cfg(test)]
mod tests {
    use crate::mock::{Method, MockTransport};
    use crate::models::*;
    use crate::{LibreNmsClient, LibreNmsError};
    use serde_json::{Map, Value, json};

    fn client() -> (LibreNmsClient<MockTransport>, MockTransport) {
        let mock = MockTransport::new("http://test-librenms");
        (LibreNmsClient::with_transport(mock.clone()), mock)
    }

    fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[tokio::test]
    async fn test_list_devices_search() {
        let (client, mock) = client();

        let listing = DeviceListing::from_parts("os", Some("linux")).unwrap();
        client.list_devices(&listing, Some("hostname")).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.route, "devices");
        assert_eq!(
            request.query,
            query(&[("type", "os"), ("query", "linux"), ("order", "hostname")])
        );
    }

    #[tokio::test]
    async fn test_list_devices_filter_without_order() {
        let (client, mock) = client();

        client.list_devices(&DeviceListing::default(), None).await.unwrap();

        assert_eq!(mock.last_request().unwrap().query, query(&[("type", "all")]));
    }

    #[tokio::test]
    async fn test_list_devices_blank_search_does_not_send() {
        let (client, mock) = client();

        let err = client
            .list_devices(&DeviceListing::search(DeviceSearchType::Mac, ""), None)
            .await
            .unwrap_err();
        assert!(err.is_validation());

        let built = DeviceListing::Search { by: DeviceSearchType::Hostname, query: " ".to_string() };
        assert!(client.list_devices(&built, None).await.unwrap_err().is_validation());

        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_device_returns_body_unchanged() {
        let (client, mock) = client();
        let body = json!({ "status": "error", "message": "Device h1 does not exist" });
        mock.respond(Method::Get, "devices/h1", body.clone());

        let response = client.get_device("h1").await.unwrap();

        assert_eq!(response, body);
    }

    #[tokio::test]
    async fn test_add_device_posts_flat_body() {
        let (client, mock) = client();
        let mut fields = Map::new();
        fields.insert("community".into(), json!("public"));
        fields.insert("unexpected".into(), json!(1));

        let device = NewDevice::from_fields("h1", "snmpv2c", &fields).unwrap();
        client.add_device(&device).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.route, "devices");
        assert_eq!(
            request.body,
            Some(json!({ "hostname": "h1", "community": "public", "snmpver": "v2c" }))
        );
    }

    #[tokio::test]
    async fn test_add_device_invalid_does_not_send() {
        let (client, mock) = client();

        let err = client.add_device(&NewDevice::snmpv2c("h1", "")).await.unwrap_err();

        assert!(matches!(err, LibreNmsError::Validation(_)));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_delete_and_rename_device() {
        let (client, mock) = client();

        client.delete_device("h1").await.unwrap();
        client.rename_device("h1", "h2").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, Method::Delete);
        assert_eq!(requests[0].route, "devices/h1");
        assert_eq!(requests[0].body, None);
        assert_eq!(requests[1].method, Method::Patch);
        assert_eq!(requests[1].route, "devices/h1/rename/h2");
    }

    #[tokio::test]
    async fn test_update_device_fields() {
        let (client, mock) = client();

        client
            .update_device_fields("h1", &[("notes", json!("rack 4")), ("purpose", json!("core"))])
            .await
            .unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.route, "devices/h1");
        assert_eq!(
            request.body,
            Some(json!({ "field": ["notes", "purpose"], "data": ["rack 4", "core"] }))
        );
    }

    #[tokio::test]
    async fn test_update_device_fields_requires_a_field() {
        let (client, mock) = client();

        let err = client.update_device_fields("h1", &[]).await.unwrap_err();

        assert!(err.is_validation());
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_health_graph_routes() {
        let (client, mock) = client();

        client.list_available_health_graphs("h1", None, Some(3)).await.unwrap();
        client.list_available_health_graphs("h1", Some("device_temperature"), None).await.unwrap();
        client.list_available_health_graphs("h1", Some("device_temperature"), Some(3)).await.unwrap();

        let routes: Vec<String> = mock.requests().into_iter().map(|r| r.route).collect();
        assert_eq!(
            routes,
            [
                "devices/h1/health",
                "devices/h1/health/device_temperature",
                "devices/h1/health/device_temperature/3",
            ]
        );
    }

    #[tokio::test]
    async fn test_device_ports_joins_columns() {
        let (client, mock) = client();

        client.get_device_ports("h1", Some(&["ifName", "ifAlias"][..])).await.unwrap();
        client.get_port_stats_by_port_hostname("h1", "eth0", None).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].route, "devices/h1/ports");
        assert_eq!(requests[0].query, query(&[("columns", "ifName,ifAlias")]));
        assert_eq!(requests[1].route, "devices/h1/ports/eth0");
        assert!(requests[1].query.is_empty());
    }

    #[tokio::test]
    async fn test_device_passthrough_routes() {
        let (client, mock) = client();

        client.discover_device("h1").await.unwrap();
        client.get_device_availability("h1").await.unwrap();
        client.get_device_outages("h1").await.unwrap();
        client.get_graphs("h1").await.unwrap();
        client.get_device_ip_addresses("h1").await.unwrap();
        client.get_components("h1").await.unwrap();
        client.get_port_stack("h1").await.unwrap();
        client.get_device_vlans("h1").await.unwrap();
        client.list_device_links("h1").await.unwrap();
        client.get_device_fdb("h1").await.unwrap();
        client.device_under_maintenance("h1").await.unwrap();
        client.get_inventory_for_device("h1").await.unwrap();

        let routes: Vec<String> = mock.requests().into_iter().map(|r| r.route).collect();
        assert_eq!(
            routes,
            [
                "devices/h1/discover",
                "devices/h1/availability",
                "devices/h1/outages",
                "devices/h1/graphs",
                "devices/h1/ip",
                "devices/h1/components",
                "devices/h1/port_stack",
                "devices/h1/vlans",
                "devices/h1/links",
                "devices/h1/fdb",
                "devices/h1/maintenance",
                "inventory/h1/all",
            ]
        );
        assert!(mock.requests().iter().all(|r| r.method == Method::Get));
    }

    #[tokio::test]
    async fn test_maintenance_device() {
        let (client, mock) = client();
        let maintenance = Maintenance {
            title: Some("Firmware upgrade".to_string()),
            ..Maintenance::new("1:30")
        };

        client.maintenance_device("h1", &maintenance).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.route, "devices/h1/maintenance");
        assert_eq!(
            request.body,
            Some(json!({ "title": "Firmware upgrade", "duration": "1:30" }))
        );
    }

    #[tokio::test]
    async fn test_get_inventory_filter() {
        let (client, mock) = client();
        let filter = InventoryFilter {
            ent_physical_class: Some("sensor".to_string()),
            ent_physical_contained_in: Some(0),
        };

        client.get_inventory("h1", &filter).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.route, "inventory/h1");
        assert_eq!(
            request.query,
            query(&[("entPhysicalClass", "sensor"), ("entPhysicalContainedIn", "0")])
        );
    }

    #[tokio::test]
    async fn test_default_mock_response() {
        let (client, _mock) = client();

        let response: Value = client.get_device("anything").await.unwrap();

        assert_eq!(response, json!({ "status": "ok" }));
    }
}
