//! Wire-level tests for the HTTP verb primitives
//!
//! Runs the real reqwest transport against a local mock server.

use httpmock::Method::{DELETE, GET, PATCH, POST};
use httpmock::MockServer;
use librenms_client::{
    ApiTransport, DeviceListing, HttpClient, LibreNmsClient, LibreNmsConfig, LibreNmsError,
    NewDevice, NewDeviceGroup, PortSearchField, QueryParams,
};
use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};

const TOKEN: &str = "0123456789abcdef";

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("librenms_client=debug")
        .with_test_writer()
        .try_init();
}

/// Log sink shared between a scoped subscriber and the test body
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn client_for(server: &MockServer) -> LibreNmsClient {
    init_logging();
    LibreNmsClient::new(&server.base_url(), TOKEN, true).expect("Failed to create client")
}

#[tokio::test]
async fn should_send_auth_header_under_api_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v0/ports/42")
                .header("x-auth-token", TOKEN);
            then.status(200)
                .json_body(json!({ "status": "ok", "port": [{ "port_id": 42 }] }));
        })
        .await;

    let client = client_for(&server);
    let response = client.get_port_info(42).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response["port"][0]["port_id"], json!(42));
}

#[tokio::test]
async fn should_accept_base_url_with_trailing_slash() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v0/system");
            then.status(200).json_body(json!({ "status": "ok", "system": [] }));
        })
        .await;

    let config = LibreNmsConfig::new(server.url("/"), TOKEN);
    let client = LibreNmsClient::from_config(&config).unwrap();
    client.system().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn should_join_list_query_params_with_commas() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v0/ports/search/ifAlias/uplink")
                .query_param("columns", "ifName,ifAlias");
            then.status(200).json_body(json!({ "status": "ok", "ports": [] }));
        })
        .await;

    let client = client_for(&server);
    client
        .search_ports(PortSearchField::IfAlias, "uplink", Some(&["ifName", "ifAlias"][..]))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn should_send_device_listing_params() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v0/devices")
                .query_param("type", "mac")
                .query_param("query", "001122334455");
            then.status(200).json_body(json!({ "status": "ok", "devices": [] }));
        })
        .await;

    let client = client_for(&server);
    let listing = DeviceListing::from_parts("mac", Some("001122334455")).unwrap();
    client.list_devices(&listing, None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn should_post_json_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v0/devices")
                .header("x-auth-token", TOKEN)
                .json_body(json!({ "hostname": "h1", "community": "public", "snmpver": "v2c" }));
            then.status(200).json_body(json!({ "status": "ok", "message": "Device h1 has been added successfully" }));
        })
        .await;

    let client = client_for(&server);
    let response = client.add_device(&NewDevice::snmpv2c("h1", "public")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response["status"], json!("ok"));
}

#[tokio::test]
async fn should_patch_and_delete() {
    let server = MockServer::start_async().await;
    let patch = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/api/v0/ports/7/description")
                .json_body(json!({ "description": "uplink" }));
            then.status(200).json_body(json!({ "status": "ok" }));
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/v0/devicegroups/core");
            then.status(200).json_body(json!({ "status": "ok" }));
        })
        .await;

    let client = client_for(&server);
    client.update_port_description(7, "uplink").await.unwrap();
    client.delete_devicegroup("core").await.unwrap();

    patch.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn should_return_error_shaped_body_without_interpreting_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v0/devices/missing");
            then.status(404)
                .json_body(json!({ "status": "error", "message": "Device missing does not exist" }));
        })
        .await;

    let client = client_for(&server);
    let response = client.get_device("missing").await.unwrap();

    assert_eq!(response["status"], json!("error"));
}

#[tokio::test]
async fn should_fail_with_transport_error_on_non_json_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v0/system");
            then.status(502).body("<html>Bad Gateway</html>");
        })
        .await;

    let client = client_for(&server);
    let err = client.system().await.unwrap_err();

    assert!(matches!(err, LibreNmsError::Transport(_)));
}

#[tokio::test]
async fn should_fail_with_transport_error_when_unreachable() {
    init_logging();
    let client = LibreNmsClient::new("http://127.0.0.1:1", TOKEN, false).unwrap();

    let err = client.system().await.unwrap_err();

    assert!(matches!(err, LibreNmsError::Transport(_)));
    assert!(!err.is_validation());
}

#[tokio::test]
async fn should_not_call_server_on_validation_failure() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.path_contains("/api/v0/");
            then.status(200).json_body(json!({ "status": "ok" }));
        })
        .await;

    let client = client_for(&server);
    let group = NewDeviceGroup::from_fields("g", "static", None, None, None);
    assert!(group.unwrap_err().is_validation());
    let err = client.add_device(&NewDevice::snmpv2c("", "public")).await.unwrap_err();
    assert!(err.is_validation());

    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn should_send_delete_body_when_given() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/api/v0/devices/h1/components")
                .header("x-auth-token", TOKEN)
                .json_body(json!({ "ids": [1, 2] }));
            then.status(200).json_body(json!({ "status": "ok" }));
        })
        .await;

    init_logging();
    let http = HttpClient::new(&server.base_url(), TOKEN.to_string(), true).unwrap();
    let response = http
        .delete("devices/h1/components", Some(&json!({ "ids": [1, 2] })))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response["status"], json!("ok"));
}

#[tokio::test]
async fn should_not_log_credentials_from_request_bodies() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path_contains("/api/v0/");
            then.status(200).json_body(json!({ "status": "ok" }));
        })
        .await;

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("librenms_client=debug")
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let http = HttpClient::new(&server.base_url(), TOKEN.to_string(), true).unwrap();
    http.post("devices", &json!({ "hostname": "h1", "community": "TOPSECRETCOMMUNITY" }))
        .await
        .unwrap();
    http.patch("devices/h1", &json!({ "field": ["authpass"], "data": ["V3AUTHPASS"] }))
        .await
        .unwrap();
    http.delete("devices/h1", Some(&json!({ "cryptopass": "V3CRYPTOPASS" })))
        .await
        .unwrap();
    http.get("system", &QueryParams::new()).await.unwrap();

    let output = logs.contents();
    assert!(output.contains("POST"));
    assert!(output.contains("/api/v0/devices"));
    assert!(output.contains("community"));
    assert!(!output.contains("TOPSECRETCOMMUNITY"));
    assert!(!output.contains("V3AUTHPASS"));
    assert!(!output.contains("V3CRYPTOPASS"));
    assert!(!output.contains(TOKEN));
}
