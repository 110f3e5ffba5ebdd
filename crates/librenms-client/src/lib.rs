//! LibreNMS REST API Client
//!
//! A Rust client library for the LibreNMS REST API (`/api/v0/`).
//! Wraps device, port, device group, location, routing and switching
//! endpoints one-to-one; responses are returned as decoded JSON.
//!
//! # Example
//!
//! ```no_run
//! use librenms_client::{DeviceListing, LibreNmsClient, NewDevice, PortSearchField};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = LibreNmsClient::new("https://librenms.example.com", "your-api-token", true)?;
//!
//! // List devices that are down
//! let listing = DeviceListing::from_parts("down", None)?;
//! let devices = client.list_devices(&listing, Some("hostname")).await?;
//!
//! // Search ports by description
//! let ports = client
//!     .search_ports(PortSearchField::IfAlias, "uplink", Some(&["ifName", "ifAlias"][..]))
//!     .await?;
//!
//! // Add an SNMPv2c device
//! let created = client.add_device(&NewDevice::snmpv2c("core-sw-01", "public")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Argument checks fail with [`LibreNmsError::Validation`] before any request
//! is sent. Transport faults surface as [`LibreNmsError::Transport`]. HTTP
//! status codes are not interpreted: whatever JSON LibreNMS returns is handed
//! back.

pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::LibreNmsClient;
pub use common::HttpClient;
pub use common::query::{ParamValue, QueryParams};
pub use config::LibreNmsConfig;
pub use error::LibreNmsError;
pub use models::*;
pub use transport::ApiTransport;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockTransport;
