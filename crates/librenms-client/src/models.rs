//! LibreNMS API request models
//!
//! Responses are passed through as `serde_json::Value`; only the request side
//! is typed. Each model that can be built from loosely typed input (strings,
//! JSON maps) validates it up front, so a bad combination never reaches the
//! network.

use crate::common::query::QueryParams;
use crate::error::LibreNmsError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Port field searched by `search_ports`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortSearchField {
    /// Search ifAlias, ifDescr and ifName at once
    #[default]
    All,
    /// `ifAlias` only
    IfAlias,
    /// `ifDescr` only
    IfDescr,
    /// `ifName` only
    IfName,
}

impl PortSearchField {
    /// Accepted string forms
    pub const ALLOWED: [&'static str; 4] = ["all", "ifAlias", "ifDescr", "ifName"];

    /// Wire value of the field
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::IfAlias => "ifAlias",
            Self::IfDescr => "ifDescr",
            Self::IfName => "ifName",
        }
    }

    /// Route for a search on this field
    pub fn route(self, search: &str) -> String {
        match self {
            Self::All => format!("ports/search/{search}"),
            field => format!("ports/search/{}/{search}", field.as_str()),
        }
    }
}

impl FromStr for PortSearchField {
    type Err = LibreNmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "ifAlias" => Ok(Self::IfAlias),
            "ifDescr" => Ok(Self::IfDescr),
            "ifName" => Ok(Self::IfName),
            other => Err(LibreNmsError::Validation(format!(
                "invalid port search field '{other}', expected one of {:?}",
                Self::ALLOWED
            ))),
        }
    }
}

impl fmt::Display for PortSearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device listing types that take no query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceFilter {
    #[default]
    All,
    /// Devices not ignored or disabled
    Active,
    /// Devices flagged as ignored
    Ignored,
    /// Devices reported up
    Up,
    /// Devices reported down
    Down,
    /// Devices with polling disabled
    Disabled,
}

impl DeviceFilter {
    /// Accepted string forms
    pub const ALLOWED: [&'static str; 6] = ["all", "active", "ignored", "up", "down", "disabled"];

    /// Wire value of the `type` parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Ignored => "ignored",
            Self::Up => "up",
            Self::Down => "down",
            Self::Disabled => "disabled",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "ignored" => Some(Self::Ignored),
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }
}

/// Device listing types that must be combined with a query string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceSearchType {
    /// Operating system
    Os,
    /// MAC address of any port
    Mac,
    /// IPv4 address of any port
    Ipv4,
    /// IPv6 address of any port
    Ipv6,
    /// Location name
    Location,
    /// Location id
    LocationId,
    /// Hostname
    Hostname,
    /// SNMP sysName
    SysName,
    /// Display name
    Display,
    /// Device id
    DeviceId,
    /// Device type, e.g. `server` or `network`
    Type,
    /// Serial number
    Serial,
    /// OS version
    Version,
    /// Hardware model
    Hardware,
    /// Feature string
    Features,
}

impl DeviceSearchType {
    /// Accepted string forms
    pub const ALLOWED: [&'static str; 15] = [
        "os",
        "mac",
        "ipv4",
        "ipv6",
        "location",
        "location_id",
        "hostname",
        "sysName",
        "display",
        "device_id",
        "type",
        "serial",
        "version",
        "hardware",
        "features",
    ];

    /// Wire value of the `type` parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Os => "os",
            Self::Mac => "mac",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Location => "location",
            Self::LocationId => "location_id",
            Self::Hostname => "hostname",
            Self::SysName => "sysName",
            Self::Display => "display",
            Self::DeviceId => "device_id",
            Self::Type => "type",
            Self::Serial => "serial",
            Self::Version => "version",
            Self::Hardware => "hardware",
            Self::Features => "features",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "os" => Some(Self::Os),
            "mac" => Some(Self::Mac),
            "ipv4" => Some(Self::Ipv4),
            "ipv6" => Some(Self::Ipv6),
            "location" => Some(Self::Location),
            "location_id" => Some(Self::LocationId),
            "hostname" => Some(Self::Hostname),
            "sysName" => Some(Self::SysName),
            "display" => Some(Self::Display),
            "device_id" => Some(Self::DeviceId),
            "type" => Some(Self::Type),
            "serial" => Some(Self::Serial),
            "version" => Some(Self::Version),
            "hardware" => Some(Self::Hardware),
            "features" => Some(Self::Features),
            _ => None,
        }
    }
}

/// What `list_devices` returns: a state filter, or a search on one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceListing {
    Filter(DeviceFilter),
    Search { by: DeviceSearchType, query: String },
}

impl Default for DeviceListing {
    fn default() -> Self {
        Self::Filter(DeviceFilter::All)
    }
}

impl DeviceListing {
    /// Build a listing from the raw `type` and `query` values
    ///
    /// Filter types must come without a query, search types with a
    /// non-empty one.
    pub fn from_parts(device_type: &str, query: Option<&str>) -> Result<Self, LibreNmsError> {
        let query = query.filter(|q| !q.is_empty());

        if let Some(filter) = DeviceFilter::parse(device_type) {
            return match query {
                None => Ok(Self::Filter(filter)),
                Some(_) => Err(LibreNmsError::Validation(format!(
                    "device type '{device_type}' is a filter and cannot be combined with a query"
                ))),
            };
        }

        if let Some(by) = DeviceSearchType::parse(device_type) {
            return match query {
                Some(query) => Ok(Self::Search { by, query: query.to_string() }),
                None => Err(LibreNmsError::Validation(format!(
                    "device type '{device_type}' is a search and requires a query"
                ))),
            };
        }

        Err(LibreNmsError::Validation(format!(
            "invalid device type '{device_type}', expected one of {:?} or {:?}",
            DeviceFilter::ALLOWED,
            DeviceSearchType::ALLOWED
        )))
    }

    /// Search on `by` for `query`
    pub fn search(by: DeviceSearchType, query: impl Into<String>) -> Self {
        Self::Search { by, query: query.into() }
    }

    /// Reject a search without a query, however the listing was built
    pub fn validate(&self) -> Result<(), LibreNmsError> {
        match self {
            Self::Search { by, query } if query.trim().is_empty() => Err(LibreNmsError::Validation(
                format!("device type '{}' is a search and requires a query", by.as_str()),
            )),
            _ => Ok(()),
        }
    }

    pub(crate) fn params(&self) -> QueryParams {
        match self {
            Self::Filter(filter) => QueryParams::new().with("type", filter.as_str()),
            Self::Search { by, query } => QueryParams::new()
                .with("type", by.as_str())
                .with("query", query.as_str()),
        }
    }
}

/// IP address family segment used by the `resources/ip` routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFamily {
    /// `ipv4`
    Ipv4,
    /// `ipv6`
    Ipv6,
}

impl IpFamily {
    /// Route segment for the family
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }
}

/// SNMPv3 authentication algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAlgo {
    /// `MD5`
    Md5,
    /// `SHA`
    Sha,
    /// `SHA-224`
    Sha224,
    /// `SHA-256`
    Sha256,
    /// `SHA-384`
    Sha384,
    /// `SHA-512`
    Sha512,
}

impl AuthAlgo {
    /// Wire value of `authalgo`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha => "SHA",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }
}

impl FromStr for AuthAlgo {
    type Err = LibreNmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MD5" => Ok(Self::Md5),
            "SHA" => Ok(Self::Sha),
            "SHA-224" => Ok(Self::Sha224),
            "SHA-256" => Ok(Self::Sha256),
            "SHA-384" => Ok(Self::Sha384),
            "SHA-512" => Ok(Self::Sha512),
            _ => Err(LibreNmsError::Validation(format!("invalid authalgo '{s}'"))),
        }
    }
}

/// SNMPv3 privacy algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoAlgo {
    /// `AES`
    Aes,
    /// `DES`
    Des,
    /// `AES-192`
    Aes192,
    /// `AES-256`
    Aes256,
    /// `AES-192-C`
    Aes192C,
    /// `AES-256-C`
    Aes256C,
}

impl CryptoAlgo {
    /// Wire value of `cryptoalgo`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aes => "AES",
            Self::Des => "DES",
            Self::Aes192 => "AES-192",
            Self::Aes256 => "AES-256",
            Self::Aes192C => "AES-192-C",
            Self::Aes256C => "AES-256-C",
        }
    }
}

impl FromStr for CryptoAlgo {
    type Err = LibreNmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AES" => Ok(Self::Aes),
            "DES" => Ok(Self::Des),
            "AES-192" => Ok(Self::Aes192),
            "AES-256" => Ok(Self::Aes256),
            "AES-192-C" => Ok(Self::Aes192C),
            "AES-256-C" => Ok(Self::Aes256C),
            _ => Err(LibreNmsError::Validation(format!("invalid cryptoalgo '{s}'"))),
        }
    }
}

/// SNMPv3 security level with the credentials each level needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnmpV3Security {
    /// Username only
    NoAuthNoPriv {
        authname: String,
    },
    /// Authentication without encryption
    AuthNoPriv {
        authname: String,
        authpass: String,
        authalgo: AuthAlgo,
    },
    /// Authentication and encryption
    AuthPriv {
        authname: String,
        authpass: String,
        authalgo: AuthAlgo,
        cryptopass: String,
        cryptoalgo: CryptoAlgo,
    },
}

impl SnmpV3Security {
    /// Wire value of `authlevel`
    pub fn authlevel(&self) -> &'static str {
        match self {
            Self::NoAuthNoPriv { .. } => "noAuthNoPriv",
            Self::AuthNoPriv { .. } => "authNoPriv",
            Self::AuthPriv { .. } => "authPriv",
        }
    }

    fn write(&self, body: &mut Map<String, Value>) {
        body.insert("authlevel".into(), json!(self.authlevel()));
        match self {
            Self::NoAuthNoPriv { authname } => {
                body.insert("authname".into(), json!(authname));
            }
            Self::AuthNoPriv { authname, authpass, authalgo } => {
                body.insert("authname".into(), json!(authname));
                body.insert("authpass".into(), json!(authpass));
                body.insert("authalgo".into(), json!(authalgo.as_str()));
            }
            Self::AuthPriv { authname, authpass, authalgo, cryptopass, cryptoalgo } => {
                body.insert("authname".into(), json!(authname));
                body.insert("authpass".into(), json!(authpass));
                body.insert("authalgo".into(), json!(authalgo.as_str()));
                body.insert("cryptopass".into(), json!(cryptopass));
                body.insert("cryptoalgo".into(), json!(cryptoalgo.as_str()));
            }
        }
    }
}

/// How LibreNMS should monitor a newly added device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitoringMethod {
    /// Ping only, SNMP disabled
    Icmp {
        os: Option<String>,
        hardware: Option<String>,
        sys_name: Option<String>,
    },
    /// SNMP v1 with a community string
    SnmpV1 { community: String },
    /// SNMP v2c with a community string
    SnmpV2c { community: String },
    /// SNMP v3 with user based security
    SnmpV3(SnmpV3Security),
}

impl MonitoringMethod {
    /// Device type name accepted by [`NewDevice::from_fields`]
    pub fn device_type(&self) -> &'static str {
        match self {
            Self::Icmp { .. } => "icmp",
            Self::SnmpV1 { .. } => "snmpv1",
            Self::SnmpV2c { .. } => "snmpv2c",
            Self::SnmpV3(_) => "snmpv3",
        }
    }

    /// Value of the `snmpver` body field, `None` for ICMP-only devices
    pub fn snmpver(&self) -> Option<&'static str> {
        match self {
            Self::Icmp { .. } => None,
            Self::SnmpV1 { .. } => Some("v1"),
            Self::SnmpV2c { .. } => Some("v2c"),
            Self::SnmpV3(_) => Some("v3"),
        }
    }
}

/// Settings shared by every monitoring method
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceOptions {
    pub display: Option<String>,
    /// SNMP port, ignored for ICMP-only devices
    pub port: Option<u16>,
    /// SNMP transport (`udp`, `tcp`, `udp6`, `tcp6`), ignored for ICMP-only devices
    pub transport: Option<String>,
    pub port_association_mode: Option<String>,
    pub poller_group: Option<u32>,
    pub location: Option<String>,
    pub location_id: Option<u64>,
    pub force_add: Option<bool>,
}

/// Body of an `add_device` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDevice {
    pub hostname: String,
    pub method: MonitoringMethod,
    pub options: DeviceOptions,
}

const DEVICE_COMMON_FIELDS: &[&str] = &[
    "display",
    "port_association_mode",
    "poller_group",
    "location",
    "location_id",
    "force_add",
];
const SNMP_FIELDS: &[&str] = &["port", "transport"];
const ICMP_FIELDS: &[&str] = &["os", "hardware", "sysName"];
const SNMPV3_SECURITY_FIELDS: &[&str] = &["authpass", "authalgo", "cryptopass", "cryptoalgo"];

/// Required and optional field names for a device type
fn device_schema(device_type: &str) -> Option<(Vec<&'static str>, Vec<&'static str>)> {
    let mut optional: Vec<&'static str> = DEVICE_COMMON_FIELDS.to_vec();
    let required = match device_type {
        "icmp" => {
            optional.extend_from_slice(ICMP_FIELDS);
            Vec::new()
        }
        "snmpv1" | "snmpv2c" => {
            optional.extend_from_slice(SNMP_FIELDS);
            vec!["community"]
        }
        "snmpv3" => {
            optional.extend_from_slice(SNMP_FIELDS);
            optional.extend_from_slice(SNMPV3_SECURITY_FIELDS);
            vec!["authlevel", "authname"]
        }
        _ => return None,
    };
    Some((required, optional))
}

impl NewDevice {
    /// Device with default options
    pub fn new(hostname: impl Into<String>, method: MonitoringMethod) -> Self {
        Self {
            hostname: hostname.into(),
            method,
            options: DeviceOptions::default(),
        }
    }

    /// SNMPv2c device with the given community
    pub fn snmpv2c(hostname: impl Into<String>, community: impl Into<String>) -> Self {
        Self::new(hostname, MonitoringMethod::SnmpV2c { community: community.into() })
    }

    /// ICMP-only device
    pub fn icmp(hostname: impl Into<String>) -> Self {
        Self::new(
            hostname,
            MonitoringMethod::Icmp { os: None, hardware: None, sys_name: None },
        )
    }

    #[must_use]
    pub fn with_options(mut self, options: DeviceOptions) -> Self {
        self.options = options;
        self
    }

    /// Build a device from a device type name and loosely typed fields
    ///
    /// Every required field of `device_type` must be present. Fields that are
    /// neither required nor optional for that type are dropped with a warning.
    pub fn from_fields(
        hostname: &str,
        device_type: &str,
        fields: &Map<String, Value>,
    ) -> Result<Self, LibreNmsError> {
        let (required, optional) = device_schema(device_type).ok_or_else(|| {
            LibreNmsError::Validation(format!(
                "invalid device type '{device_type}', expected one of icmp, snmpv1, snmpv2c, snmpv3"
            ))
        })?;

        if let Some(name) = required.iter().find(|name| !fields.contains_key(**name)) {
            return Err(LibreNmsError::missing(name));
        }

        let known = |key: &str| required.iter().chain(optional.iter()).any(|name| *name == key);
        let mut accepted = Map::new();
        for (key, value) in fields {
            if known(key) {
                accepted.insert(key.clone(), value.clone());
            } else {
                warn!("Dropping field '{}' not accepted for {} devices", key, device_type);
            }
        }

        let method = match device_type {
            "icmp" => MonitoringMethod::Icmp {
                os: string_field(&accepted, "os")?,
                hardware: string_field(&accepted, "hardware")?,
                sys_name: string_field(&accepted, "sysName")?,
            },
            "snmpv1" => MonitoringMethod::SnmpV1 {
                community: required_string(&accepted, "community")?,
            },
            "snmpv2c" => MonitoringMethod::SnmpV2c {
                community: required_string(&accepted, "community")?,
            },
            _ => MonitoringMethod::SnmpV3(snmpv3_security(&accepted)?),
        };

        let options = DeviceOptions {
            display: string_field(&accepted, "display")?,
            port: number_field(&accepted, "port")?,
            transport: string_field(&accepted, "transport")?,
            port_association_mode: string_field(&accepted, "port_association_mode")?,
            poller_group: number_field(&accepted, "poller_group")?,
            location: string_field(&accepted, "location")?,
            location_id: number_field(&accepted, "location_id")?,
            force_add: bool_field(&accepted, "force_add")?,
        };

        let device = Self { hostname: hostname.to_string(), method, options };
        device.validate()?;
        Ok(device)
    }

    /// Check the values a typed constructor cannot rule out
    pub fn validate(&self) -> Result<(), LibreNmsError> {
        if self.hostname.trim().is_empty() {
            return Err(LibreNmsError::missing("hostname"));
        }
        match &self.method {
            MonitoringMethod::SnmpV1 { community } | MonitoringMethod::SnmpV2c { community }
                if community.is_empty() =>
            {
                Err(LibreNmsError::missing("community"))
            }
            MonitoringMethod::SnmpV3(
                SnmpV3Security::NoAuthNoPriv { authname }
                | SnmpV3Security::AuthNoPriv { authname, .. }
                | SnmpV3Security::AuthPriv { authname, .. },
            ) if authname.is_empty() => Err(LibreNmsError::missing("authname")),
            _ => Ok(()),
        }
    }

    /// Flat JSON body as expected by `POST devices`
    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("hostname".into(), json!(self.hostname));

        let options = &self.options;
        insert_opt(&mut body, "display", options.display.as_ref());
        insert_opt(&mut body, "port_association_mode", options.port_association_mode.as_ref());
        insert_opt(&mut body, "poller_group", options.poller_group);
        insert_opt(&mut body, "location", options.location.as_ref());
        insert_opt(&mut body, "location_id", options.location_id);
        insert_opt(&mut body, "force_add", options.force_add);

        match &self.method {
            MonitoringMethod::Icmp { os, hardware, sys_name } => {
                body.insert("snmp_disable".into(), json!(true));
                insert_opt(&mut body, "os", os.as_ref());
                insert_opt(&mut body, "hardware", hardware.as_ref());
                insert_opt(&mut body, "sysName", sys_name.as_ref());
            }
            snmp => {
                insert_opt(&mut body, "snmpver", snmp.snmpver());
                insert_opt(&mut body, "port", options.port);
                insert_opt(&mut body, "transport", options.transport.as_ref());
                match snmp {
                    MonitoringMethod::SnmpV1 { community }
                    | MonitoringMethod::SnmpV2c { community } => {
                        body.insert("community".into(), json!(community));
                    }
                    MonitoringMethod::SnmpV3(security) => security.write(&mut body),
                    MonitoringMethod::Icmp { .. } => {}
                }
            }
        }

        Value::Object(body)
    }
}

fn snmpv3_security(fields: &Map<String, Value>) -> Result<SnmpV3Security, LibreNmsError> {
    let authname = required_string(fields, "authname")?;
    let authlevel = required_string(fields, "authlevel")?;

    match authlevel.as_str() {
        "noAuthNoPriv" => Ok(SnmpV3Security::NoAuthNoPriv { authname }),
        "authNoPriv" => Ok(SnmpV3Security::AuthNoPriv {
            authname,
            authpass: required_string(fields, "authpass")?,
            authalgo: required_string(fields, "authalgo")?.parse()?,
        }),
        "authPriv" => Ok(SnmpV3Security::AuthPriv {
            authname,
            authpass: required_string(fields, "authpass")?,
            authalgo: required_string(fields, "authalgo")?.parse()?,
            cryptopass: required_string(fields, "cryptopass")?,
            cryptoalgo: required_string(fields, "cryptoalgo")?.parse()?,
        }),
        other => Err(LibreNmsError::Validation(format!(
            "invalid authlevel '{other}', expected noAuthNoPriv, authNoPriv or authPriv"
        ))),
    }
}

fn insert_opt<T: Serialize>(body: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        body.insert(key.to_string(), json!(value));
    }
}

fn required_string(fields: &Map<String, Value>, name: &str) -> Result<String, LibreNmsError> {
    string_field(fields, name)?.ok_or_else(|| LibreNmsError::missing(name))
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Result<Option<String>, LibreNmsError> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(LibreNmsError::Validation(format!(
            "parameter {name} must be a string, got {other}"
        ))),
    }
}

fn number_field<T>(fields: &Map<String, Value>, name: &str) -> Result<Option<T>, LibreNmsError>
where
    T: FromStr + TryFrom<u64>,
{
    let invalid = || LibreNmsError::Validation(format!("parameter {name} must be a non-negative integer"));
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            let raw = n.as_u64().ok_or_else(invalid)?;
            T::try_from(raw).map(Some).map_err(|_| invalid())
        }
        Some(Value::String(s)) => s.trim().parse().map(Some).map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

fn bool_field(fields: &Map<String, Value>, name: &str) -> Result<Option<bool>, LibreNmsError> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(other) => Err(LibreNmsError::Validation(format!(
            "parameter {name} must be a boolean, got {other}"
        ))),
    }
}

/// Membership rule of a device group
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceGroupKind {
    /// Fixed list of devices (IDs or hostnames, as the instance accepts them)
    Static { devices: Vec<String> },
    /// Rule set evaluated by LibreNMS, in its query builder JSON format
    Dynamic { rules: Value },
}

impl DeviceGroupKind {
    /// Wire value of the group `type` field
    pub fn group_type(&self) -> &'static str {
        match self {
            Self::Static { .. } => "static",
            Self::Dynamic { .. } => "dynamic",
        }
    }

    fn write(&self, body: &mut Map<String, Value>) {
        body.insert("type".into(), json!(self.group_type()));
        match self {
            Self::Static { devices } => body.insert("devices".into(), json!(devices)),
            Self::Dynamic { rules } => body.insert("rules".into(), rules.clone()),
        };
    }
}

/// Body of an `add_devicegroup` call
#[derive(Debug, Clone, PartialEq)]
pub struct NewDeviceGroup {
    pub name: String,
    pub desc: Option<String>,
    pub kind: DeviceGroupKind,
}

impl NewDeviceGroup {
    /// Group without a description
    pub fn new(name: impl Into<String>, kind: DeviceGroupKind) -> Self {
        Self { name: name.into(), desc: None, kind }
    }

    /// Build a group from a raw group type and the two mutually exclusive fields
    ///
    /// `static` groups need `devices` and must not set `rules`; `dynamic`
    /// groups need `rules` and must not set `devices`.
    pub fn from_fields(
        name: &str,
        group_type: &str,
        devices: Option<Vec<String>>,
        rules: Option<Value>,
        desc: Option<String>,
    ) -> Result<Self, LibreNmsError> {
        if name.trim().is_empty() {
            return Err(LibreNmsError::missing("name"));
        }

        let kind = match (group_type, devices, rules) {
            ("static", _, Some(_)) => {
                return Err(LibreNmsError::Validation(
                    "rules cannot be set for a static device group".to_string(),
                ));
            }
            ("static", Some(devices), None) => DeviceGroupKind::Static { devices },
            ("static", None, None) => return Err(LibreNmsError::missing("devices")),
            ("dynamic", Some(_), _) => {
                return Err(LibreNmsError::Validation(
                    "devices cannot be set for a dynamic device group".to_string(),
                ));
            }
            ("dynamic", None, Some(rules)) => DeviceGroupKind::Dynamic { rules },
            ("dynamic", None, None) => return Err(LibreNmsError::missing("rules")),
            (other, _, _) => {
                return Err(LibreNmsError::Validation(format!(
                    "invalid device group type '{other}', expected static or dynamic"
                )));
            }
        };

        Ok(Self { name: name.to_string(), desc, kind })
    }

    /// JSON body sent to `devicegroups`
    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("name".into(), json!(self.name));
        insert_opt(&mut body, "desc", self.desc.as_ref());
        self.kind.write(&mut body);
        Value::Object(body)
    }
}

/// Partial update of an existing device group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceGroupUpdate {
    pub name: Option<String>,
    pub desc: Option<String>,
    /// Switching kind replaces the membership rule as a whole
    pub kind: Option<DeviceGroupKind>,
}

impl DeviceGroupUpdate {
    /// True when no field would be changed
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.desc.is_none() && self.kind.is_none()
    }

    /// JSON body with only the fields that are set
    pub fn body(&self) -> Value {
        let mut body = Map::new();
        insert_opt(&mut body, "name", self.name.as_ref());
        insert_opt(&mut body, "desc", self.desc.as_ref());
        if let Some(kind) = &self.kind {
            kind.write(&mut body);
        }
        Value::Object(body)
    }
}

/// Maintenance window for a device, device group or location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintenance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Start time as `Y-m-d H:i:00`; LibreNMS uses "now" when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Duration as `H:i`, e.g. `2:00`
    pub duration: String,
}

impl Maintenance {
    /// Maintenance starting now for `duration`
    pub fn new(duration: impl Into<String>) -> Self {
        Self { title: None, notes: None, start: None, duration: duration.into() }
    }
}

/// Body of an `add_location` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    pub location: String,
    pub lat: f64,
    pub lng: f64,
}

/// Partial update of an existing location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl LocationUpdate {
    /// True when neither coordinate is set
    pub fn is_empty(&self) -> bool {
        self.lat.is_none() && self.lng.is_none()
    }
}

/// Filters accepted by `list_bgp`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BgpFilter {
    pub hostname: Option<String>,
    pub asn: Option<u64>,
    pub remote_asn: Option<u64>,
    pub remote_address: Option<String>,
    pub local_address: Option<String>,
    pub bgp_descr: Option<String>,
    pub bgp_state: Option<String>,
    pub bgp_adminstate: Option<String>,
    pub bgp_family: Option<u8>,
}

impl BgpFilter {
    pub(crate) fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("hostname", self.hostname.clone())
            .with("asn", self.asn)
            .with("remote_asn", self.remote_asn)
            .with("remote_address", self.remote_address.clone())
            .with("local_address", self.local_address.clone())
            .with("bgp_descr", self.bgp_descr.clone())
            .with("bgp_state", self.bgp_state.clone())
            .with("bgp_adminstate", self.bgp_adminstate.clone())
            .with("bgp_family", self.bgp_family.map(u64::from))
    }
}

/// Filters accepted by `get_inventory`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    /// e.g. `sensor`, `port`, `chassis`
    pub ent_physical_class: Option<String>,
    /// Parent entity index; `0` lists top-level components
    pub ent_physical_contained_in: Option<u64>,
}

impl InventoryFilter {
    pub(crate) fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("entPhysicalClass", self.ent_physical_class.clone())
            .with("entPhysicalContainedIn", self.ent_physical_contained_in)
    }
}
