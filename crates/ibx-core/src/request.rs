//! Invocation request model
//!
//! A single invocation carries the appliance coordinates, the credentials,
//! the selected action, and the action-specific parameters. The request is
//! immutable once deserialized; each action descriptor declares which fields
//! it reads (see [`crate::action`]), so required-field validation happens
//! before any client call is issued.

use serde::Deserialize;

use crate::action::Action;
use crate::error::{Error, Result};

/// A credential value that must never leak into logs or output.
///
/// The inner string is reachable only through [`Secret::expose`]; `Debug`
/// prints a redaction marker and the type has no `Serialize` impl.
#[derive(Clone, Deserialize)]
pub struct Secret(String);

impl Secret {
    /// Wrap a sensitive value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the underlying value
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the wrapped value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(<REDACTED>)")
    }
}

/// Named optional parameters an action may require.
///
/// Dispatch descriptors reference these to validate a request up front
/// instead of failing halfway into a client call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Host,
    Network,
    StartAddr,
    EndAddr,
    IpAddress,
    MacAddress,
    Comment,
    Cidr,
    Num,
    RecordType,
    Record,
    Template,
    ExcStart,
    ExcEnd,
    Options,
    TftpServer,
    CfgFile,
    VendorCode,
    Fqdn,
    Fields,
}

impl Field {
    /// The wire name of the field, as it appears in the request document
    pub fn name(self) -> &'static str {
        match self {
            Field::Host => "host",
            Field::Network => "network",
            Field::StartAddr => "start_addr",
            Field::EndAddr => "end_addr",
            Field::IpAddress => "ip_address",
            Field::MacAddress => "mac_address",
            Field::Comment => "comment",
            Field::Cidr => "cidr",
            Field::Num => "num",
            Field::RecordType => "type",
            Field::Record => "record",
            Field::Template => "template",
            Field::ExcStart => "exc_start",
            Field::ExcEnd => "exc_end",
            Field::Options => "options",
            Field::TftpServer => "tftp_server",
            Field::CfgFile => "cfg_file",
            Field::VendorCode => "vendor_code",
            Field::Fqdn => "fqdn",
            Field::Fields => "fields",
        }
    }
}

/// A validated set of named parameters for one dispatcher invocation.
///
/// Only `server`, `username`, `password`, and `action` are required. Every
/// other field is relevant to a subset of the actions; fields an action does
/// not read are ignored. Unknown keys and unknown `action` values are
/// rejected at deserialization time.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvocationRequest {
    /// Appliance host or address
    pub server: String,

    /// WAPI username
    pub username: String,

    /// WAPI password, redacted everywhere
    pub password: Secret,

    /// The one operation to perform
    pub action: Action,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub network: Option<String>,

    #[serde(default)]
    pub start_addr: Option<String>,

    #[serde(default)]
    pub end_addr: Option<String>,

    /// Accepted for compatibility with existing invocations; no action reads it
    #[serde(default)]
    pub objref: Option<String>,

    #[serde(default)]
    pub ip_address: Option<String>,

    #[serde(default)]
    pub mac_address: Option<String>,

    #[serde(default)]
    pub comment: Option<String>,

    /// Prefix length for next-available-network requests
    #[serde(default)]
    pub cidr: Option<u32>,

    /// Count for next-available requests
    #[serde(default)]
    pub num: Option<u32>,

    /// DNS record type (a, aaaa, cname, ptr, ...)
    #[serde(default, rename = "type")]
    pub record_type: Option<String>,

    /// DNS record name to look up
    #[serde(default)]
    pub record: Option<String>,

    #[serde(default)]
    pub template: Option<String>,

    #[serde(default)]
    pub exc_start: Option<String>,

    #[serde(default)]
    pub exc_end: Option<String>,

    /// DHCP options payload, passed through to the appliance untouched
    #[serde(default)]
    pub options: Option<serde_json::Value>,

    #[serde(default)]
    pub tftp_server: Option<String>,

    #[serde(default)]
    pub cfg_file: Option<String>,

    #[serde(default)]
    pub vendor_code: Option<String>,

    #[serde(default)]
    pub fqdn: Option<String>,

    /// WAPI version the appliance speaks
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// DNS view searches and record writes are scoped to
    #[serde(default = "default_view")]
    pub dns_view: String,

    /// Network view searches and address writes are scoped to
    #[serde(default = "default_view")]
    pub net_view: String,

    /// Return fields selector, mapped to WAPI `_return_fields`
    #[serde(default)]
    pub fields: Option<String>,
}

impl InvocationRequest {
    /// Validate the request against the selected action's descriptor.
    ///
    /// Checks the connection parameters and every field the action declares
    /// as required. Runs before the client is constructed, so an invalid
    /// request never reaches the appliance.
    pub fn validate(&self) -> Result<()> {
        if self.server.is_empty() {
            return Err(Error::invalid_input("'server' cannot be empty"));
        }
        if self.username.is_empty() {
            return Err(Error::invalid_input("'username' cannot be empty"));
        }
        if self.password.is_empty() {
            return Err(Error::invalid_input("'password' cannot be empty"));
        }

        for field in self.action.descriptor().required {
            if !self.is_set(*field) {
                return Err(Error::invalid_input(format!(
                    "action '{}' requires parameter '{}'",
                    self.action,
                    field.name()
                )));
            }
        }

        Ok(())
    }

    /// Whether the given optional field carries a value
    pub fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Cidr => self.cidr.is_some(),
            Field::Num => self.num.is_some(),
            Field::Options => self.options.is_some(),
            _ => self.get_str(field).is_some(),
        }
    }

    /// Look up a string-valued field by name
    pub fn get_str(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Host => &self.host,
            Field::Network => &self.network,
            Field::StartAddr => &self.start_addr,
            Field::EndAddr => &self.end_addr,
            Field::IpAddress => &self.ip_address,
            Field::MacAddress => &self.mac_address,
            Field::Comment => &self.comment,
            Field::RecordType => &self.record_type,
            Field::Record => &self.record,
            Field::Template => &self.template,
            Field::ExcStart => &self.exc_start,
            Field::ExcEnd => &self.exc_end,
            Field::TftpServer => &self.tftp_server,
            Field::CfgFile => &self.cfg_file,
            Field::VendorCode => &self.vendor_code,
            Field::Fqdn => &self.fqdn,
            Field::Fields => &self.fields,
            Field::Cidr | Field::Num | Field::Options => return None,
        };
        value.as_deref()
    }

    /// Look up a string-valued field, failing with an invalid-input error
    /// when it is absent
    pub fn require_str(&self, field: Field) -> Result<&str> {
        self.get_str(field).ok_or_else(|| {
            Error::invalid_input(format!(
                "action '{}' requires parameter '{}'",
                self.action,
                field.name()
            ))
        })
    }
}

fn default_api_version() -> String {
    "2.3.1".to_string()
}

fn default_view() -> String {
    "default".to_string()
}
