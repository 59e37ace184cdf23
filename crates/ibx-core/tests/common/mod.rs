//! Test doubles and common utilities for dispatcher contract tests
//!
//! `RecordingClient` implements the full `WapiClient` surface, records every
//! call with its stringified arguments, and answers with a canned response.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use ibx_core::error::{Error, Result};
use ibx_core::request::InvocationRequest;
use ibx_core::traits::WapiClient;
use serde_json::{Value, json};

/// One observed client call: method name plus stringified arguments,
/// in declaration order. Absent optional arguments record as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub args: Vec<Option<String>>,
}

/// A `WapiClient` double that records calls and returns a canned response
pub struct RecordingClient {
    response: Option<Value>,
    fail: bool,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingClient {
    /// A client whose every method answers with `response`
    pub fn returning(response: Option<Value>) -> Self {
        Self {
            response,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A client whose every method fails, for error-propagation tests
    pub fn failing() -> Self {
        Self {
            response: None,
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The calls observed so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str, args: Vec<Option<String>>) {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall { method, args });
    }

    fn respond(&self) -> Result<Option<Value>> {
        if self.fail {
            Err(Error::wapi("simulated client failure"))
        } else {
            Ok(self.response.clone())
        }
    }
}

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn opt(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn opt_num(value: Option<u32>) -> Option<String> {
    value.map(|n| n.to_string())
}

fn opt_value(value: Option<&Value>) -> Option<String> {
    value.map(Value::to_string)
}

#[async_trait]
impl WapiClient for RecordingClient {
    async fn get_memberservers(&self) -> Result<Option<Value>> {
        self.record("get_memberservers", vec![]);
        self.respond()
    }

    async fn get_dhcp_servers(&self) -> Result<Option<Value>> {
        self.record("get_dhcp_servers", vec![]);
        self.respond()
    }

    async fn get_dhcpfailover(&self) -> Result<Option<Value>> {
        self.record("get_dhcpfailover", vec![]);
        self.respond()
    }

    async fn get_network(&self, network: &str, fields: Option<&str>) -> Result<Option<Value>> {
        self.record("get_network", vec![s(network), opt(fields)]);
        self.respond()
    }

    async fn get_network_by_ip(
        &self,
        ip_address: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record("get_network_by_ip", vec![s(ip_address), opt(fields)]);
        self.respond()
    }

    async fn get_network_by_comment(
        &self,
        comment: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record("get_network_by_comment", vec![s(comment), opt(fields)]);
        self.respond()
    }

    async fn get_next_available_network(
        &self,
        network: &str,
        cidr: Option<u32>,
        num: Option<u32>,
    ) -> Result<Option<Value>> {
        self.record(
            "get_next_available_network",
            vec![s(network), opt_num(cidr), opt_num(num)],
        );
        self.respond()
    }

    async fn get_network_container(
        &self,
        network: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record("get_network_container", vec![s(network), opt(fields)]);
        self.respond()
    }

    async fn get_range(
        &self,
        start_addr: &str,
        end_addr: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record("get_range", vec![s(start_addr), s(end_addr), opt(fields)]);
        self.respond()
    }

    async fn get_dns_record(
        &self,
        record_type: &str,
        record: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record(
            "get_dns_record",
            vec![s(record_type), s(record), opt(fields)],
        );
        self.respond()
    }

    async fn get_similar_dns_records(
        &self,
        record_type: &str,
        record: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record(
            "get_similar_dns_records",
            vec![s(record_type), s(record), opt(fields)],
        );
        self.respond()
    }

    async fn get_fixedaddress(
        &self,
        ip_address: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record("get_fixedaddress", vec![s(ip_address), opt(fields)]);
        self.respond()
    }

    async fn get_fixedaddress_by_mac(
        &self,
        mac_address: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record("get_fixedaddress_by_mac", vec![s(mac_address), opt(fields)]);
        self.respond()
    }

    async fn create_network(
        &self,
        network: &str,
        comment: Option<&str>,
        template: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record(
            "create_network",
            vec![s(network), opt(comment), opt(template)],
        );
        self.respond()
    }

    async fn create_network_container(
        &self,
        network: &str,
        comment: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record("create_network_container", vec![s(network), opt(comment)]);
        self.respond()
    }

    async fn create_range(
        &self,
        network: &str,
        start_addr: &str,
        end_addr: &str,
        exc_start: Option<&str>,
        exc_end: Option<&str>,
        options: Option<&Value>,
        template: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record(
            "create_range",
            vec![
                s(network),
                s(start_addr),
                s(end_addr),
                opt(exc_start),
                opt(exc_end),
                opt_value(options),
                opt(template),
            ],
        );
        self.respond()
    }

    async fn create_reservedaddress(
        &self,
        ip_address: &str,
        host: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record("create_reservedaddress", vec![s(ip_address), opt(host)]);
        self.respond()
    }

    async fn create_fixedaddress(
        &self,
        ip_address: &str,
        mac_address: &str,
        host: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record(
            "create_fixedaddress",
            vec![s(ip_address), s(mac_address), opt(host)],
        );
        self.respond()
    }

    async fn create_ztp_fixedaddress(
        &self,
        ip_address: &str,
        mac_address: &str,
        host: Option<&str>,
        tftp_server: Option<&str>,
        cfg_file: Option<&str>,
        vendor_code: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record(
            "create_ztp_fixedaddress",
            vec![
                s(ip_address),
                s(mac_address),
                opt(host),
                opt(tftp_server),
                opt(cfg_file),
                opt(vendor_code),
            ],
        );
        self.respond()
    }

    async fn create_a_record(&self, ip_address: &str, fqdn: &str) -> Result<Option<Value>> {
        self.record("create_a_record", vec![s(ip_address), s(fqdn)]);
        self.respond()
    }

    async fn create_ptr_record(&self, ip_address: &str, fqdn: &str) -> Result<Option<Value>> {
        self.record("create_ptr_record", vec![s(ip_address), s(fqdn)]);
        self.respond()
    }

    async fn create_dns_record(&self, ip_address: &str, fqdn: &str) -> Result<Option<Value>> {
        self.record("create_dns_record", vec![s(ip_address), s(fqdn)]);
        self.respond()
    }

    async fn update_network(
        &self,
        network: &str,
        comment: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record("update_network", vec![s(network), opt(comment)]);
        self.respond()
    }

    async fn update_network_container(
        &self,
        network: &str,
        comment: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record("update_network_container", vec![s(network), opt(comment)]);
        self.respond()
    }

    async fn update_reservedaddress(
        &self,
        ip_address: &str,
        host: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record("update_reservedaddress", vec![s(ip_address), opt(host)]);
        self.respond()
    }

    async fn update_fixedaddress_by_ip_addr(
        &self,
        ip_address: &str,
        mac_address: Option<&str>,
        host: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record(
            "update_fixedaddress_by_ip_addr",
            vec![s(ip_address), opt(mac_address), opt(host)],
        );
        self.respond()
    }

    async fn update_fixedaddress_by_mac_addr(
        &self,
        mac_address: &str,
        host: Option<&str>,
    ) -> Result<Option<Value>> {
        self.record(
            "update_fixedaddress_by_mac_addr",
            vec![s(mac_address), opt(host)],
        );
        self.respond()
    }

    async fn delete_network(&self, network: &str) -> Result<Option<Value>> {
        self.record("delete_network", vec![s(network)]);
        self.respond()
    }

    async fn delete_network_container(&self, network: &str) -> Result<Option<Value>> {
        self.record("delete_network_container", vec![s(network)]);
        self.respond()
    }

    async fn delete_range(&self, start_addr: &str, end_addr: &str) -> Result<Option<Value>> {
        self.record("delete_range", vec![s(start_addr), s(end_addr)]);
        self.respond()
    }

    async fn delete_reservedaddress(&self, ip_address: &str) -> Result<Option<Value>> {
        self.record("delete_reservedaddress", vec![s(ip_address)]);
        self.respond()
    }

    async fn delete_fixedaddress(&self, ip_address: &str) -> Result<Option<Value>> {
        self.record("delete_fixedaddress", vec![s(ip_address)]);
        self.respond()
    }

    async fn delete_fixedaddress_by_mac(&self, mac_address: &str) -> Result<Option<Value>> {
        self.record("delete_fixedaddress_by_mac", vec![s(mac_address)]);
        self.respond()
    }

    async fn delete_dns_records(&self, fqdn: &str) -> Result<Option<Value>> {
        self.record("delete_dns_records", vec![s(fqdn)]);
        self.respond()
    }
}

/// The parameter values the contract tests dispatch with
pub mod params {
    pub const SERVER: &str = "gm.example.com";
    pub const USERNAME: &str = "admin";
    pub const PASSWORD: &str = "s3cr3t-wapi-pass";
    pub const HOST: &str = "web01";
    pub const NETWORK: &str = "10.10.0.0/24";
    pub const START_ADDR: &str = "10.10.0.50";
    pub const END_ADDR: &str = "10.10.0.99";
    pub const IP_ADDRESS: &str = "10.10.0.5";
    pub const MAC_ADDRESS: &str = "aa:bb:cc:dd:ee:ff";
    pub const COMMENT: &str = "lab segment";
    pub const CIDR: u32 = 26;
    pub const NUM: u32 = 2;
    pub const RECORD_TYPE: &str = "a";
    pub const RECORD: &str = "web.example.com";
    pub const TEMPLATE: &str = "net-template";
    pub const EXC_START: &str = "10.10.0.60";
    pub const EXC_END: &str = "10.10.0.69";
    pub const TFTP_SERVER: &str = "10.10.0.3";
    pub const CFG_FILE: &str = "boot.cfg";
    pub const VENDOR_CODE: &str = "ACME";
    pub const FQDN: &str = "web.example.com";
    pub const FIELDS: &str = "network,comment";

    pub fn options() -> serde_json::Value {
        serde_json::json!([{"name": "domain-name-servers", "value": "10.10.0.2"}])
    }
}

/// A request carrying every optional parameter, for the given action
pub fn full_request(action: &str) -> InvocationRequest {
    serde_json::from_value(json!({
        "server": params::SERVER,
        "username": params::USERNAME,
        "password": params::PASSWORD,
        "action": action,
        "host": params::HOST,
        "network": params::NETWORK,
        "start_addr": params::START_ADDR,
        "end_addr": params::END_ADDR,
        "ip_address": params::IP_ADDRESS,
        "mac_address": params::MAC_ADDRESS,
        "comment": params::COMMENT,
        "cidr": params::CIDR,
        "num": params::NUM,
        "type": params::RECORD_TYPE,
        "record": params::RECORD,
        "template": params::TEMPLATE,
        "exc_start": params::EXC_START,
        "exc_end": params::EXC_END,
        "options": params::options(),
        "tftp_server": params::TFTP_SERVER,
        "cfg_file": params::CFG_FILE,
        "vendor_code": params::VENDOR_CODE,
        "fqdn": params::FQDN,
        "fields": params::FIELDS,
    }))
    .expect("full request deserializes")
}

/// A request carrying only the connection parameters and the action
pub fn minimal_request(action: &str) -> InvocationRequest {
    serde_json::from_value(json!({
        "server": params::SERVER,
        "username": params::USERNAME,
        "password": params::PASSWORD,
        "action": action,
    }))
    .expect("minimal request deserializes")
}
