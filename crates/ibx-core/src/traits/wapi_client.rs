// # WAPI Client Trait
//
// Defines the interface the dispatcher uses to talk to an Infoblox
// appliance. One method per dispatchable operation; the concrete transport
// (HTTP, WAPI object-reference resolution, TLS behavior) lives behind it.
//
// ## Implementations
//
// - Infoblox WAPI over HTTPS: `ibx-client-wapi` crate
// - Test double: `RecordingClient` in `ibx-core/tests/common`

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Client interface for Infoblox IPAM and DNS operations.
///
/// Every method maps to exactly one dispatchable action (the next-available
/// pair shares one method) and follows a single return convention:
///
/// - `Ok(Some(value))`: the operation applied; `value` is the domain result
///   (an object, a list of objects, or an object reference)
/// - `Ok(None)`: the operation found nothing to act on; the dispatcher
///   reports the action's fixed failure message
/// - `Err(e)`: the call itself failed; the error propagates untranslated,
///   with no retry and no rollback
///
/// # Thread Safety
///
/// Implementations must be usable across async tasks.
///
/// Implementations are single-shot and stateless between invocations: no
/// retry logic, no caching, no background tasks. The dispatcher issues one
/// call per invocation and exits.
#[async_trait]
pub trait WapiClient: Send + Sync {
    // Grid queries

    /// List the grid's member servers
    async fn get_memberservers(&self) -> Result<Option<Value>>;

    /// List members with their DHCP properties
    async fn get_dhcp_servers(&self) -> Result<Option<Value>>;

    /// List DHCP failover associations
    async fn get_dhcpfailover(&self) -> Result<Option<Value>>;

    // Network queries

    /// Look up a network by CIDR
    async fn get_network(&self, network: &str, fields: Option<&str>) -> Result<Option<Value>>;

    /// Look up the network containing an address
    async fn get_network_by_ip(
        &self,
        ip_address: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Look up networks whose comment matches
    async fn get_network_by_comment(
        &self,
        comment: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Ask the appliance for the next unallocated network(s) under a
    /// container. `cidr` is the requested prefix length, `num` the count;
    /// both fall back to appliance defaults when absent.
    async fn get_next_available_network(
        &self,
        network: &str,
        cidr: Option<u32>,
        num: Option<u32>,
    ) -> Result<Option<Value>>;

    /// Look up a network container by CIDR
    async fn get_network_container(
        &self,
        network: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>>;

    // DHCP range and address queries

    /// Look up a DHCP range by its start and end addresses
    async fn get_range(
        &self,
        start_addr: &str,
        end_addr: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Look up a DNS record by type and name
    async fn get_dns_record(
        &self,
        record_type: &str,
        record: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Look up DNS records whose name matches a pattern
    async fn get_similar_dns_records(
        &self,
        record_type: &str,
        record: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Look up a fixed address by IP
    async fn get_fixedaddress(
        &self,
        ip_address: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Look up a fixed address by MAC
    async fn get_fixedaddress_by_mac(
        &self,
        mac_address: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>>;

    // Creates

    /// Create a network
    async fn create_network(
        &self,
        network: &str,
        comment: Option<&str>,
        template: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Create a network container
    async fn create_network_container(
        &self,
        network: &str,
        comment: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Create a DHCP range, optionally with an exclusion window, DHCP
    /// options, and a template
    #[allow(clippy::too_many_arguments)]
    async fn create_range(
        &self,
        network: &str,
        start_addr: &str,
        end_addr: &str,
        exc_start: Option<&str>,
        exc_end: Option<&str>,
        options: Option<&Value>,
        template: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Create a reserved address (a fixed address with no MAC binding)
    async fn create_reservedaddress(
        &self,
        ip_address: &str,
        host: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Create a fixed address binding a MAC to an IP
    async fn create_fixedaddress(
        &self,
        ip_address: &str,
        mac_address: &str,
        host: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Create a fixed address carrying zero-touch-provisioning boot options
    #[allow(clippy::too_many_arguments)]
    async fn create_ztp_fixedaddress(
        &self,
        ip_address: &str,
        mac_address: &str,
        host: Option<&str>,
        tftp_server: Option<&str>,
        cfg_file: Option<&str>,
        vendor_code: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Create an A record
    async fn create_a_record(&self, ip_address: &str, fqdn: &str) -> Result<Option<Value>>;

    /// Create a PTR record
    async fn create_ptr_record(&self, ip_address: &str, fqdn: &str) -> Result<Option<Value>>;

    /// Create the A/PTR record pair for a name
    async fn create_dns_record(&self, ip_address: &str, fqdn: &str) -> Result<Option<Value>>;

    // Updates

    /// Update a network's comment
    async fn update_network(&self, network: &str, comment: Option<&str>)
    -> Result<Option<Value>>;

    /// Update a network container's comment
    async fn update_network_container(
        &self,
        network: &str,
        comment: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Update a reserved address's host name
    async fn update_reservedaddress(
        &self,
        ip_address: &str,
        host: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Update a fixed address located by IP
    async fn update_fixedaddress_by_ip_addr(
        &self,
        ip_address: &str,
        mac_address: Option<&str>,
        host: Option<&str>,
    ) -> Result<Option<Value>>;

    /// Update a fixed address located by MAC
    async fn update_fixedaddress_by_mac_addr(
        &self,
        mac_address: &str,
        host: Option<&str>,
    ) -> Result<Option<Value>>;

    // Deletes

    /// Delete a network
    async fn delete_network(&self, network: &str) -> Result<Option<Value>>;

    /// Delete a network container
    async fn delete_network_container(&self, network: &str) -> Result<Option<Value>>;

    /// Delete a DHCP range located by its start and end addresses
    async fn delete_range(&self, start_addr: &str, end_addr: &str) -> Result<Option<Value>>;

    /// Delete a reserved address
    async fn delete_reservedaddress(&self, ip_address: &str) -> Result<Option<Value>>;

    /// Delete a fixed address located by IP
    async fn delete_fixedaddress(&self, ip_address: &str) -> Result<Option<Value>>;

    /// Delete a fixed address located by MAC
    async fn delete_fixedaddress_by_mac(&self, mac_address: &str) -> Result<Option<Value>>;

    /// Delete every A/PTR record for a name
    async fn delete_dns_records(&self, fqdn: &str) -> Result<Option<Value>>;
}
