//! Action enumeration and dispatch descriptors
//!
//! Every operation the dispatcher exposes is one variant of [`Action`].
//! Each variant has a static [`ActionDescriptor`] carrying everything the
//! dispatcher needs besides the client call itself: whether the action reads
//! or mutates appliance state, which request fields it requires, and the
//! fixed message reported when the client call comes back empty. Keeping
//! that data in one table removes the per-branch response shaping the
//! dispatcher would otherwise repeat thirty-five times.

use serde::{Deserialize, Serialize};

use crate::request::Field;

/// Whether an action reads or mutates appliance state.
///
/// Read actions report `changed: false` on success; write actions report
/// `changed: true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Query-only; never touches appliance state
    Read,
    /// Creates, updates, or deletes exactly one object (or record set)
    Write,
}

impl ActionKind {
    /// The `changed` flag reported for a successful call of this kind
    pub fn changed(self) -> bool {
        matches!(self, ActionKind::Write)
    }
}

/// Static dispatch data for one action
#[derive(Debug, Clone, Copy)]
pub struct ActionDescriptor {
    /// Read or write classification
    pub kind: ActionKind,
    /// Fields that must be present before the client call is issued
    pub required: &'static [Field],
    /// Fixed message reported when the client returns an empty result
    pub failure_message: &'static str,
}

/// The closed set of operations the dispatcher understands.
///
/// Serialized names are the snake_case identifiers accepted in the `action`
/// field of an invocation request; anything outside this set fails
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    GetMemberservers,
    GetDhcpServers,
    GetDhcpfailover,
    GetNetwork,
    GetNetworkByIp,
    GetNetworkByComment,
    GetNextAvailableNetwork,
    GetNextAvailableAddress,
    GetNetworkContainer,
    GetRange,
    GetDnsRecord,
    GetSimilarDnsRecords,
    GetFixedaddress,
    GetFixedaddressByMac,
    CreateNetwork,
    CreateNetworkContainer,
    CreateRange,
    CreateReservedaddress,
    CreateFixedaddress,
    CreateZtpFixedaddress,
    CreateARecord,
    CreatePtrRecord,
    CreateDnsRecord,
    UpdateNetwork,
    UpdateNetworkContainer,
    UpdateReservedaddress,
    UpdateFixedaddressByIpAddr,
    UpdateFixedaddressMacAddr,
    DeleteNetwork,
    DeleteNetworkContainer,
    DeleteRange,
    DeleteReservedaddress,
    DeleteFixedaddress,
    DeleteFixedaddressByMac,
    DeleteDnsRecords,
}

impl Action {
    /// Every dispatchable action
    pub const ALL: [Action; 35] = [
        Action::GetMemberservers,
        Action::GetDhcpServers,
        Action::GetDhcpfailover,
        Action::GetNetwork,
        Action::GetNetworkByIp,
        Action::GetNetworkByComment,
        Action::GetNextAvailableNetwork,
        Action::GetNextAvailableAddress,
        Action::GetNetworkContainer,
        Action::GetRange,
        Action::GetDnsRecord,
        Action::GetSimilarDnsRecords,
        Action::GetFixedaddress,
        Action::GetFixedaddressByMac,
        Action::CreateNetwork,
        Action::CreateNetworkContainer,
        Action::CreateRange,
        Action::CreateReservedaddress,
        Action::CreateFixedaddress,
        Action::CreateZtpFixedaddress,
        Action::CreateARecord,
        Action::CreatePtrRecord,
        Action::CreateDnsRecord,
        Action::UpdateNetwork,
        Action::UpdateNetworkContainer,
        Action::UpdateReservedaddress,
        Action::UpdateFixedaddressByIpAddr,
        Action::UpdateFixedaddressMacAddr,
        Action::DeleteNetwork,
        Action::DeleteNetworkContainer,
        Action::DeleteRange,
        Action::DeleteReservedaddress,
        Action::DeleteFixedaddress,
        Action::DeleteFixedaddressByMac,
        Action::DeleteDnsRecords,
    ];

    /// The snake_case identifier this action is invoked as
    pub fn as_str(self) -> &'static str {
        match self {
            Action::GetMemberservers => "get_memberservers",
            Action::GetDhcpServers => "get_dhcp_servers",
            Action::GetDhcpfailover => "get_dhcpfailover",
            Action::GetNetwork => "get_network",
            Action::GetNetworkByIp => "get_network_by_ip",
            Action::GetNetworkByComment => "get_network_by_comment",
            Action::GetNextAvailableNetwork => "get_next_available_network",
            Action::GetNextAvailableAddress => "get_next_available_address",
            Action::GetNetworkContainer => "get_network_container",
            Action::GetRange => "get_range",
            Action::GetDnsRecord => "get_dns_record",
            Action::GetSimilarDnsRecords => "get_similar_dns_records",
            Action::GetFixedaddress => "get_fixedaddress",
            Action::GetFixedaddressByMac => "get_fixedaddress_by_mac",
            Action::CreateNetwork => "create_network",
            Action::CreateNetworkContainer => "create_network_container",
            Action::CreateRange => "create_range",
            Action::CreateReservedaddress => "create_reservedaddress",
            Action::CreateFixedaddress => "create_fixedaddress",
            Action::CreateZtpFixedaddress => "create_ztp_fixedaddress",
            Action::CreateARecord => "create_a_record",
            Action::CreatePtrRecord => "create_ptr_record",
            Action::CreateDnsRecord => "create_dns_record",
            Action::UpdateNetwork => "update_network",
            Action::UpdateNetworkContainer => "update_network_container",
            Action::UpdateReservedaddress => "update_reservedaddress",
            Action::UpdateFixedaddressByIpAddr => "update_fixedaddress_by_ip_addr",
            Action::UpdateFixedaddressMacAddr => "update_fixedaddress_mac_addr",
            Action::DeleteNetwork => "delete_network",
            Action::DeleteNetworkContainer => "delete_network_container",
            Action::DeleteRange => "delete_range",
            Action::DeleteReservedaddress => "delete_reservedaddress",
            Action::DeleteFixedaddress => "delete_fixedaddress",
            Action::DeleteFixedaddressByMac => "delete_fixedaddress_by_mac",
            Action::DeleteDnsRecords => "delete_dns_records",
        }
    }

    /// The static dispatch data for this action
    pub fn descriptor(self) -> ActionDescriptor {
        use ActionKind::{Read, Write};
        use Field::*;

        macro_rules! desc {
            ($kind:expr, [$($field:ident),*], $msg:expr) => {
                ActionDescriptor {
                    kind: $kind,
                    required: &[$($field),*],
                    failure_message: $msg,
                }
            };
        }

        match self {
            Action::GetMemberservers => desc!(Read, [], "No member servers found"),
            Action::GetDhcpServers => desc!(Read, [], "No DHCP servers found"),
            Action::GetDhcpfailover => desc!(Read, [], "No DHCP failover found"),
            Action::GetNetwork => desc!(Read, [Network], "Network not found"),
            Action::GetNetworkByIp => desc!(Read, [IpAddress], "Network not found"),
            Action::GetNetworkByComment => desc!(Read, [Comment], "Network not found"),
            Action::GetNextAvailableNetwork => {
                desc!(Read, [Network], "No next available network")
            }
            Action::GetNextAvailableAddress => {
                desc!(Read, [Network], "No next available IP address")
            }
            Action::GetNetworkContainer => {
                desc!(Read, [Network], "Network Container not found")
            }
            Action::GetRange => desc!(Read, [StartAddr, EndAddr], "No DHCP Range"),
            Action::GetDnsRecord => desc!(Read, [RecordType, Record], "No DNS Record"),
            Action::GetSimilarDnsRecords => {
                desc!(Read, [RecordType, Record], "No Similar DNS Records")
            }
            Action::GetFixedaddress => desc!(Read, [IpAddress], "Fixed Address not found"),
            Action::GetFixedaddressByMac => {
                desc!(Read, [MacAddress], "Fixed Address not found")
            }
            Action::CreateNetwork => desc!(Write, [Network], "Unable to create network"),
            Action::CreateNetworkContainer => {
                desc!(Write, [Network], "Unable to create network container")
            }
            Action::CreateRange => {
                desc!(Write, [Network, StartAddr, EndAddr], "Unable to create DHCP range")
            }
            Action::CreateReservedaddress => {
                desc!(Write, [IpAddress], "Unable to create reserved address")
            }
            Action::CreateFixedaddress => {
                desc!(Write, [IpAddress, MacAddress], "Unable to fixed address")
            }
            Action::CreateZtpFixedaddress => {
                desc!(Write, [IpAddress, MacAddress], "Unable to fixed address")
            }
            Action::CreateARecord => {
                desc!(Write, [IpAddress, Fqdn], "Unable to create DNS A record")
            }
            Action::CreatePtrRecord => {
                desc!(Write, [IpAddress, Fqdn], "Unable to create DNS PTR record")
            }
            Action::CreateDnsRecord => {
                desc!(Write, [IpAddress, Fqdn], "Unable to create DNS record")
            }
            Action::UpdateNetwork => desc!(Write, [Network], "Unable to update network"),
            Action::UpdateNetworkContainer => {
                desc!(Write, [Network], "Unable to update network container")
            }
            Action::UpdateReservedaddress => {
                desc!(Write, [IpAddress], "Unable to update reserved address")
            }
            Action::UpdateFixedaddressByIpAddr => {
                desc!(Write, [IpAddress], "Unable to update fixed address")
            }
            Action::UpdateFixedaddressMacAddr => {
                desc!(Write, [MacAddress], "Unable to update fixed address")
            }
            Action::DeleteNetwork => desc!(Write, [Network], "Unable to delete network"),
            Action::DeleteNetworkContainer => {
                desc!(Write, [Network], "Unable to delete network container")
            }
            Action::DeleteRange => {
                desc!(Write, [StartAddr, EndAddr], "Unable to delete DHCP Range")
            }
            Action::DeleteReservedaddress => {
                desc!(Write, [IpAddress], "Unable to delete reserved address")
            }
            Action::DeleteFixedaddress => {
                desc!(Write, [IpAddress], "Unable to delete fixed address")
            }
            Action::DeleteFixedaddressByMac => {
                desc!(Write, [MacAddress], "Unable to delete fixed address")
            }
            Action::DeleteDnsRecords => desc!(Write, [Fqdn], "Unable to delete DNS record"),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
