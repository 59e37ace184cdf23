//! The action dispatcher
//!
//! One invocation in, one outcome out. [`dispatch`] validates the request
//! against the selected action's descriptor, issues exactly one client call
//! with the parameters that action reads, and shapes the result into an
//! [`Outcome`]. Response shaping lives here once instead of once per
//! action; the per-action data lives in the descriptor table.
//!
//! The dispatcher holds no state between invocations and never retries: a
//! client error propagates to the caller untranslated.

use serde_json::Value;

use crate::action::Action;
use crate::error::Result;
use crate::outcome::Outcome;
use crate::request::{Field, InvocationRequest};
use crate::traits::WapiClient;

/// Execute the request's action against the client and normalize the result.
///
/// Validation runs first, so a request missing a required field is rejected
/// before the appliance sees any traffic.
pub async fn dispatch(client: &dyn WapiClient, request: &InvocationRequest) -> Result<Outcome> {
    request.validate()?;

    let descriptor = request.action.descriptor();
    tracing::debug!(action = %request.action, "dispatching");

    let outcome = match call(client, request).await? {
        Some(value) => Outcome::applied(descriptor.kind, value),
        None => Outcome::not_applied(descriptor.failure_message),
    };

    tracing::debug!(
        action = %request.action,
        applied = outcome.was_applied(),
        "dispatch complete"
    );
    Ok(outcome)
}

/// Route one action to its client method.
///
/// The next-available-address action reuses the next-available-network
/// call with `num` as the count and no prefix length.
async fn call(client: &dyn WapiClient, req: &InvocationRequest) -> Result<Option<Value>> {
    use Field::*;

    match req.action {
        Action::GetMemberservers => client.get_memberservers().await,
        Action::GetDhcpServers => client.get_dhcp_servers().await,
        Action::GetDhcpfailover => client.get_dhcpfailover().await,
        Action::GetNetwork => {
            client
                .get_network(req.require_str(Network)?, req.get_str(Fields))
                .await
        }
        Action::GetNetworkByIp => {
            client
                .get_network_by_ip(req.require_str(IpAddress)?, req.get_str(Fields))
                .await
        }
        Action::GetNetworkByComment => {
            client
                .get_network_by_comment(req.require_str(Comment)?, req.get_str(Fields))
                .await
        }
        Action::GetNextAvailableNetwork => {
            client
                .get_next_available_network(req.require_str(Network)?, req.cidr, req.num)
                .await
        }
        Action::GetNextAvailableAddress => {
            client
                .get_next_available_network(req.require_str(Network)?, None, req.num)
                .await
        }
        Action::GetNetworkContainer => {
            client
                .get_network_container(req.require_str(Network)?, req.get_str(Fields))
                .await
        }
        Action::GetRange => {
            client
                .get_range(
                    req.require_str(StartAddr)?,
                    req.require_str(EndAddr)?,
                    req.get_str(Fields),
                )
                .await
        }
        Action::GetDnsRecord => {
            client
                .get_dns_record(
                    req.require_str(RecordType)?,
                    req.require_str(Record)?,
                    req.get_str(Fields),
                )
                .await
        }
        Action::GetSimilarDnsRecords => {
            client
                .get_similar_dns_records(
                    req.require_str(RecordType)?,
                    req.require_str(Record)?,
                    req.get_str(Fields),
                )
                .await
        }
        Action::GetFixedaddress => {
            client
                .get_fixedaddress(req.require_str(IpAddress)?, req.get_str(Fields))
                .await
        }
        Action::GetFixedaddressByMac => {
            client
                .get_fixedaddress_by_mac(req.require_str(MacAddress)?, req.get_str(Fields))
                .await
        }
        Action::CreateNetwork => {
            client
                .create_network(
                    req.require_str(Network)?,
                    req.get_str(Comment),
                    req.get_str(Template),
                )
                .await
        }
        Action::CreateNetworkContainer => {
            client
                .create_network_container(req.require_str(Network)?, req.get_str(Comment))
                .await
        }
        Action::CreateRange => {
            client
                .create_range(
                    req.require_str(Network)?,
                    req.require_str(StartAddr)?,
                    req.require_str(EndAddr)?,
                    req.get_str(ExcStart),
                    req.get_str(ExcEnd),
                    req.options.as_ref(),
                    req.get_str(Template),
                )
                .await
        }
        Action::CreateReservedaddress => {
            client
                .create_reservedaddress(req.require_str(IpAddress)?, req.get_str(Host))
                .await
        }
        Action::CreateFixedaddress => {
            client
                .create_fixedaddress(
                    req.require_str(IpAddress)?,
                    req.require_str(MacAddress)?,
                    req.get_str(Host),
                )
                .await
        }
        Action::CreateZtpFixedaddress => {
            client
                .create_ztp_fixedaddress(
                    req.require_str(IpAddress)?,
                    req.require_str(MacAddress)?,
                    req.get_str(Host),
                    req.get_str(TftpServer),
                    req.get_str(CfgFile),
                    req.get_str(VendorCode),
                )
                .await
        }
        Action::CreateARecord => {
            client
                .create_a_record(req.require_str(IpAddress)?, req.require_str(Fqdn)?)
                .await
        }
        Action::CreatePtrRecord => {
            client
                .create_ptr_record(req.require_str(IpAddress)?, req.require_str(Fqdn)?)
                .await
        }
        Action::CreateDnsRecord => {
            client
                .create_dns_record(req.require_str(IpAddress)?, req.require_str(Fqdn)?)
                .await
        }
        Action::UpdateNetwork => {
            client
                .update_network(req.require_str(Network)?, req.get_str(Comment))
                .await
        }
        Action::UpdateNetworkContainer => {
            client
                .update_network_container(req.require_str(Network)?, req.get_str(Comment))
                .await
        }
        Action::UpdateReservedaddress => {
            client
                .update_reservedaddress(req.require_str(IpAddress)?, req.get_str(Host))
                .await
        }
        Action::UpdateFixedaddressByIpAddr => {
            client
                .update_fixedaddress_by_ip_addr(
                    req.require_str(IpAddress)?,
                    req.get_str(MacAddress),
                    req.get_str(Host),
                )
                .await
        }
        Action::UpdateFixedaddressMacAddr => {
            client
                .update_fixedaddress_by_mac_addr(req.require_str(MacAddress)?, req.get_str(Host))
                .await
        }
        Action::DeleteNetwork => client.delete_network(req.require_str(Network)?).await,
        Action::DeleteNetworkContainer => {
            client
                .delete_network_container(req.require_str(Network)?)
                .await
        }
        Action::DeleteRange => {
            client
                .delete_range(req.require_str(StartAddr)?, req.require_str(EndAddr)?)
                .await
        }
        Action::DeleteReservedaddress => {
            client
                .delete_reservedaddress(req.require_str(IpAddress)?)
                .await
        }
        Action::DeleteFixedaddress => {
            client.delete_fixedaddress(req.require_str(IpAddress)?).await
        }
        Action::DeleteFixedaddressByMac => {
            client
                .delete_fixedaddress_by_mac(req.require_str(MacAddress)?)
                .await
        }
        Action::DeleteDnsRecords => client.delete_dns_records(req.require_str(Fqdn)?).await,
    }
}
