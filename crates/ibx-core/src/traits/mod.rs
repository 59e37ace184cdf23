//! Trait definitions for the ibx dispatcher
//!
//! The single seam in this system is [`WapiClient`]: the dispatcher talks to
//! the Infoblox appliance exclusively through it, and tests substitute a
//! recording double for it.

mod wapi_client;

pub use wapi_client::WapiClient;
