// # ibx-core
//
// Core library for the ibx Infoblox automation dispatcher.
//
// ## Architecture Overview
//
// This library maps a validated invocation request onto exactly one
// Infoblox client call and normalizes the result:
//
// - **InvocationRequest**: the immutable parameter set for one invocation
// - **Action**: the closed set of dispatchable operations, each with a
//   static descriptor (read/write kind, required fields, failure message)
// - **WapiClient**: the trait seam the concrete appliance client sits behind
// - **dispatch**: validate, issue the one client call, shape the Outcome
// - **Outcome**: the normalized `{changed, msg}` result record
//
// ## Design Principles
//
// 1. **Table-Driven**: per-action data lives in descriptors, not in
//    thirty-five copies of the same branch body
// 2. **Validate Before Dispatch**: unknown actions and missing required
//    fields are rejected before any client construction
// 3. **Stateless**: one action per invocation, no caching, no retries
// 4. **Opaque Collaborator**: WAPI transport details never leak above the
//    `WapiClient` trait

pub mod action;
pub mod dispatch;
pub mod error;
pub mod outcome;
pub mod request;
pub mod traits;

// Re-export core types for convenience
pub use action::{Action, ActionDescriptor, ActionKind};
pub use dispatch::dispatch;
pub use error::{Error, Result};
pub use outcome::Outcome;
pub use request::{Field, InvocationRequest, Secret};
pub use traits::WapiClient;
