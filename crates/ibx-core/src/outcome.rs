//! Normalized invocation outcome
//!
//! Every dispatched action produces exactly one [`Outcome`], in one of two
//! shapes:
//!
//! - the client returned a value: `{"changed": <bool>, "msg": <value>}`,
//!   with `changed` taken from the action's read/write classification
//! - the client returned nothing: `{"msg": "<fixed failure message>"}`,
//!   with no `changed` key at all

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::action::ActionKind;

/// The normalized result record emitted for one invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Present only when the client call returned a value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed: Option<bool>,

    /// The client's return value, or the action's fixed failure message
    pub msg: Value,
}

impl Outcome {
    /// Outcome for a client call that returned a value
    pub fn applied(kind: ActionKind, msg: Value) -> Self {
        Self {
            changed: Some(kind.changed()),
            msg,
        }
    }

    /// Outcome for a client call that returned nothing
    pub fn not_applied(message: &str) -> Self {
        Self {
            changed: None,
            msg: Value::String(message.to_string()),
        }
    }

    /// Whether the underlying client call returned a value
    pub fn was_applied(&self) -> bool {
        self.changed.is_some()
    }
}
