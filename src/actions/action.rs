//! # Action records.
//!
//! An [`Action`] describes one requested state transition. Actions are
//! immutable once enqueued, applied exactly once, and never retried.
//!
//! Producers on the same thread construct [`Action`] values directly.
//! Producers on the far side of the transport send [`RawAction`] records —
//! the `{kind, args}` shape — which are decoded here before anything is
//! enqueued, so a contract mismatch surfaces as
//! [`EngineError::UnknownKind`] while the snapshot is still untouched.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::EngineError;
use crate::reducer::Reducer;

/// Wire tag of the reserved full-replacement action.
pub const SET_STATE_KIND: &str = "setState";

/// Shorthand for the action type of a given [`Reducer`].
pub type ActionOf<R> = Action<<R as Reducer>::State, <R as Reducer>::Action>;

/// One requested state transition.
///
/// `S` is the snapshot type, `A` the application's closed action enum
/// (see [`Reducer::Action`](crate::Reducer::Action)).
#[derive(Debug, Clone)]
pub enum Action<S, A> {
    /// Replace the whole snapshot with `new_state`, bypassing the reducer
    /// entirely. Used for bulk/administrative replacement such as test
    /// fixtures or a full resync.
    SetState {
        /// The replacement snapshot.
        new_state: S,
    },

    /// A domain transition, routed through
    /// [`Reducer::apply`](crate::Reducer::apply).
    App(A),
}

/// Wire-level action record: a kind tag plus an opaque payload.
///
/// The engine does not validate `args` beyond what decoding into the
/// application's action enum requires.
///
/// ## Example
/// ```
/// use statevisor::actions::RawAction;
///
/// let raw = RawAction::new("increment", serde_json::Value::Null);
/// assert_eq!(raw.kind, "increment");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAction {
    /// The action kind tag.
    pub kind: String,
    /// Opaque payload, interpreted by the matching transition.
    #[serde(default)]
    pub args: Value,
}

impl RawAction {
    /// Creates a wire record from a kind tag and payload.
    pub fn new(kind: impl Into<String>, args: Value) -> Self {
        Self {
            kind: kind.into(),
            args,
        }
    }

    /// Decodes the record into a typed [`Action`].
    ///
    /// The reserved [`SET_STATE_KIND`] carries `{newState: S}` and maps to
    /// [`Action::SetState`]. Every other kind must match a variant of the
    /// application's action enum, tagged by `kind` with its fields under
    /// `args`; a record that matches nothing fails with
    /// [`EngineError::UnknownKind`].
    pub fn decode<S, A>(self) -> Result<Action<S, A>, EngineError>
    where
        S: DeserializeOwned,
        A: DeserializeOwned,
    {
        if self.kind == SET_STATE_KIND {
            let new_state = self.args.get("newState").cloned().ok_or_else(|| {
                EngineError::Codec {
                    reason: "setState args missing `newState`".into(),
                }
            })?;
            let new_state =
                serde_json::from_value(new_state).map_err(|e| EngineError::Codec {
                    reason: e.to_string(),
                })?;
            return Ok(Action::SetState { new_state });
        }

        let Self { kind, args } = self;
        let tagged = json!({ "kind": kind.clone(), "args": args });
        match serde_json::from_value::<A>(tagged) {
            Ok(action) => Ok(Action::App(action)),
            Err(_) => Err(EngineError::UnknownKind { kind }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Counter {
        value: u64,
    }

    #[derive(Debug, PartialEq, serde::Deserialize)]
    #[serde(tag = "kind", content = "args", rename_all = "camelCase")]
    enum CounterAction {
        Increment,
        Add { amount: u64 },
    }

    #[test]
    fn test_decode_unit_variant() {
        let raw = RawAction::new("increment", Value::Null);
        let action: Action<Counter, CounterAction> = raw.decode().expect("decode");
        assert!(matches!(action, Action::App(CounterAction::Increment)));
    }

    #[test]
    fn test_decode_payload_variant() {
        let raw = RawAction::new("add", json!({ "amount": 7 }));
        let action: Action<Counter, CounterAction> = raw.decode().expect("decode");
        assert!(matches!(
            action,
            Action::App(CounterAction::Add { amount: 7 })
        ));
    }

    #[test]
    fn test_decode_set_state_bypasses_action_set() {
        let raw = RawAction::new(SET_STATE_KIND, json!({ "newState": { "value": 42 } }));
        let action: Action<Counter, CounterAction> = raw.decode().expect("decode");
        match action {
            Action::SetState { new_state } => assert_eq!(new_state.value, 42),
            other => panic!("expected SetState, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_unknown_kind_is_error() {
        let raw = RawAction::new("doesNotExist", Value::Null);
        let err = raw
            .decode::<Counter, CounterAction>()
            .expect_err("should fail");
        assert_eq!(
            err,
            EngineError::UnknownKind {
                kind: "doesNotExist".into()
            }
        );
    }

    #[test]
    fn test_decode_malformed_set_state_is_codec_error() {
        let raw = RawAction::new(SET_STATE_KIND, json!({}));
        let err = raw
            .decode::<Counter, CounterAction>()
            .expect_err("should fail");
        assert!(matches!(err, EngineError::Codec { .. }));
    }

    #[test]
    fn test_wire_roundtrip_defaults_missing_args() {
        let raw: RawAction = serde_json::from_value(json!({ "kind": "increment" })).expect("parse");
        assert_eq!(raw.kind, "increment");
        assert_eq!(raw.args, Value::Null);
    }
}
