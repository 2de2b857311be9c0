//! # Reducer: the pure mapping from snapshot + action to next snapshot.
//!
//! A [`Reducer`] bundles the application's state type with its closed set of
//! transition actions. Dispatch is an exhaustive `match` in [`Reducer::apply`],
//! so a missing transition is a compile error rather than a runtime lookup
//! failure; unrecognized *wire* kinds are rejected at the dispatch boundary
//! before anything is enqueued (see
//! [`RawAction::decode`](crate::actions::RawAction::decode)).
//!
//! ## Snapshot semantics
//! The engine never hands out a mutable snapshot. Per batch it clones a
//! draft from the current snapshot, routes every action through `apply`,
//! and commits the draft as a fresh immutable snapshot. State types that
//! want cheap clones should hold their bulky substructure behind `Arc`, so
//! a commit copies only the path that changed and shares the rest.
//!
//! ## Example
//! ```
//! use statevisor::Reducer;
//!
//! #[derive(Clone, Default, serde::Serialize)]
//! struct Counter {
//!     value: u64,
//! }
//!
//! #[derive(Debug, serde::Deserialize)]
//! #[serde(tag = "kind", content = "args", rename_all = "camelCase")]
//! enum CounterAction {
//!     Increment,
//!     Add { amount: u64 },
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = Counter;
//!     type Action = CounterAction;
//!
//!     fn initial(&self) -> Counter {
//!         Counter::default()
//!     }
//!
//!     fn apply(&self, draft: &mut Counter, action: CounterAction) {
//!         match action {
//!             CounterAction::Increment => draft.value += 1,
//!             CounterAction::Add { amount } => draft.value += amount,
//!         }
//!     }
//! }
//!
//! let reducer = CounterReducer;
//! let mut draft = reducer.initial();
//! reducer.apply(&mut draft, CounterAction::Add { amount: 3 });
//! assert_eq!(draft.value, 3);
//! ```

use serde::Serialize;

/// Pure state-transition contract for a [`Reconciler`](crate::Reconciler).
///
/// Implementations must be pure with respect to the draft: the next
/// snapshot is a function of the previous snapshot and the action, nothing
/// else. Side effects belong in controllers.
pub trait Reducer: Send + 'static {
    /// The application-state snapshot type.
    ///
    /// `Clone` is the draft mechanism: one clone per non-empty batch.
    /// `Serialize` lets the engine publish the committed snapshot to the
    /// remote display layer.
    type State: Clone + Serialize + Send + Sync + 'static;

    /// The closed set of transition actions.
    ///
    /// The reserved full-replacement action is not part of this set; it is
    /// handled by the engine itself (see [`Action::SetState`](crate::Action)).
    type Action: Send + 'static;

    /// Returns the empty/default snapshot committed at
    /// [`initialize`](crate::Reconciler::initialize).
    fn initial(&self) -> Self::State;

    /// Applies one transition to the draft.
    ///
    /// Called once per action, in strict enqueue order, against the batch's
    /// shared draft. Must not block and must not observe anything beyond
    /// `draft` and `action`.
    fn apply(&self, draft: &mut Self::State, action: Self::Action);
}
