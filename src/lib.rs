//! # statevisor
//!
//! **Statevisor** is a single-threaded, message-driven state-reconciliation
//! engine for Rust.
//!
//! It accepts a stream of discrete actions, applies them to an immutable
//! application-state snapshot, repeatedly invokes a tree of stateful
//! controllers until none of them requests another pass, and then publishes
//! the resulting snapshot to a remote display layer. The crate is designed
//! as the core of a worker that owns all application state on behalf of a
//! UI running elsewhere.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   producers                  (same thread, or decoded wire records)
//!     │ dispatch / dispatch_multiple / dispatch_raw
//!     ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Reconciler (engine handle)                                   │
//! │  - ActionQueue (FIFO, batch-drained)                          │
//! │  - Snapshot (immutable, one commit per batch)                 │
//! │  - Reducer (exhaustive match over a closed action set)        │
//! │  - re-entrancy flag + livelock guard (Config::max_passes)     │
//! └──────┬──────────────────────────────────────────────┬─────────┘
//!        ▼                                              ▼
//! ┌──────────────────────┐  run_again?        ┌──────────────────────┐
//! │  Controller root     │ ◄────────────────► │  Remote (mpsc)       │
//! │  (ControllerSet /    │  cx.dispatch(..)   │  Frame{seq, topic,   │
//! │   ControllerFn / …)  │  cx.publish(..)    │        payload, buf} │
//! └──────────────────────┘                    └──────────┬───────────┘
//!                                                        ▼
//!                                              display-layer consumer
//! ```
//!
//! ### Reconciliation pass
//! ```text
//! dispatch(actions)
//!   │ append to queue; if a pass is running, stop here (it will pick
//!   │ the actions up on its next iteration)
//!   ▼
//! loop while run_again OR queue non-empty:
//!   ├─ livelock guard (fatal after Config::max_passes)
//!   ├─ take the whole queue as one batch
//!   ├─ clone draft ── apply every action in order ── commit one snapshot
//!   └─ run_again = root.invoke(cx)
//!   ▼
//! quiescence ──► publish Topic::StateUpdate (exactly once per trigger)
//! ```
//!
//! ## Features
//! | Area              | Description                                                           | Key types / traits                         |
//! |-------------------|-----------------------------------------------------------------------|--------------------------------------------|
//! | **Reducing**      | Closed action set applied by exhaustive match, copy-on-write commits. | [`Reducer`], [`Action`]                    |
//! | **Dispatch**      | FIFO queue, wire-record decoding, synchronous triggering.             | [`RawAction`], [`ActionQueue`]             |
//! | **Controllers**   | Stateful units invoked to quiescence; trees via ordered fan-out.      | [`Controller`], [`ControllerSet`]          |
//! | **Publishing**    | Typed frames with transferred buffers, quiescence-gated state frame.  | [`Remote`], [`Frame`], [`Topic`]           |
//! | **Errors**        | Fatal-only taxonomy; nothing is retried at this layer.                | [`EngineError`]                            |
//! | **Engines**       | Boundary for out-of-process compute engines used by controllers.      | [`engines::EngineAllocator`]               |
//!
//! ## Example
//! ```
//! use statevisor::{Action, ControllerFn, Reconciler, Reducer, Remote, Topic};
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
//! # fn main() -> Result<(), statevisor::EngineError> {
//! // The receiver goes to whatever forwards frames to the display layer.
//! let (remote, mut rx) = Remote::channel();
//!
//! let mut rec = Reconciler::new(CounterReducer);
//! rec.initialize(ControllerFn::boxed("root", |_cx| false), remote)?;
//!
//! rec.dispatch_multiple([
//!     Action::App(CounterAction::Increment),
//!     Action::App(CounterAction::Add { amount: 2 }),
//! ])?;
//!
//! assert_eq!(rec.state()?.value, 3);
//!
//! // Exactly one state frame per trigger, carrying the final snapshot.
//! let frame = rx.try_recv().expect("state frame");
//! assert_eq!(frame.topic, Topic::StateUpdate);
//! assert!(rx.try_recv().is_err());
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod controllers;
pub mod engines;
pub mod remote;

mod config;
mod core;
mod error;
mod reducer;

// ---- Public re-exports ----

pub use actions::{Action, ActionOf, ActionQueue, RawAction, SET_STATE_KIND};
pub use config::Config;
pub use controllers::{Context, Controller, ControllerFn, ControllerRef, ControllerSet};
pub use error::EngineError;
pub use reducer::Reducer;
pub use remote::{Frame, Remote, Topic};
pub use self::core::Reconciler;
