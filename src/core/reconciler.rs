//! # Reconciler: drives actions, controllers, and publishing to quiescence.
//!
//! The [`Reconciler`] owns the committed snapshot, the pending-action
//! queue, the controller root, and the remote channel. Dispatching while
//! idle triggers a synchronous reconciliation pass; dispatching from inside
//! a controller invocation only enqueues.
//!
//! ## Key responsibilities
//! - apply pending actions in strict enqueue order, one committed snapshot
//!   per batch
//! - invoke the controller root until quiescence (no pending actions and no
//!   controller requesting another pass)
//! - guard against livelock between controllers and the actions they
//!   dispatch
//! - publish the final snapshot **exactly once** per external trigger
//!
//! ## High-level flow
//! ```text
//! dispatch / dispatch_multiple / dispatch_raw
//!     │ append to queue
//!     ▼
//! [idle?] ──no──► return (in-flight pass picks the actions up)
//!     │ yes
//!     ▼
//! loop while run_again OR queue non-empty:
//!     ├─ passes > max_passes  → EngineError::Livelock
//!     ├─ batch = queue.take()
//!     ├─ draft = clone(snapshot); apply batch; commit Arc   (one commit)
//!     └─ run_again = root.invoke(cx)       (re-entrancy flag held here)
//!     ▼
//! quiescence → Remote::publish(Topic::StateUpdate, snapshot)   (once)
//! ```
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
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<(), statevisor::EngineError> {
//! let (remote, mut rx) = Remote::channel();
//! let mut rec = Reconciler::new(CounterReducer);
//! rec.initialize(ControllerFn::boxed("root", |_cx| false), remote)?;
//!
//! rec.dispatch(Action::App(CounterAction::Increment))?;
//!
//! assert_eq!(rec.state()?.value, 1);
//! let frame = rx.try_recv().expect("one state frame");
//! assert_eq!(frame.topic, Topic::StateUpdate);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::actions::{Action, ActionOf, ActionQueue, RawAction};
use crate::config::Config;
use crate::controllers::{Context, Controller, ControllerRef};
use crate::error::EngineError;
use crate::reducer::Reducer;
use crate::remote::{Remote, Topic};

/// The state-reconciliation engine handle.
///
/// One handle per worker lifetime: construct it, [`initialize`] it exactly
/// once, then feed it actions. All mutation is serialized through the
/// handle — there is no parallel execution of passes, and the re-entrancy
/// flag is the sole synchronization primitive.
///
/// [`initialize`]: Reconciler::initialize
pub struct Reconciler<R: Reducer> {
    reducer: R,
    cfg: Config,
    state: Option<Arc<R::State>>,
    root: Option<ControllerRef<R>>,
    remote: Option<Remote>,
    queue: ActionQueue<R::State, R::Action>,
    running: bool,
}

impl<R: Reducer> Reconciler<R> {
    /// Creates a handle with the default [`Config`].
    pub fn new(reducer: R) -> Self {
        Self::with_config(reducer, Config::default())
    }

    /// Creates a handle with an explicit [`Config`].
    pub fn with_config(reducer: R, cfg: Config) -> Self {
        Self {
            reducer,
            cfg,
            state: None,
            root: None,
            remote: None,
            queue: ActionQueue::new(),
            running: false,
        }
    }

    /// Wires the controller root and the remote channel, and commits the
    /// initial snapshot from [`Reducer::initial`].
    ///
    /// Must be called exactly once before any dispatch; a second call fails
    /// with [`EngineError::AlreadyInitialized`].
    pub fn initialize(
        &mut self,
        root: ControllerRef<R>,
        remote: Remote,
    ) -> Result<(), EngineError> {
        if self.state.is_some() || self.root.is_some() {
            return Err(EngineError::AlreadyInitialized);
        }
        self.state = Some(Arc::new(self.reducer.initial()));
        self.root = Some(root);
        self.remote = Some(remote);
        Ok(())
    }

    /// The current committed snapshot.
    pub fn state(&self) -> Result<&R::State, EngineError> {
        self.state.as_deref().ok_or(EngineError::Uninitialized {
            what: "state snapshot",
        })
    }

    /// A shared handle to the current committed snapshot.
    pub fn snapshot(&self) -> Result<Arc<R::State>, EngineError> {
        self.state.clone().ok_or(EngineError::Uninitialized {
            what: "state snapshot",
        })
    }

    /// Dispatches one action. See [`dispatch_multiple`].
    ///
    /// [`dispatch_multiple`]: Reconciler::dispatch_multiple
    pub fn dispatch(&mut self, action: ActionOf<R>) -> Result<(), EngineError> {
        self.dispatch_multiple([action])
    }

    /// Appends actions to the pending queue, preserving their relative
    /// order, and synchronously reconciles to quiescence.
    ///
    /// While a pass is running the call only enqueues — the in-flight pass
    /// picks the actions up on its next iteration, so state stays atomic
    /// across the whole pass and all controllers in one iteration see the
    /// same snapshot.
    pub fn dispatch_multiple(
        &mut self,
        actions: impl IntoIterator<Item = ActionOf<R>>,
    ) -> Result<(), EngineError> {
        let before = self.queue.len();
        self.queue.extend(actions);
        trace!(
            queued = self.queue.len() - before,
            mid_pass = self.running,
            "actions enqueued"
        );

        if self.running {
            return Ok(());
        }
        self.reconcile()
    }

    /// Decodes a wire record and dispatches it.
    ///
    /// An unrecognized kind fails with [`EngineError::UnknownKind`] before
    /// anything is enqueued; the snapshot is left untouched.
    pub fn dispatch_raw(&mut self, raw: RawAction) -> Result<(), EngineError>
    where
        R::State: DeserializeOwned,
        R::Action: DeserializeOwned,
    {
        let action = raw.decode()?;
        self.dispatch(action)
    }

    /// Publishes an application payload to the remote consumer.
    ///
    /// Independent of reconciliation: any topic other than the reserved
    /// state update may go out at any time.
    pub fn publish<P: Serialize + ?Sized>(
        &self,
        topic: Topic,
        payload: &P,
        buffers: Vec<Vec<u8>>,
    ) -> Result<(), EngineError> {
        let remote = self.remote.as_ref().ok_or(EngineError::Uninitialized {
            what: "remote channel",
        })?;
        remote.publish(topic, payload, buffers)
    }

    /// Tears the handle back down for test isolation.
    ///
    /// Drops the snapshot, controller root, remote channel, and anything
    /// still pending. The handle can be initialized again afterwards.
    pub fn reset_for_testing(&mut self) {
        self.state = None;
        self.root = None;
        self.remote = None;
        self.queue.clear();
        self.running = false;
    }

    /// Runs the reconciliation loop to quiescence, then publishes the final
    /// snapshot exactly once.
    fn reconcile(&mut self) -> Result<(), EngineError> {
        if self.running {
            return Err(EngineError::ReentrantDispatch);
        }
        let mut root = self.root.take().ok_or(EngineError::Uninitialized {
            what: "controller root",
        })?;
        let outcome = self.drive(&mut *root);
        self.root = Some(root);
        outcome?;
        self.publish_state()
    }

    /// The loop itself: drain, apply, invoke — until no controller requests
    /// another pass **and** nothing is pending. Both re-trigger conditions
    /// are checked together each iteration, so an action enqueued during
    /// the final quiescent invocation still triggers one more.
    fn drive(&mut self, root: &mut dyn Controller<R>) -> Result<(), EngineError> {
        let mut run_again = false;
        let mut passes: u32 = 0;
        while run_again || !self.queue.is_empty() {
            if passes > self.cfg.max_passes {
                return Err(EngineError::Livelock { passes });
            }

            let batch = self.queue.take();
            trace!(pass = passes, batch = batch.len(), "applying batch");
            self.apply_batch(batch)?;

            let state = self.state.as_ref().ok_or(EngineError::Uninitialized {
                what: "state snapshot",
            })?;
            let remote = self.remote.as_ref().ok_or(EngineError::Uninitialized {
                what: "remote channel",
            })?;
            let mut cx = Context::new(state, &mut self.queue, remote);

            self.running = true;
            run_again = root.invoke(&mut cx);
            self.running = false;

            passes += 1;
        }
        debug!(passes, "controllers quiescent");
        Ok(())
    }

    /// Applies one batch against a single draft and commits one snapshot.
    ///
    /// The reserved full-replacement action swaps the draft wholesale and
    /// never reaches [`Reducer::apply`]. An empty batch commits nothing.
    fn apply_batch(&mut self, batch: Vec<ActionOf<R>>) -> Result<(), EngineError> {
        if batch.is_empty() {
            return Ok(());
        }
        let current = self.state.as_ref().ok_or(EngineError::Uninitialized {
            what: "state snapshot",
        })?;

        let mut draft = R::State::clone(current);
        for action in batch {
            match action {
                Action::SetState { new_state } => draft = new_state,
                Action::App(action) => self.reducer.apply(&mut draft, action),
            }
        }
        self.state = Some(Arc::new(draft));
        Ok(())
    }

    /// Sends the reserved state-update frame carrying the final snapshot.
    fn publish_state(&self) -> Result<(), EngineError> {
        let state = self.state.as_ref().ok_or(EngineError::Uninitialized {
            what: "state snapshot",
        })?;
        let remote = self.remote.as_ref().ok_or(EngineError::Uninitialized {
            what: "remote channel",
        })?;
        debug!("publishing state update");
        remote.publish(Topic::StateUpdate, state.as_ref(), Vec::new())
    }
}
