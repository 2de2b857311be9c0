//! # Per-invocation controller handle.
//!
//! [`Context`] is what a controller sees while the loop invokes it: the
//! committed snapshot, the pending-action queue, and the remote channel.
//! It replaces any notion of process-wide globals — everything a controller
//! may touch is passed in explicitly.
//!
//! ## Atomicity
//! Dispatching through the context only enqueues. The in-flight pass picks
//! the new actions up on its **next** iteration, after this invocation has
//! returned, so every controller invoked in one iteration observes the same
//! snapshot.

use std::sync::Arc;

use serde::Serialize;

use crate::actions::{Action, ActionQueue};
use crate::error::EngineError;
use crate::reducer::Reducer;
use crate::remote::{Remote, Topic};

/// Handle passed to [`Controller::invoke`](crate::Controller::invoke).
pub struct Context<'a, R: Reducer> {
    state: &'a Arc<R::State>,
    queue: &'a mut ActionQueue<R::State, R::Action>,
    remote: &'a Remote,
}

impl<'a, R: Reducer> Context<'a, R> {
    pub(crate) fn new(
        state: &'a Arc<R::State>,
        queue: &'a mut ActionQueue<R::State, R::Action>,
        remote: &'a Remote,
    ) -> Self {
        Self {
            state,
            queue,
            remote,
        }
    }

    /// The committed snapshot this invocation runs against.
    #[must_use]
    pub fn state(&self) -> &R::State {
        self.state
    }

    /// A shared handle to the committed snapshot.
    ///
    /// Cheap to clone; lets controllers stash the snapshot they acted on.
    #[must_use]
    pub fn snapshot(&self) -> Arc<R::State> {
        Arc::clone(self.state)
    }

    /// Enqueues one action for the next iteration of the in-flight pass.
    pub fn dispatch(&mut self, action: Action<R::State, R::Action>) {
        self.queue.push(action);
    }

    /// Enqueues a group of actions, preserving their relative order.
    pub fn dispatch_multiple(
        &mut self,
        actions: impl IntoIterator<Item = Action<R::State, R::Action>>,
    ) {
        self.queue.extend(actions);
    }

    /// Publishes an application payload to the remote consumer.
    ///
    /// Not subject to the quiescence protocol; frames go out immediately.
    pub fn publish<P: Serialize + ?Sized>(
        &self,
        topic: Topic,
        payload: &P,
        buffers: Vec<Vec<u8>>,
    ) -> Result<(), EngineError> {
        self.remote.publish(topic, payload, buffers)
    }
}
