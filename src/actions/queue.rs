//! # Pending-action queue.
//!
//! [`ActionQueue`] is the ordered buffer between producers and the
//! reconciliation loop. Insertion order across producers defines
//! application order — no priorities, no reordering.
//!
//! ## Rules
//! - **Append-only until drained**: producers only ever push to the tail.
//! - **Batch drain**: [`ActionQueue::take`] hands the entire buffer to the
//!   loop and leaves a fresh, disjoint one behind, so actions enqueued
//!   during the pass land in the next batch rather than the one being
//!   applied.

use crate::actions::Action;

/// FIFO buffer of pending actions.
#[derive(Debug)]
pub struct ActionQueue<S, A> {
    pending: Vec<Action<S, A>>,
}

impl<S, A> Default for ActionQueue<S, A> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<S, A> ActionQueue<S, A> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one action to the tail.
    #[inline]
    pub fn push(&mut self, action: Action<S, A>) {
        self.pending.push(action);
    }

    /// Appends a group of actions, preserving their relative order.
    #[inline]
    pub fn extend(&mut self, actions: impl IntoIterator<Item = Action<S, A>>) {
        self.pending.extend(actions);
    }

    /// Takes the whole pending buffer, leaving a fresh empty one.
    #[must_use]
    pub fn take(&mut self) -> Vec<Action<S, A>> {
        std::mem::take(&mut self.pending)
    }

    /// Number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops everything pending without applying it.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Q = ActionQueue<u32, &'static str>;

    #[test]
    fn test_take_preserves_order_and_resets() {
        let mut q = Q::new();
        q.push(Action::App("a"));
        q.extend([Action::App("b"), Action::App("c")]);
        assert_eq!(q.len(), 3);

        let batch = q.take();
        assert!(q.is_empty());

        let tags: Vec<_> = batch
            .into_iter()
            .map(|a| match a {
                Action::App(tag) => tag,
                Action::SetState { .. } => "setState",
            })
            .collect();
        assert_eq!(tags, ["a", "b", "c"]);
    }

    #[test]
    fn test_pushes_after_take_land_in_next_batch() {
        let mut q = Q::new();
        q.push(Action::App("first"));
        let first = q.take();
        q.push(Action::App("second"));

        assert_eq!(first.len(), 1);
        assert_eq!(q.len(), 1);
    }
}
