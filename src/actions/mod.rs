//! # Actions: transition requests and the pending queue.
//!
//! This module provides the action-related types:
//! - [`Action`] - closed sum of the reserved full-replacement transition and
//!   the application's own action set
//! - [`RawAction`] - wire-level tagged record, decoded at the dispatch
//!   boundary
//! - [`ActionQueue`] - ordered FIFO buffer of pending actions

mod action;
mod queue;

pub use action::{Action, ActionOf, RawAction, SET_STATE_KIND};
pub use queue::ActionQueue;
