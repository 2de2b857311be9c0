//! # Remote: the channel to the display layer.
//!
//! This module groups the outbound **data model** and the **channel** used
//! to hand published frames to the remote consumer:
//! - [`Topic`], [`Frame`] frame classification and payload
//! - [`Remote`] thin wrapper over `tokio::sync::mpsc`
//!
//! The reserved state-update frame is produced by the reconciliation loop
//! exactly once per external trigger, after quiescence. Every other topic
//! may be published at any time and is not subject to the quiescence
//! protocol.

mod channel;
mod frame;

pub use channel::Remote;
pub use frame::{Frame, Topic};
