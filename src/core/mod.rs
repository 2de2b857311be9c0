//! Engine core: the reconciliation loop and lifecycle.
//!
//! The only public API from this module is [`Reconciler`], which owns the
//! snapshot, the pending queue, the controller root, and the remote
//! channel, and drives them to quiescence on every external trigger.

mod reconciler;

pub use reconciler::Reconciler;
