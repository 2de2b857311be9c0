//! Error types used by the statevisor engine.
//!
//! A single enum, [`EngineError`], covers every failure the engine can
//! surface. All variants are unrecoverable at this layer: nothing is retried
//! internally, and callers are expected to propagate the error to a
//! top-level handler that reports and halts the affected worker.
//!
//! The engine never trades a failed pass for a partially applied one —
//! every reconciliation pass runs to full completion or not at all.

use thiserror::Error;

/// # Errors produced by the reconciliation engine.
///
/// Every variant is fatal: the engine makes no attempt to continue after
/// raising one, and the handle should be considered unusable.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A reconciliation pass attempted to start while another was active.
    ///
    /// Dispatching from inside a controller invocation only enqueues; this
    /// error means something tried to re-enter the loop itself.
    #[error("re-entrant reconciliation pass detected")]
    ReentrantDispatch,

    /// The pass bound was exceeded before controllers reached quiescence.
    ///
    /// Controllers and the actions they dispatch formed a feedback cycle
    /// that never reached a fixed point.
    #[error("controllers failed to reach quiescence after {passes} passes")]
    Livelock {
        /// Number of passes completed when the bound tripped.
        passes: u32,
    },

    /// A wire action's kind matched no known transition.
    ///
    /// Indicates a contract mismatch between the producer and the reducer's
    /// action set. Nothing is enqueued and the snapshot is left untouched.
    #[error("unknown action kind: {kind}")]
    UnknownKind {
        /// The offending kind tag, verbatim from the wire record.
        kind: String,
    },

    /// State, controller root, or remote channel accessed before
    /// [`initialize`](crate::Reconciler::initialize).
    #[error("{what} accessed before initialize")]
    Uninitialized {
        /// Which part of the handle was missing.
        what: &'static str,
    },

    /// [`initialize`](crate::Reconciler::initialize) was called twice on the
    /// same handle.
    #[error("engine already initialized")]
    AlreadyInitialized,

    /// A publish payload failed to encode.
    #[error("payload encoding failed: {reason}")]
    Codec {
        /// The underlying serializer message.
        reason: String,
    },
}

impl EngineError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use statevisor::EngineError;
    ///
    /// let err = EngineError::Livelock { passes: 101 };
    /// assert_eq!(err.as_label(), "livelock");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EngineError::ReentrantDispatch => "reentrant_dispatch",
            EngineError::Livelock { .. } => "livelock",
            EngineError::UnknownKind { .. } => "unknown_action_kind",
            EngineError::Uninitialized { .. } => "uninitialized_access",
            EngineError::AlreadyInitialized => "already_initialized",
            EngineError::Codec { .. } => "codec",
        }
    }
}
