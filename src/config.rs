//! # Engine configuration.
//!
//! [`Config`] defines the reconciliation loop's runtime bounds. There is
//! intentionally little to tune: the engine is single-threaded and
//! synchronous, so the only knob is the livelock guard.
//!
//! # Example
//! ```
//! use statevisor::Config;
//!
//! let mut cfg = Config::default();
//! cfg.max_passes = 50;
//!
//! assert_eq!(cfg.max_passes, 50);
//! ```

/// Runtime configuration for a [`Reconciler`](crate::Reconciler).
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Maximum number of reconciliation passes per external trigger.
    ///
    /// Controllers and the actions they dispatch can form unbounded
    /// feedback cycles; once a pass would exceed this bound the loop fails
    /// with [`EngineError::Livelock`](crate::EngineError::Livelock) instead
    /// of hanging the worker.
    pub max_passes: u32,
}

impl Default for Config {
    /// Provides the default configuration:
    /// - `max_passes = 100`
    fn default() -> Self {
        Self { max_passes: 100 }
    }
}
