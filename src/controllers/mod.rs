//! # Controller abstractions.
//!
//! This module provides the controller-side contract of the engine:
//! - [`Controller`] - trait for stateful reconciliation units
//! - [`ControllerFn`] - closure-backed controller implementation
//! - [`ControllerSet`] - ordered fan-out over child controllers
//! - [`ControllerRef`] - owned handle to a controller (`Box<dyn Controller>`)
//! - [`Context`] - the per-invocation handle controllers act through

mod context;
mod controller;
mod controller_fn;
mod set;

pub use context::Context;
pub use controller::{Controller, ControllerRef};
pub use controller_fn::ControllerFn;
pub use set::ControllerSet;
