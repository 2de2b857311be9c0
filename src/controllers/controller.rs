//! # Core controller trait.
//!
//! `Controller` is the extension point for plugging domain logic into the
//! reconciliation loop. The engine requires exactly one capability from it:
//! an [`invoke`](Controller::invoke) that returns whether another pass is
//! needed.
//!
//! ## Contract
//! - `invoke` must be safe to call repeatedly in a tight loop without
//!   unbounded per-call resource growth.
//! - Side effects on state are expressed **only** by dispatching actions
//!   through the [`Context`]; they are observed by the loop after the
//!   invocation returns.
//! - Returning `true` requests another pass; the loop also re-runs while
//!   actions are pending, whichever of the two holds.

use crate::controllers::Context;
use crate::reducer::Reducer;

/// Contract for reconciliation controllers.
///
/// Implementations are stateful: the engine invokes the same value pass
/// after pass, so controllers can track their own progress across passes.
pub trait Controller<R: Reducer>: Send + 'static {
    /// Runs one reconciliation step.
    ///
    /// Returns `true` to request another pass.
    fn invoke(&mut self, cx: &mut Context<'_, R>) -> bool;

    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Owned handle to a controller.
pub type ControllerRef<R> = Box<dyn Controller<R>>;
