//! # ControllerSet: ordered fan-out over child controllers
//!
//! [`ControllerSet`] invokes every child once per pass, in insertion order,
//! and requests another pass if **any** child did. This is the building
//! block for controller trees: a set can hold further sets, and the loop
//! only ever sees the root.
//!
//! ## Diagram
//! ```text
//!    invoke(cx)
//!        │                      (same cx, same snapshot)
//!        ├──────► child 1 ─► run_again?
//!        ├──────► child 2 ─► run_again?
//!        └──────► child N ─► run_again?
//!                              OR ──► returned to the loop
//! ```

use crate::controllers::{Context, Controller, ControllerRef};
use crate::reducer::Reducer;

/// Composite controller invoking an ordered list of children.
pub struct ControllerSet<R: Reducer> {
    children: Vec<ControllerRef<R>>,
}

impl<R: Reducer> ControllerSet<R> {
    /// Creates a set from an ordered list of children.
    #[must_use]
    pub fn new(children: Vec<ControllerRef<R>>) -> Self {
        Self { children }
    }

    /// Appends a child at the end of the invocation order.
    pub fn push(&mut self, child: ControllerRef<R>) {
        self.children.push(child);
    }

    /// True if there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

impl<R: Reducer> Controller<R> for ControllerSet<R> {
    fn invoke(&mut self, cx: &mut Context<'_, R>) -> bool {
        let mut run_again = false;
        for child in &mut self.children {
            // No short-circuit: every child observes every pass.
            run_again |= child.invoke(cx);
        }
        run_again
    }

    fn name(&self) -> &str {
        "controller_set"
    }
}
