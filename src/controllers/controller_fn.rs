//! # Function-backed controller (`ControllerFn`)
//!
//! [`ControllerFn`] wraps a closure `FnMut(&mut Context) -> bool`, which is
//! enough for leaf controllers and test stubs. Controllers that track real
//! per-pass state are usually better off as named types implementing
//! [`Controller`] directly.

use std::borrow::Cow;

use crate::controllers::{Context, Controller, ControllerRef};
use crate::reducer::Reducer;

/// Closure-backed controller implementation.
#[derive(Debug)]
pub struct ControllerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ControllerFn<F> {
    /// Creates a new function-backed controller.
    ///
    /// Prefer [`ControllerFn::boxed`] when you immediately need a
    /// [`ControllerRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the controller and returns it as an owned handle.
    pub fn boxed<R>(name: impl Into<Cow<'static, str>>, f: F) -> ControllerRef<R>
    where
        R: Reducer,
        F: FnMut(&mut Context<'_, R>) -> bool + Send + 'static,
    {
        Box::new(Self::new(name, f))
    }
}

impl<R, F> Controller<R> for ControllerFn<F>
where
    R: Reducer,
    F: FnMut(&mut Context<'_, R>) -> bool + Send + 'static,
{
    fn invoke(&mut self, cx: &mut Context<'_, R>) -> bool {
        (self.f)(cx)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
