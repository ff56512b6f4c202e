//! # Filter Layer (synchronous)
//!
//! A filter wraps the action of an extension point. It receives the request
//! arguments together with a [`Next`] continuation standing for "the action,
//! already wrapped by every inner filter", and decides what to do with it:
//! pre-process the arguments, post-process the result, call it several
//! times, or not call it at all.
//!
//! The chain only guarantees call order. It never checks that a filter
//! delegates, and it never touches what flows back.

use std::{fmt, sync::Arc};

/// The base operation of an extension point.
///
/// Supplied by the caller on every invocation and never stored. Any
/// `Fn(A) -> O` is an action; several request arguments travel as a tuple.
pub trait Action<A, O> {
    /// Run the action.
    fn call(&self, args: A) -> O;
}

impl<F, A, O> Action<A, O> for F
where
    F: Fn(A) -> O,
{
    fn call(&self, args: A) -> O {
        (self)(args)
    }
}

/// A callable that wraps an [`Action`].
///
/// Functions and closures with the shape
/// `for<'a> Fn(Next<'a, A, O>, A) -> O` are filters. Closures usually need
/// [`filter_fn`] so the compiler infers the higher-ranked signature.
///
/// # Example
///
/// ```rust
/// use filterhook_core::{Filter, Next};
///
/// fn add_marker(next: Next<'_, Vec<u32>, Vec<u32>>, data: Vec<u32>) -> Vec<u32> {
///     let mut data = next.run(data);
///     data.push(1);
///     data
/// }
///
/// fn assert_filter<F: Filter<Vec<u32>, Vec<u32>>>(_: &F) {}
/// assert_filter(&add_marker);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Filter<{A}, {O}>`",
    label = "missing `Filter` implementation",
    note = "Filters take the wrapped action as `Next<'_, {A}, {O}>` followed by the arguments `{A}`."
)]
pub trait Filter<A, O>: Send + Sync {
    /// Run this filter around `next`.
    fn filter(&self, next: Next<'_, A, O>, args: A) -> O;
}

impl<F, A, O> Filter<A, O> for F
where
    F: for<'a> Fn(Next<'a, A, O>, A) -> O + Send + Sync + 'static,
{
    fn filter(&self, next: Next<'_, A, O>, args: A) -> O {
        (self)(next, args)
    }
}

/// Pin a closure to the higher-ranked filter signature.
///
/// ```rust
/// use filterhook_core::{Next, filter_fn};
///
/// let shout = filter_fn(|next: Next<'_, String, String>, text: String| {
///     next.run(text).to_uppercase()
/// });
/// # let _ = shout;
/// ```
pub fn filter_fn<A, O, F>(f: F) -> F
where
    F: for<'a> Fn(Next<'a, A, O>, A) -> O + Send + Sync + 'static,
{
    f
}

/// Continuation over the remaining part of a composed chain.
///
/// Holds the filters that are still to run (innermost first) and the base
/// action. `Next` is `Copy`, so a filter may run the rest of the chain more
/// than once.
///
/// Each filter runs the rest of the chain from its own stack frame, so a
/// chain nests one frame per filter and its length is bounded by stack size.
pub struct Next<'a, A, O> {
    filters: &'a [Arc<dyn Filter<A, O>>],
    action: &'a dyn Action<A, O>,
}

impl<'a, A, O> Next<'a, A, O> {
    /// Start a chain over `filters`; the first filter wraps `action` directly
    /// and the last one is outermost.
    pub fn new(filters: &'a [Arc<dyn Filter<A, O>>], action: &'a dyn Action<A, O>) -> Self {
        Self { filters, action }
    }

    /// Run the rest of the chain.
    pub fn run(self, args: A) -> O {
        match self.filters.split_last() {
            Some((outer, inner)) => outer.filter(
                Next {
                    filters: inner,
                    action: self.action,
                },
                args,
            ),
            None => self.action.call(args),
        }
    }

    /// Number of filters between this point and the action.
    pub fn remaining(&self) -> usize {
        self.filters.len()
    }
}

impl<A, O> Clone for Next<'_, A, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, O> Copy for Next<'_, A, O> {}

impl<A, O> fmt::Debug for Next<'_, A, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("remaining", &self.filters.len())
            .finish_non_exhaustive()
    }
}
