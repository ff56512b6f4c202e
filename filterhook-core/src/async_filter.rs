//! # Filter Layer (asynchronous)
//!
//! The async twin of [`Filter`](crate::Filter). Composition and ordering are
//! identical; the action and every filter return futures instead of values.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`AsyncFilter`] uses native `async fn` for zero-cost static dispatch.
//! Chains store their filters as [`DynAsyncFilter`] trait objects, which
//! every `AsyncFilter` implements automatically.

use crate::payload::Payload;
use futures::future::BoxFuture;
use std::{fmt, future::Future, sync::Arc};

/// The base operation of an async extension point.
///
/// Implemented by every `Fn(A) -> impl Future<Output = O>` whose future
/// outlives `'a`.
pub trait AsyncAction<'a, A, O>: Send + Sync {
    /// Start the action.
    fn call(&self, args: A) -> BoxFuture<'a, O>;
}

impl<'a, F, Fut, A, O> AsyncAction<'a, A, O> for F
where
    F: Fn(A) -> Fut + Send + Sync,
    Fut: Future<Output = O> + Send + 'a,
{
    fn call(&self, args: A) -> BoxFuture<'a, O> {
        Box::pin((self)(args))
    }
}

/// An async callable that wraps an [`AsyncAction`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `AsyncFilter<{A}, {O}>`",
    label = "missing `AsyncFilter` implementation",
    note = "Async filters implement `filter` taking `AsyncNext<'_, {A}, {O}>` and `{A}`."
)]
pub trait AsyncFilter<A: Payload, O: Payload>: Send + Sync + 'static {
    /// Run this filter around `next`.
    fn filter<'a>(
        &'a self,
        next: AsyncNext<'a, A, O>,
        args: A,
    ) -> impl Future<Output = O> + Send;
}

/// Dynamic object-safe version of [`AsyncFilter`].
pub trait DynAsyncFilter<A: Payload, O: Payload>: Send + Sync + 'static {
    /// Run this filter around `next` (dynamic dispatch version).
    fn filter_dyn<'a>(&'a self, next: AsyncNext<'a, A, O>, args: A) -> BoxFuture<'a, O>;
}

impl<A: Payload, O: Payload, T: AsyncFilter<A, O>> DynAsyncFilter<A, O> for T {
    fn filter_dyn<'a>(&'a self, next: AsyncNext<'a, A, O>, args: A) -> BoxFuture<'a, O> {
        Box::pin(self.filter(next, args))
    }
}

/// An [`AsyncFilter`] built from a closure, see [`async_filter_fn`].
#[derive(Clone)]
pub struct AsyncFilterFn<F> {
    f: F,
}

impl<F> fmt::Debug for AsyncFilterFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncFilterFn").finish_non_exhaustive()
    }
}

/// Turn a closure returning a boxed future into an [`AsyncFilter`].
///
/// ```rust
/// use filterhook_core::{AsyncNext, async_filter_fn};
///
/// let double = async_filter_fn(|next: AsyncNext<'_, u32, u32>, n: u32| {
///     Box::pin(async move { next.run(n).await * 2 })
/// });
/// # let _ = double;
/// ```
pub fn async_filter_fn<A, O, F>(f: F) -> AsyncFilterFn<F>
where
    A: Payload,
    O: Payload,
    F: for<'a> Fn(AsyncNext<'a, A, O>, A) -> BoxFuture<'a, O> + Send + Sync + 'static,
{
    AsyncFilterFn { f }
}

impl<A, O, F> AsyncFilter<A, O> for AsyncFilterFn<F>
where
    A: Payload,
    O: Payload,
    F: for<'a> Fn(AsyncNext<'a, A, O>, A) -> BoxFuture<'a, O> + Send + Sync + 'static,
{
    fn filter<'a>(
        &'a self,
        next: AsyncNext<'a, A, O>,
        args: A,
    ) -> impl Future<Output = O> + Send {
        (self.f)(next, args)
    }
}

/// Continuation over the remaining part of a composed async chain.
///
/// Like [`Next`](crate::Next), every filter nests one level deeper, so chain
/// length is bounded by stack size while the futures are polled.
pub struct AsyncNext<'a, A: Payload, O: Payload> {
    filters: &'a [Arc<dyn DynAsyncFilter<A, O>>],
    action: &'a dyn AsyncAction<'a, A, O>,
}

impl<'a, A: Payload, O: Payload> AsyncNext<'a, A, O> {
    /// Start a chain over `filters`; the first filter wraps `action` directly
    /// and the last one is outermost.
    pub fn new(
        filters: &'a [Arc<dyn DynAsyncFilter<A, O>>],
        action: &'a dyn AsyncAction<'a, A, O>,
    ) -> Self {
        Self { filters, action }
    }

    /// Run the rest of the chain.
    pub fn run(self, args: A) -> BoxFuture<'a, O> {
        match self.filters.split_last() {
            Some((outer, inner)) => outer.filter_dyn(
                AsyncNext {
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

impl<A: Payload, O: Payload> Clone for AsyncNext<'_, A, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Payload, O: Payload> Copy for AsyncNext<'_, A, O> {}

impl<A: Payload, O: Payload> fmt::Debug for AsyncNext<'_, A, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncNext")
            .field("remaining", &self.filters.len())
            .finish_non_exhaustive()
    }
}
