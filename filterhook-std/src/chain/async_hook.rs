//! Asynchronous filter chain.

use filterhook_core::{AsyncAction, AsyncFilter, AsyncNext, BoxFuture, DynAsyncFilter, Payload};
use std::{fmt, sync::Arc};

/// The ordered async filter chain of one extension point.
///
/// Same ordering rules as [`FilterHook`](super::FilterHook). Invocation
/// returns a future; the chain adds no timeout or cancellation of its own.
pub struct AsyncFilterHook<A: Payload, O: Payload> {
    filters: Vec<Arc<dyn DynAsyncFilter<A, O>>>,
}

impl<A: Payload, O: Payload> AsyncFilterHook<A, O> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter after every registered filter.
    pub fn append<F: AsyncFilter<A, O>>(&mut self, filter: F) -> &mut Self {
        self.filters.push(Arc::new(filter));
        self
    }

    /// Add a filter before every registered filter.
    pub fn prepend<F: AsyncFilter<A, O>>(&mut self, filter: F) -> &mut Self {
        self.filters.insert(0, Arc::new(filter));
        self
    }

    /// Wrap `action` in every filter and run it with `args`.
    ///
    /// ```rust
    /// # use filterhook_std::chain::AsyncFilterHook;
    /// # async fn demo() {
    /// let hook: AsyncFilterHook<u32, u32> = AsyncFilterHook::new();
    /// let action = |n: u32| async move { n + 1 };
    /// assert_eq!(hook.invoke(&action, 1).await, 2);
    /// # }
    /// ```
    pub fn invoke<'a, Act>(&'a self, action: &'a Act, args: A) -> BoxFuture<'a, O>
    where
        Act: AsyncAction<'a, A, O> + 'a,
    {
        AsyncNext::new(&self.filters, action).run(args)
    }

    /// Number of registered filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if no filter is registered.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<A: Payload, O: Payload> Default for AsyncFilterHook<A, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Payload, O: Payload> Clone for AsyncFilterHook<A, O> {
    fn clone(&self) -> Self {
        Self {
            filters: self.filters.clone(),
        }
    }
}

impl<A: Payload, O: Payload> fmt::Debug for AsyncFilterHook<A, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncFilterHook")
            .field("filters", &self.filters.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct DelayedMarker {
        marker: u32,
        delay: Duration,
    }

    impl AsyncFilter<Vec<u32>, Vec<u32>> for DelayedMarker {
        async fn filter<'a>(
            &'a self,
            next: AsyncNext<'a, Vec<u32>, Vec<u32>>,
            data: Vec<u32>,
        ) -> Vec<u32> {
            let mut data = next.run(data).await;
            tokio::time::sleep(self.delay).await;
            data.push(self.marker);
            data
        }
    }

    fn marker(marker: u32) -> DelayedMarker {
        DelayedMarker {
            marker,
            delay: Duration::from_millis(1),
        }
    }

    async fn action(mut data: Vec<u32>) -> Vec<u32> {
        data.push(0);
        data
    }

    #[tokio::test]
    async fn test_async_hook_without_filters_just_calls_action() {
        let hook: AsyncFilterHook<Vec<u32>, Vec<u32>> = AsyncFilterHook::new();
        assert_eq!(hook.invoke(&action, Vec::new()).await, vec![0]);
    }

    #[tokio::test]
    async fn test_async_hook_calls_filters_in_order_of_adding() {
        let mut hook = AsyncFilterHook::new();
        hook.append(marker(1)).append(marker(2));
        assert_eq!(hook.invoke(&action, Vec::new()).await, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_async_filter_can_be_inserted_before_other_filters() {
        let mut hook = AsyncFilterHook::new();
        hook.append(marker(1));
        hook.prepend(marker(2));
        assert_eq!(hook.len(), 2);
        assert_eq!(hook.invoke(&action, Vec::new()).await, vec![0, 2, 1]);
    }

    #[tokio::test]
    async fn test_async_action_may_borrow_caller_state() {
        let offset = 5u32;
        let hook: AsyncFilterHook<u32, u32> = AsyncFilterHook::new();
        let action = |n: u32| {
            let offset = &offset;
            async move { n + *offset }
        };
        assert_eq!(hook.invoke(&action, 1).await, 6);
    }
}
