//! Synchronous filter chain.

use filterhook_core::{Action, Filter, Next};
use std::{fmt, sync::Arc};

/// The ordered filter chain of one extension point.
///
/// Filters are only ever added by [`append`](Self::append) or
/// [`prepend`](Self::prepend). On [`invoke`](Self::invoke) the first filter
/// in the sequence wraps the action directly and the last one is outermost,
/// so filters that delegate first and then post-process see the result in
/// sequence order.
///
/// # Example
///
/// ```rust
/// use filterhook_core::Next;
/// use filterhook_std::chain::FilterHook;
///
/// fn exclaim(next: Next<'_, String, String>, text: String) -> String {
///     next.run(text) + "!"
/// }
///
/// let mut hook = FilterHook::new();
/// hook.append(exclaim);
/// assert_eq!(hook.invoke(|text: String| text.to_uppercase(), "hi".into()), "HI!");
/// ```
pub struct FilterHook<A, O> {
    filters: Vec<Arc<dyn Filter<A, O>>>,
}

impl<A, O> FilterHook<A, O> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter after every registered filter.
    ///
    /// Appending the same filter twice registers it twice.
    pub fn append<F: Filter<A, O> + 'static>(&mut self, filter: F) -> &mut Self {
        self.filters.push(Arc::new(filter));
        self
    }

    /// Add a filter before every registered filter.
    pub fn prepend<F: Filter<A, O> + 'static>(&mut self, filter: F) -> &mut Self {
        self.filters.insert(0, Arc::new(filter));
        self
    }

    /// Wrap `action` in every filter and run it with `args`.
    ///
    /// With no filters this is exactly `action(args)`. Whatever the action
    /// or a filter returns reaches the caller unchanged.
    pub fn invoke<Act>(&self, action: Act, args: A) -> O
    where
        Act: Action<A, O>,
    {
        Next::new(&self.filters, &action).run(args)
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

impl<A, O> Default for FilterHook<A, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, O> Clone for FilterHook<A, O> {
    fn clone(&self) -> Self {
        Self {
            filters: self.filters.clone(),
        }
    }
}

impl<A, O> fmt::Debug for FilterHook<A, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterHook")
            .field("filters", &self.filters.len())
            .finish()
    }
}
