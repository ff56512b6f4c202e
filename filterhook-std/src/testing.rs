//! Testing utilities for filterhook.
//!
//! This module provides filters and actions that make ordering and
//! delegation easy to assert on.
//!
//! # Features
//!
//! - [`MarkerFilter`]: delegates, then pushes a marker onto the result
//! - [`RecordingFilter`]: records the order in which filters are entered
//! - [`ShortCircuitFilter`]: returns a fixed value without delegating
//! - [`CountingAction`]: an action that counts its invocations

use filterhook_core::{Action, AsyncFilter, AsyncNext, Filter, Next, Payload};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Marker Filter
// ============================================================================

/// A filter that runs the rest of the chain, then appends its marker.
///
/// # Example
///
/// ```rust
/// use filterhook_std::{chain::FilterHook, testing::MarkerFilter};
///
/// let mut hook = FilterHook::new();
/// hook.append(MarkerFilter(1)).append(MarkerFilter(2));
/// let result = hook.invoke(|mut data: Vec<u32>| { data.push(0); data }, Vec::new());
/// assert_eq!(result, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerFilter<T>(pub T);

impl<T> Filter<Vec<T>, Vec<T>> for MarkerFilter<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn filter(&self, next: Next<'_, Vec<T>, Vec<T>>, data: Vec<T>) -> Vec<T> {
        let mut data = next.run(data);
        data.push(self.0.clone());
        data
    }
}

impl<T> AsyncFilter<Vec<T>, Vec<T>> for MarkerFilter<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn filter<'a>(
        &'a self,
        next: AsyncNext<'a, Vec<T>, Vec<T>>,
        data: Vec<T>,
    ) -> Vec<T> {
        let mut data = next.run(data).await;
        data.push(self.0.clone());
        data
    }
}

// ============================================================================
// Recording Filter
// ============================================================================

/// A filter that records its id into a shared log before delegating.
///
/// The log therefore holds filters in the order they were *entered*, which
/// is outermost first.
#[derive(Debug, Clone)]
pub struct RecordingFilter {
    id: usize,
    log: Arc<Mutex<Vec<usize>>>,
}

impl RecordingFilter {
    /// Create a recording filter writing into `log`.
    pub fn new(id: usize, log: Arc<Mutex<Vec<usize>>>) -> Self {
        Self { id, log }
    }

    fn record(&self) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(self.id);
    }
}

impl<A, O> Filter<A, O> for RecordingFilter {
    fn filter(&self, next: Next<'_, A, O>, args: A) -> O {
        self.record();
        next.run(args)
    }
}

impl<A: Payload, O: Payload> AsyncFilter<A, O> for RecordingFilter {
    async fn filter<'a>(&'a self, next: AsyncNext<'a, A, O>, args: A) -> O {
        self.record();
        next.run(args).await
    }
}

// ============================================================================
// Short-circuit Filter
// ============================================================================

/// A filter that never calls the rest of the chain.
#[derive(Debug, Clone)]
pub struct ShortCircuitFilter<O>(pub O);

impl<A, O> Filter<A, O> for ShortCircuitFilter<O>
where
    O: Clone + Send + Sync + 'static,
{
    fn filter(&self, _next: Next<'_, A, O>, _args: A) -> O {
        self.0.clone()
    }
}

// ============================================================================
// Counting Action
// ============================================================================

/// An action that counts invocations and returns a clone of its value.
///
/// Clones share the counter.
///
/// # Example
///
/// ```rust
/// use filterhook_std::{chain::FilterHook, testing::CountingAction};
///
/// let action = CountingAction::new("done");
/// let hook: FilterHook<(), &str> = FilterHook::new();
/// assert_eq!(hook.invoke(action.clone(), ()), "done");
/// assert_eq!(action.count(), 1);
/// ```
#[derive(Debug)]
pub struct CountingAction<O> {
    value: O,
    count: Arc<AtomicUsize>,
}

impl<O> CountingAction<O> {
    /// Create a new counting action.
    pub fn new(value: O) -> Self {
        Self {
            value,
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<O: Clone> Clone for CountingAction<O> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            count: self.count.clone(),
        }
    }
}

impl<A, O: Clone> Action<A, O> for CountingAction<O> {
    fn call(&self, _args: A) -> O {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.value.clone()
    }
}
