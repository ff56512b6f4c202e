//! Fan-out hook: every registered action runs with the same arguments.

use filterhook_core::Action;
use std::{fmt, sync::Arc};

/// An ordered list of plugin actions invoked one after another.
///
/// Unlike a [`FilterHook`](super::FilterHook) there is no base action to
/// wrap: each registered action receives its own clone of the arguments and
/// every result is returned, in sequence order.
pub struct ActionHook<A, O> {
    actions: Vec<Arc<dyn Action<A, O> + Send + Sync>>,
}

impl<A, O> ActionHook<A, O> {
    /// Create an empty hook.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Add an action after every registered action.
    pub fn append<F>(&mut self, action: F) -> &mut Self
    where
        F: Action<A, O> + Send + Sync + 'static,
    {
        self.actions.push(Arc::new(action));
        self
    }

    /// Add an action before every registered action.
    pub fn prepend<F>(&mut self, action: F) -> &mut Self
    where
        F: Action<A, O> + Send + Sync + 'static,
    {
        self.actions.insert(0, Arc::new(action));
        self
    }

    /// Run every action and collect the results.
    pub fn invoke(&self, args: A) -> Vec<O>
    where
        A: Clone,
    {
        self.actions
            .iter()
            .map(|action| action.call(args.clone()))
            .collect()
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no action is registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<A, O> Default for ActionHook<A, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, O> Clone for ActionHook<A, O> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
        }
    }
}

impl<A, O> fmt::Debug for ActionHook<A, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionHook")
            .field("actions", &self.actions.len())
            .finish()
    }
}
