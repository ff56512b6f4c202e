//! Logging filter for chain observation.

use filterhook_core::{AsyncFilter, AsyncNext, Filter, Next, Payload};

/// A filter that logs entry into and exit from the rest of the chain.
#[derive(Debug, Clone, Copy)]
pub struct LoggingFilter {
    hook: &'static str,
}

impl LoggingFilter {
    /// Create a logging filter for the extension point `hook`.
    pub const fn new(hook: &'static str) -> Self {
        Self { hook }
    }

    /// Name of the extension point reported in log events.
    pub fn hook(&self) -> &'static str {
        self.hook
    }
}

impl<A, O> Filter<A, O> for LoggingFilter {
    fn filter(&self, next: Next<'_, A, O>, args: A) -> O {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            hook = self.hook,
            remaining = next.remaining(),
            "entering chain"
        );
        let output = next.run(args);
        #[cfg(feature = "tracing")]
        tracing::debug!(hook = self.hook, "leaving chain");
        output
    }
}

impl<A: Payload, O: Payload> AsyncFilter<A, O> for LoggingFilter {
    async fn filter<'a>(&'a self, next: AsyncNext<'a, A, O>, args: A) -> O {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            hook = self.hook,
            remaining = next.remaining(),
            "entering chain"
        );
        let output = next.run(args).await;
        #[cfg(feature = "tracing")]
        tracing::debug!(hook = self.hook, "leaving chain");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{AsyncFilterHook, FilterHook};

    #[test]
    fn test_logging_filter_is_transparent() {
        let mut hook: FilterHook<u32, u32> = FilterHook::new();
        hook.append(LoggingFilter::new("double"));
        assert_eq!(hook.invoke(|n: u32| n * 2, 21), 42);
        assert_eq!(LoggingFilter::new("double").hook(), "double");
    }

    #[tokio::test]
    async fn test_async_logging_filter_is_transparent() {
        let mut hook: AsyncFilterHook<u32, u32> = AsyncFilterHook::new();
        hook.append(LoggingFilter::new("double"));
        let action = |n: u32| async move { n * 2 };
        assert_eq!(hook.invoke(&action, 21).await, 42);
    }
}
