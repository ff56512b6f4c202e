//! Span-per-invocation filter.

use filterhook_core::{AsyncFilter, AsyncNext, Filter, Next, Payload};

#[cfg(feature = "tracing")]
use tracing::Instrument;

/// A filter that runs the rest of the chain inside a `tracing` span.
///
/// The span is named `filter_hook` and carries the extension point name.
/// Registered last, it covers the whole chain. Without the `tracing`
/// feature the filter only delegates.
#[derive(Debug, Clone, Copy)]
pub struct TracingFilter {
    hook: &'static str,
}

impl TracingFilter {
    /// Create a tracing filter for the extension point `hook`.
    pub const fn new(hook: &'static str) -> Self {
        Self { hook }
    }

    /// Name of the extension point recorded on the span.
    pub fn hook(&self) -> &'static str {
        self.hook
    }
}

impl<A, O> Filter<A, O> for TracingFilter {
    #[cfg(feature = "tracing")]
    fn filter(&self, next: Next<'_, A, O>, args: A) -> O {
        let span = tracing::info_span!(
            "filter_hook",
            hook = %self.hook,
            filters = next.remaining()
        );
        let _guard = span.enter();
        next.run(args)
    }

    #[cfg(not(feature = "tracing"))]
    fn filter(&self, next: Next<'_, A, O>, args: A) -> O {
        next.run(args)
    }
}

impl<A: Payload, O: Payload> AsyncFilter<A, O> for TracingFilter {
    #[cfg(feature = "tracing")]
    async fn filter<'a>(&'a self, next: AsyncNext<'a, A, O>, args: A) -> O {
        let span = tracing::info_span!(
            "filter_hook",
            hook = %self.hook,
            filters = next.remaining()
        );
        next.run(args).instrument(span).await
    }

    #[cfg(not(feature = "tracing"))]
    async fn filter<'a>(&'a self, next: AsyncNext<'a, A, O>, args: A) -> O {
        next.run(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{AsyncFilterHook, FilterHook};

    #[test]
    fn test_tracing_filter_passthrough() {
        let mut hook: FilterHook<String, usize> = FilterHook::new();
        hook.append(TracingFilter::new("word_count"));
        let count = hook.invoke(|s: String| s.split_whitespace().count(), "a b c".into());
        assert_eq!(count, 3);
        assert_eq!(TracingFilter::new("word_count").hook(), "word_count");
    }

    #[tokio::test]
    async fn test_async_tracing_filter_passthrough() {
        let mut hook: AsyncFilterHook<String, usize> = AsyncFilterHook::new();
        hook.append(TracingFilter::new("word_count"));
        let action = |s: String| async move { s.len() };
        assert_eq!(hook.invoke(&action, "abc".into()).await, 3);
    }
}
