//! Timeout filter for time-limited async chains.
//!
//! **Note**: This module requires the `tokio` runtime (feature `timeout`).

use filterhook_core::{AsyncFilter, AsyncNext, Payload, TimeoutError};
use std::time::Duration;

/// An async filter that bounds the rest of the chain in time.
///
/// Only applies to extension points whose output is a `Result` with an
/// error type that can absorb a [`TimeoutError`]. When the inner chain does
/// not finish in time it is dropped and `Err(TimeoutError.into())` is
/// returned.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutFilter {
    duration: Duration,
}

impl TimeoutFilter {
    /// Create a new `TimeoutFilter`.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Create a `TimeoutFilter` with the timeout specified in seconds.
    pub fn secs(seconds: u64) -> Self {
        Self::new(Duration::from_secs(seconds))
    }

    /// Create a `TimeoutFilter` with the timeout specified in milliseconds.
    pub fn millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Get the configured timeout duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<A, T, E> AsyncFilter<A, Result<T, E>> for TimeoutFilter
where
    A: Payload,
    T: Payload,
    E: From<TimeoutError> + Payload,
{
    async fn filter<'a>(
        &'a self,
        next: AsyncNext<'a, A, Result<T, E>>,
        args: A,
    ) -> Result<T, E> {
        match tokio::time::timeout(self.duration, next.run(args)).await {
            Ok(result) => result,
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(timeout = ?self.duration, "filter chain timed out");
                Err(E::from(TimeoutError(self.duration)))
            }
        }
    }
}
