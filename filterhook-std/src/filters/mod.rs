//! Standard filters.
//!
//! Every filter here delegates to the rest of the chain; they only observe
//! or bound the call.

pub mod logging;
#[cfg(feature = "timeout")]
pub mod timeout;
pub mod tracing;

pub use self::logging::LoggingFilter;
#[cfg(feature = "timeout")]
pub use self::timeout::TimeoutFilter;
pub use self::tracing::TracingFilter;
