//! Payload trait for async extension point arguments and results.

/// Marker for values that may cross `.await` points inside an async chain.
///
/// Arguments and outputs of async extension points must be
/// `Send + 'static`; the blanket impl makes every such type a payload.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot travel through an async filter chain",
    label = "must be `Send + 'static`",
    note = "Async extension points move arguments and results across tasks."
)]
pub trait Payload: Send + 'static {}

impl<T: Send + 'static> Payload for T {}
