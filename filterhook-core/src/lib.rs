//! # filterhook-core
//!
//! Core traits for filterhook, ordered filter chains that let plugins wrap
//! the actions of an application's extension points.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! plugins that only need to write filters, not to own chains.
//!
//! # Model
//!
//! - **Action**: the base operation of an extension point, supplied by the
//!   caller on every invocation.
//! - **Filter**: a callable receiving the action (as a [`Next`]
//!   continuation) plus the request arguments. It may pre-process the
//!   arguments, post-process the result, or skip the action entirely.
//! - **Chain**: the ordered filter list of one extension point. The first
//!   filter wraps the action directly and the last filter is outermost, so
//!   post-processing happens in registration order.
//!
//! Both a synchronous ([`Filter`], [`Next`]) and an asynchronous
//! ([`AsyncFilter`], [`AsyncNext`]) flavour exist.
//!
//! # Error Types
//!
//! - [`RegistryError`] - Extension point and plugin registration errors
//! - [`TimeoutError`] - Time-limited chain errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod async_filter;
mod error;
mod filter;
mod payload;

// Re-exports
pub use async_filter::{
    AsyncAction, AsyncFilter, AsyncFilterFn, AsyncNext, DynAsyncFilter, async_filter_fn,
};
pub use error::{BoxError, RegistryError, TimeoutError};
pub use filter::{Action, Filter, Next, filter_fn};
pub use payload::Payload;

/// Boxed future returned by async chains.
pub use futures::future::BoxFuture;
