//! # filterhook-std
//!
//! Standard implementations for filterhook.
//!
//! This crate provides:
//! - **Chains**: [`FilterHook`], [`AsyncFilterHook`], [`ActionHook`]
//! - **Extension points**: [`HookRegistry`], [`HookRegistryBuilder`], [`Plugin`]
//! - **Standard filters**: Logging, Tracing, Timeout (feature `timeout`)
//! - **Testing utilities**: marker, recording and short-circuit filters
//!
//! [`FilterHook`]: chain::FilterHook
//! [`AsyncFilterHook`]: chain::AsyncFilterHook
//! [`ActionHook`]: chain::ActionHook
//! [`HookRegistry`]: registry::HookRegistry
//! [`HookRegistryBuilder`]: registry::HookRegistryBuilder
//! [`Plugin`]: registry::Plugin

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use filterhook_core;

// Modules
pub mod chain;
pub mod filters;
pub mod registry;
pub mod testing;
