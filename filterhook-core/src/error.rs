//! Error types for filterhook.
//!
//! Filter chains never produce errors of their own: whatever the action or a
//! filter returns travels back to the caller untouched. The types here cover
//! the machinery around the chains:
//!
//! - [`RegistryError`] - Extension point declaration and plugin loading
//! - [`TimeoutError`] - Raised by the standard timeout filter

use std::time::Duration;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while declaring, populating or reading extension points.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No extension point with this name was declared.
    #[error("extension point not declared: {0}")]
    NotDeclared(String),

    /// An extension point with this name already exists.
    #[error("extension point already declared: {0}")]
    AlreadyDeclared(String),

    /// The extension point exists but holds a different hook type.
    #[error("extension point `{name}` is not a `{expected}`")]
    TypeMismatch {
        /// Name of the extension point.
        name: String,
        /// Type name the caller asked for.
        expected: &'static str,
    },

    /// A plugin with the same name was already installed.
    #[error("plugin already installed: {0}")]
    DuplicatePlugin(String),

    /// A plugin failed while registering its filters.
    #[error("plugin `{plugin}` failed to register")]
    Plugin {
        /// Name of the failing plugin.
        plugin: String,
        /// Underlying cause.
        #[source]
        source: BoxError,
    },
}

/// Error returned when a time-limited chain did not finish in time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("filter chain timed out after {0:?}")]
pub struct TimeoutError(pub Duration);

impl TimeoutError {
    /// Get the duration that was exceeded.
    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl RegistryError {
    /// Wrap an arbitrary plugin failure.
    pub fn plugin(plugin: impl Into<String>, source: impl Into<BoxError>) -> Self {
        RegistryError::Plugin {
            plugin: plugin.into(),
            source: source.into(),
        }
    }
}
