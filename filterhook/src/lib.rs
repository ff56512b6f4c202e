//! # filterhook - Ordered Filter Chains for Plugin Extension Points
//!
//! An application exposes *extension points*: named actions that plugins
//! may wrap. Each extension point owns a chain of filters. Invoking the
//! chain wraps the caller's action in every filter, first registered
//! innermost, and returns whatever the outermost filter returns.
//!
//! ## Quick Start
//!
//! ```rust
//! use filterhook::prelude::*;
//!
//! fn first(next: Next<'_, Vec<u32>, Vec<u32>>, data: Vec<u32>) -> Vec<u32> {
//!     let mut data = next.run(data);
//!     data.push(1);
//!     data
//! }
//!
//! fn second(next: Next<'_, Vec<u32>, Vec<u32>>, data: Vec<u32>) -> Vec<u32> {
//!     let mut data = next.run(data);
//!     data.push(2);
//!     data
//! }
//!
//! let action = |mut data: Vec<u32>| {
//!     data.push(0);
//!     data
//! };
//!
//! let mut hook = FilterHook::new();
//! hook.append(first);
//! hook.prepend(second);
//! assert_eq!(hook.invoke(action, Vec::new()), vec![0, 2, 1]);
//! ```
//!
//! ## Extension Points
//!
//! ```rust
//! use filterhook::prelude::*;
//!
//! let mut builder = HookRegistryBuilder::new();
//! builder.declare::<FilterHook<String, String>>("render_post")?;
//! builder.append_filter("render_post", filter_fn(|next: Next<'_, String, String>, body: String| {
//!     next.run(body.trim().to_string())
//! }))?;
//!
//! let registry = builder.build();
//! let render = registry.filter_hook::<String, String>("render_post")?;
//! assert_eq!(render.invoke(|body: String| format!("<p>{body}</p>"), " hi ".into()), "<p>hi</p>");
//! # Ok::<(), RegistryError>(())
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use filterhook_core::{
    // Sync filters
    Action,
    // Async filters
    AsyncAction,
    AsyncFilter,
    AsyncFilterFn,
    AsyncNext,
    // Errors
    BoxError,
    BoxFuture,
    DynAsyncFilter,
    Filter,
    Next,
    Payload,
    RegistryError,
    TimeoutError,
    async_filter_fn,
    filter_fn,
};

// Chains
pub use filterhook_std::chain::{ActionHook, AsyncFilterHook, FilterHook};

// Extension points
pub use filterhook_std::registry::{HookRegistry, HookRegistryBuilder, Plugin};

/// Filter chains.
pub mod chain {
    pub use filterhook_std::chain::{ActionHook, AsyncFilterHook, FilterHook};
}

/// Extension point registry and plugin loading.
pub mod registry {
    pub use filterhook_std::registry::{HookRegistry, HookRegistryBuilder, Plugin};
}

/// Standard filter implementations.
pub mod filters {
    #![allow(clippy::wildcard_imports)]
    pub use filterhook_std::filters::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use filterhook_std::testing::*;
}

/// Prelude module - common imports for filterhook.
///
/// # Usage
///
/// ```rust,ignore
/// use filterhook::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Core traits
        Action,
        ActionHook,
        AsyncFilter,
        AsyncFilterHook,
        AsyncNext,
        // Errors
        BoxError,
        Filter,
        // Chains
        FilterHook,
        HookRegistry,
        // Registry
        HookRegistryBuilder,
        Next,
        Plugin,
        RegistryError,
        async_filter_fn,
        filter_fn,
    };
}
