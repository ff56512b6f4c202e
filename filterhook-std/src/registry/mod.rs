//! Extension point registry and plugin loading.
//!
//! Each extension point owns one independent hook, keyed by name. The
//! registry is built explicitly during start-up and handed to the code that
//! invokes hooks; there is no process-wide singleton.

pub mod hooks;
pub mod plugin;

pub use hooks::{HookRegistry, HookRegistryBuilder};
pub use plugin::Plugin;
