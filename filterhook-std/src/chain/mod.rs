//! Filter chains.
//!
//! - [`FilterHook`]: synchronous chain wrapping a base action
//! - [`AsyncFilterHook`]: the same with async filters and actions
//! - [`ActionHook`]: fan-out to every registered action, no wrapping

pub mod action_hook;
pub mod async_hook;
pub mod filter_hook;

pub use action_hook::ActionHook;
pub use async_hook::AsyncFilterHook;
pub use filter_hook::FilterHook;
