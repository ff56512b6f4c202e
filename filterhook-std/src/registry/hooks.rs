//! Extension point registry.
//!
//! A [`HookRegistryBuilder`] is filled during start-up (declaring extension
//! points, installing plugins) and then frozen into an immutable
//! [`HookRegistry`] that is shared with request handling code.

use crate::{chain::FilterHook, registry::plugin::Plugin};
use filterhook_core::{Filter, RegistryError};
use std::{
    any::{Any, type_name},
    collections::{HashMap, hash_map::Entry},
    fmt,
};

type AnyHook = Box<dyn Any + Send + Sync>;

fn downcast_ref<'h, H: 'static>(
    name: &str,
    hook: &'h AnyHook,
) -> Result<&'h H, RegistryError> {
    hook.downcast_ref::<H>()
        .ok_or_else(|| RegistryError::TypeMismatch {
            name: name.to_string(),
            expected: type_name::<H>(),
        })
}

fn downcast_mut<'h, H: 'static>(
    name: &str,
    hook: &'h mut AnyHook,
) -> Result<&'h mut H, RegistryError> {
    hook.downcast_mut::<H>()
        .ok_or_else(|| RegistryError::TypeMismatch {
            name: name.to_string(),
            expected: type_name::<H>(),
        })
}

/// Builder for constructing a [`HookRegistry`].
#[derive(Default)]
pub struct HookRegistryBuilder {
    hooks: HashMap<String, AnyHook>,
    plugins: Vec<String>,
}

impl HookRegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an extension point holding an empty hook of type `H`.
    ///
    /// `H` is usually a [`FilterHook`], an
    /// [`AsyncFilterHook`](crate::chain::AsyncFilterHook) or an
    /// [`ActionHook`](crate::chain::ActionHook).
    pub fn declare<H>(&mut self, name: impl Into<String>) -> Result<&mut H, RegistryError>
    where
        H: Default + Send + Sync + 'static,
    {
        match self.hooks.entry(name.into()) {
            Entry::Occupied(entry) => Err(RegistryError::AlreadyDeclared(entry.key().clone())),
            Entry::Vacant(entry) => {
                let name = entry.key().clone();
                #[cfg(feature = "tracing")]
                tracing::debug!(extension_point = %name, hook = type_name::<H>(), "declared");
                let hook = entry.insert(Box::new(H::default()));
                downcast_mut(&name, hook)
            }
        }
    }

    /// Borrow a declared extension point for registration.
    pub fn hook_mut<H: 'static>(&mut self, name: &str) -> Result<&mut H, RegistryError> {
        let hook = self
            .hooks
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotDeclared(name.to_string()))?;
        downcast_mut(name, hook)
    }

    /// Append a filter to the [`FilterHook`] declared as `name`.
    pub fn append_filter<A, O, F>(
        &mut self,
        name: &str,
        filter: F,
    ) -> Result<&mut Self, RegistryError>
    where
        A: 'static,
        O: 'static,
        F: Filter<A, O> + 'static,
    {
        self.hook_mut::<FilterHook<A, O>>(name)?.append(filter);
        Ok(self)
    }

    /// Prepend a filter to the [`FilterHook`] declared as `name`.
    pub fn prepend_filter<A, O, F>(
        &mut self,
        name: &str,
        filter: F,
    ) -> Result<&mut Self, RegistryError>
    where
        A: 'static,
        O: 'static,
        F: Filter<A, O> + 'static,
    {
        self.hook_mut::<FilterHook<A, O>>(name)?.prepend(filter);
        Ok(self)
    }

    /// Let `plugin` register its filters.
    ///
    /// Plugins are recorded in install order. A failing plugin may leave
    /// part of its filters registered; the builder should then be dropped.
    pub fn install<P>(&mut self, plugin: &P) -> Result<&mut Self, RegistryError>
    where
        P: Plugin + ?Sized,
    {
        let name = plugin.name().to_string();
        if self.plugins.contains(&name) {
            return Err(RegistryError::DuplicatePlugin(name));
        }

        plugin
            .register(self)
            .map_err(|e| RegistryError::plugin(name.clone(), e))?;

        #[cfg(feature = "tracing")]
        tracing::info!(plugin = %name, "plugin installed");
        self.plugins.push(name);
        Ok(self)
    }

    /// Returns `true` if `name` was declared.
    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// Freeze the registry.
    pub fn build(self) -> HookRegistry {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            extension_points = self.hooks.len(),
            plugins = self.plugins.len(),
            "hook registry built"
        );
        HookRegistry {
            hooks: self.hooks,
            plugins: self.plugins,
        }
    }
}

impl fmt::Debug for HookRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistryBuilder")
            .field("extension_points", &self.hooks.len())
            .field("plugins", &self.plugins)
            .finish()
    }
}

/// Immutable set of extension points, keyed by name.
///
/// Built once at start-up and passed explicitly (usually inside an `Arc`) to
/// the code that invokes hooks. It can no longer be modified.
pub struct HookRegistry {
    hooks: HashMap<String, AnyHook>,
    plugins: Vec<String>,
}

impl HookRegistry {
    /// Get the hook declared as `name`.
    pub fn get<H: 'static>(&self, name: &str) -> Result<&H, RegistryError> {
        let hook = self
            .hooks
            .get(name)
            .ok_or_else(|| RegistryError::NotDeclared(name.to_string()))?;
        downcast_ref(name, hook)
    }

    /// Shortcut for `get::<FilterHook<A, O>>(name)`.
    pub fn filter_hook<A: 'static, O: 'static>(
        &self,
        name: &str,
    ) -> Result<&FilterHook<A, O>, RegistryError> {
        self.get(name)
    }

    /// Returns `true` if `name` was declared.
    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// Declared extension point names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.hooks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Installed plugin names in install order.
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// Number of extension points.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns `true` if no extension point was declared.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("extension_points", &self.names())
            .field("plugins", &self.plugins)
            .finish()
    }
}
