//! Plugin trait.

use crate::registry::hooks::HookRegistryBuilder;
use filterhook_core::RegistryError;

/// A unit of extension code that registers filters and actions.
///
/// Plugins only touch extension points through the builder they are given,
/// so the final filter order is install order followed by each plugin's own
/// call order. Extension points are normally declared by the application
/// before any plugin is installed.
///
/// # Example
///
/// ```rust
/// use filterhook_core::{Next, RegistryError};
/// use filterhook_std::{chain::FilterHook, registry::{HookRegistryBuilder, Plugin}};
///
/// struct Signature;
///
/// fn sign(next: Next<'_, String, String>, body: String) -> String {
///     next.run(body) + "\n-- sent from my forum"
/// }
///
/// impl Plugin for Signature {
///     fn name(&self) -> &str {
///         "signature"
///     }
///
///     fn register(&self, hooks: &mut HookRegistryBuilder) -> Result<(), RegistryError> {
///         hooks.append_filter("render_post", sign)?;
///         Ok(())
///     }
/// }
///
/// let mut builder = HookRegistryBuilder::new();
/// builder.declare::<FilterHook<String, String>>("render_post")?;
/// builder.install(&Signature)?;
/// let registry = builder.build();
/// assert_eq!(registry.plugins(), ["signature"]);
/// # Ok::<(), RegistryError>(())
/// ```
pub trait Plugin: Send + Sync {
    /// Unique plugin name.
    fn name(&self) -> &str;

    /// Register this plugin's filters and actions.
    fn register(&self, hooks: &mut HookRegistryBuilder) -> Result<(), RegistryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{ActionHook, FilterHook};
    use filterhook_core::{Next, filter_fn};

    struct Marker {
        name: &'static str,
    }

    impl Plugin for Marker {
        fn name(&self) -> &str {
            self.name
        }

        fn register(&self, hooks: &mut HookRegistryBuilder) -> Result<(), RegistryError> {
            let name = self.name;
            hooks.append_filter(
                "render",
                filter_fn(move |next: Next<'_, String, String>, text: String| {
                    format!("{}<{}>", next.run(text), name)
                }),
            )?;
            hooks
                .hook_mut::<ActionHook<(), &'static str>>("loaded")?
                .append(move |()| name);
            Ok(())
        }
    }

    struct Broken;

    impl Plugin for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn register(&self, hooks: &mut HookRegistryBuilder) -> Result<(), RegistryError> {
            hooks.hook_mut::<FilterHook<u8, u8>>("does_not_exist")?;
            Ok(())
        }
    }

    fn declared() -> HookRegistryBuilder {
        let mut builder = HookRegistryBuilder::new();
        builder.declare::<FilterHook<String, String>>("render").unwrap();
        builder.declare::<ActionHook<(), &'static str>>("loaded").unwrap();
        builder
    }

    #[test]
    fn test_plugins_run_in_install_order() {
        let mut builder = declared();
        builder
            .install(&Marker { name: "a" })
            .unwrap()
            .install(&Marker { name: "b" })
            .unwrap();
        let registry = builder.build();

        assert_eq!(registry.plugins(), ["a", "b"]);
        let render = registry.filter_hook::<String, String>("render").unwrap();
        assert_eq!(render.invoke(|s: String| s, "post".into()), "post<a><b>");
        let loaded = registry.get::<ActionHook<(), &'static str>>("loaded").unwrap();
        assert_eq!(loaded.invoke(()), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_plugin_rejected() {
        let mut builder = declared();
        builder.install(&Marker { name: "a" }).unwrap();
        let err = builder.install(&Marker { name: "a" }).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicatePlugin(name) if name == "a"));
    }

    #[test]
    fn test_failing_plugin_is_wrapped() {
        let mut builder = declared();
        let plugins: Vec<Box<dyn Plugin>> = vec![Box::new(Broken)];
        let err = builder.install(plugins[0].as_ref()).unwrap_err();
        assert_eq!(err.to_string(), "plugin `broken` failed to register");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "extension point not declared: does_not_exist");
    }
}
