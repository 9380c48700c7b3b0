// Copyright 2026 Dropbox (created by Andrew Yates <ayates@dropbox.com>)

//! Deprecated-import resolution.
//!
//! A [`DeprecatedImporter`] keeps an old module path alive after its contents
//! move elsewhere. It holds an alias table mapping exported names to the
//! module that now owns them, resolves those names through a
//! [`ModuleRegistry`], and emits a deprecation notice on every successful
//! resolution so callers know to update their imports.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use thiserror::Error;

use crate::modules::ModuleRegistry;
use crate::symbol::{Symbol, SymbolTable};

// ============================================================================
// ImportError - Resolution Failures
// ============================================================================

/// Errors raised when resolving a name through a [`DeprecatedImporter`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImportError {
    /// The name is not in the alias table; the host module never exported it.
    #[error("module '{module}' has no attribute '{name}'")]
    AttributeNotFound {
        /// Host module path the lookup went through.
        module: String,
        /// Name that was requested.
        name: String,
    },

    /// The alias points at a module path that is not registered.
    #[error("cannot import '{name}': target module '{module}' is not registered")]
    ModuleNotFound {
        /// Target module path the alias names.
        module: String,
        /// Name that was requested.
        name: String,
    },

    /// The target module is registered but does not export the name.
    #[error("cannot import '{name}': module '{module}' does not export it")]
    SymbolMissing {
        /// Target module path the alias names.
        module: String,
        /// Name that was requested.
        name: String,
    },
}

// ============================================================================
// WarnPolicy - Deprecation Notice Cadence
// ============================================================================

/// How often an importer repeats the deprecation notice for a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarnPolicy {
    /// Emit a notice on every successful resolution.
    #[default]
    EveryAccess,
    /// Emit one notice per distinct name for the life of the importer.
    Once,
}

// ============================================================================
// DeprecatedImporter - Alias Table + Resolution
// ============================================================================

/// Keeps a deprecated module path resolvable during a migration window.
///
/// The importer is configured once, at startup, with the modules that now own
/// the moved items and an alias table mapping each old exported name to its
/// new module. Resolution is then read-only: look up the alias, materialize
/// the target namespace if this is its first use, fetch the symbol, and log
/// a deprecation notice pointing at the new location.
///
/// # Example
///
/// ```rust,ignore
/// let importer = DeprecatedImporter::new("relayflow::vectorstores::clickhouse")
///     .with_module("relayflow_clickhouse", relayflow_clickhouse::exports)
///     .with_alias("Clickhouse", "relayflow_clickhouse");
///
/// let symbol = importer.resolve("Clickhouse")?;
/// ```
#[derive(Debug)]
pub struct DeprecatedImporter {
    /// Path of the deprecated module this importer stands in for.
    host_module: &'static str,
    /// Old exported name to the module path that now owns it.
    aliases: HashMap<&'static str, &'static str>,
    /// Modules the aliases can point into.
    modules: ModuleRegistry,
    /// Notice cadence.
    policy: WarnPolicy,
    /// Notices emitted so far.
    emitted: AtomicU64,
    /// Names already warned about, consulted under [`WarnPolicy::Once`].
    warned: RwLock<HashSet<&'static str>>,
}

impl DeprecatedImporter {
    /// Create an importer standing in for the deprecated module at
    /// `host_module`.
    #[must_use]
    pub fn new(host_module: &'static str) -> Self {
        Self {
            host_module,
            aliases: HashMap::new(),
            modules: ModuleRegistry::new(),
            policy: WarnPolicy::default(),
            emitted: AtomicU64::new(0),
            warned: RwLock::new(HashSet::new()),
        }
    }

    /// Declare the module at `path`, built lazily by `init`.
    #[must_use]
    pub fn with_module(mut self, path: &'static str, init: fn() -> SymbolTable) -> Self {
        self.modules.register(path, init);
        self
    }

    /// Map the old exported `name` to the module that now owns it.
    ///
    /// Re-adding a name replaces the previous target.
    #[must_use]
    pub fn with_alias(mut self, name: &'static str, target: &'static str) -> Self {
        self.aliases.insert(name, target);
        self
    }

    /// Set the notice cadence.
    #[must_use]
    pub fn with_policy(mut self, policy: WarnPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Path of the deprecated module this importer stands in for.
    #[must_use]
    pub fn host_module(&self) -> &'static str {
        self.host_module
    }

    /// Notice cadence in effect.
    #[must_use]
    pub fn policy(&self) -> WarnPolicy {
        self.policy
    }

    /// Check whether `name` is in the alias table.
    #[must_use]
    pub fn is_deprecated(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// Aliased names, sorted for stable output.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.aliases.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of deprecation notices emitted so far.
    #[must_use]
    pub fn notices_emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    /// Resolve `name` through the alias table to the symbol that now backs
    /// it, emitting a deprecation notice on success.
    ///
    /// Resolution walks three steps, each with its own failure:
    ///
    /// 1. alias lookup, else [`ImportError::AttributeNotFound`]
    /// 2. target module lookup (materializes the namespace on first use),
    ///    else [`ImportError::ModuleNotFound`]
    /// 3. symbol lookup in the target namespace, else
    ///    [`ImportError::SymbolMissing`]
    ///
    /// Failed resolutions never emit a notice.
    pub fn resolve(&self, name: &str) -> Result<&Symbol, ImportError> {
        let (alias, target) =
            self.aliases
                .get_key_value(name)
                .ok_or_else(|| ImportError::AttributeNotFound {
                    module: self.host_module.to_string(),
                    name: name.to_string(),
                })?;

        let table = self
            .modules
            .get(target)
            .ok_or_else(|| ImportError::ModuleNotFound {
                module: (*target).to_string(),
                name: name.to_string(),
            })?;

        let symbol = table.get(name).ok_or_else(|| ImportError::SymbolMissing {
            module: (*target).to_string(),
            name: name.to_string(),
        })?;

        self.emit_notice(alias, target);
        Ok(symbol)
    }

    fn emit_notice(&self, name: &'static str, target: &'static str) {
        if self.policy == WarnPolicy::Once {
            if self.warned.read().contains(name) {
                return;
            }
            // Lost the race to another thread warning about the same name.
            if !self.warned.write().insert(name) {
                return;
            }
        }

        self.emitted.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(
            symbol = %name,
            old_location = %self.host_module,
            new_location = %target,
            "importing a deprecated symbol; update the import path"
        );
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    #[derive(Debug, Default, PartialEq)]
    struct Widget {
        size: u32,
    }

    #[derive(Debug, Default)]
    struct Gadget;

    fn widget_exports() -> SymbolTable {
        SymbolTable::new("new_home").with_symbol(Symbol::of::<Widget>("Widget"))
    }

    fn importer() -> DeprecatedImporter {
        DeprecatedImporter::new("old::home")
            .with_module("new_home", widget_exports)
            .with_alias("Widget", "new_home")
    }

    #[test]
    fn test_resolve_known_name() {
        let importer = importer();

        let symbol = importer.resolve("Widget").unwrap();
        assert!(symbol.is::<Widget>());
        assert_eq!(symbol.instantiate_as::<Widget>().unwrap(), Widget::default());
    }

    #[test]
    fn test_resolve_unknown_name() {
        let importer = importer();

        let err = importer.resolve("Sprocket").unwrap_err();
        assert_eq!(
            err,
            ImportError::AttributeNotFound {
                module: "old::home".to_string(),
                name: "Sprocket".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "module 'old::home' has no attribute 'Sprocket'"
        );
        assert_eq!(importer.notices_emitted(), 0);
    }

    #[test]
    fn test_resolve_unregistered_target_module() {
        let importer = importer().with_alias("Orphan", "missing_module");

        let err = importer.resolve("Orphan").unwrap_err();
        assert_eq!(
            err,
            ImportError::ModuleNotFound {
                module: "missing_module".to_string(),
                name: "Orphan".to_string(),
            }
        );
        assert_eq!(importer.notices_emitted(), 0);
    }

    #[test]
    fn test_resolve_symbol_missing_from_target() {
        let importer = importer().with_alias("Gadget", "new_home");

        let err = importer.resolve("Gadget").unwrap_err();
        assert_eq!(
            err,
            ImportError::SymbolMissing {
                module: "new_home".to_string(),
                name: "Gadget".to_string(),
            }
        );
        assert_eq!(importer.notices_emitted(), 0);
    }

    #[test]
    fn test_every_access_notice_per_resolution() {
        let importer = importer();
        assert_eq!(importer.policy(), WarnPolicy::EveryAccess);

        for _ in 0..3 {
            let _ = importer.resolve("Widget").unwrap();
        }
        assert_eq!(importer.notices_emitted(), 3);
    }

    #[test]
    fn test_once_notice_deduplicates() {
        fn both_exports() -> SymbolTable {
            SymbolTable::new("new_home")
                .with_symbol(Symbol::of::<Widget>("Widget"))
                .with_symbol(Symbol::of::<Gadget>("Gadget"))
        }

        let importer = DeprecatedImporter::new("old::home")
            .with_module("new_home", both_exports)
            .with_alias("Widget", "new_home")
            .with_alias("Gadget", "new_home")
            .with_policy(WarnPolicy::Once);

        for _ in 0..3 {
            let _ = importer.resolve("Widget").unwrap();
        }
        assert_eq!(importer.notices_emitted(), 1);

        let _ = importer.resolve("Gadget").unwrap();
        let _ = importer.resolve("Gadget").unwrap();
        assert_eq!(importer.notices_emitted(), 2);
    }

    #[test]
    fn test_alias_table_introspection() {
        let importer = importer().with_alias("Gadget", "new_home");

        assert_eq!(importer.host_module(), "old::home");
        assert!(importer.is_deprecated("Widget"));
        assert!(importer.is_deprecated("Gadget"));
        assert!(!importer.is_deprecated("Sprocket"));
        assert_eq!(importer.names(), vec!["Gadget", "Widget"]);
    }

    #[test]
    fn test_realias_replaces_target() {
        let importer = importer().with_alias("Widget", "missing_module");

        let err = importer.resolve("Widget").unwrap_err();
        assert!(matches!(err, ImportError::ModuleNotFound { .. }));
    }
}
