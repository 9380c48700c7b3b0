// Copyright 2026 Dropbox (created by Andrew Yates <ayates@dropbox.com>)

//! Lazily-materialized module namespaces.
//!
//! A [`ModuleRegistry`] maps module paths to [`SymbolTable`]s that are built
//! on first lookup and cached for the life of the registry. Registration
//! stores only a function pointer, so declaring a module costs nothing until
//! somebody actually resolves a symbol from it.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::symbol::SymbolTable;

// ============================================================================
// LazyModule - Deferred Namespace Construction
// ============================================================================

/// A module namespace that is built on first access.
struct LazyModule {
    /// Builds the namespace. Called at most once.
    init: fn() -> SymbolTable,
    /// Materialized namespace, populated on first lookup.
    cell: OnceLock<SymbolTable>,
}

impl LazyModule {
    fn new(init: fn() -> SymbolTable) -> Self {
        Self {
            init,
            cell: OnceLock::new(),
        }
    }

    fn table(&self, path: &str) -> &SymbolTable {
        self.cell.get_or_init(|| {
            tracing::debug!(module = %path, "materializing module namespace");
            (self.init)()
        })
    }

    fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

// ============================================================================
// ModuleRegistry - Namespaces Keyed by Module Path
// ============================================================================

/// Registry of module namespaces keyed by module path.
///
/// Namespaces are declared up front with [`ModuleRegistry::register`] and
/// materialized lazily on the first [`ModuleRegistry::get`] for that path.
/// Once materialized, a namespace is cached and shared by every subsequent
/// lookup.
///
/// # Example
///
/// ```rust,ignore
/// let mut modules = ModuleRegistry::new();
/// modules.register("relayflow_clickhouse", relayflow_clickhouse::exports);
///
/// let table = modules.get("relayflow_clickhouse").unwrap();
/// assert!(table.contains("Clickhouse"));
/// ```
#[derive(Default)]
pub struct ModuleRegistry {
    modules: HashMap<&'static str, LazyModule>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the module at `path`, to be built by `init` on first lookup.
    ///
    /// Re-registering a path replaces the previous declaration, including
    /// any namespace it had already materialized.
    pub fn register(&mut self, path: &'static str, init: fn() -> SymbolTable) {
        self.modules.insert(path, LazyModule::new(init));
    }

    /// Look up the namespace for `path`, materializing it if needed.
    ///
    /// Returns `None` if no module was registered under `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&SymbolTable> {
        self.modules.get(path).map(|module| module.table(path))
    }

    /// Check whether a module is declared under `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.modules.contains_key(path)
    }

    /// Check whether the module at `path` has materialized its namespace.
    ///
    /// Returns `false` for unregistered paths.
    #[must_use]
    pub fn is_loaded(&self, path: &str) -> bool {
        self.modules
            .get(path)
            .map_or(false, LazyModule::is_loaded)
    }

    /// Number of declared modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if no modules are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut paths: Vec<&'static str> = self.modules.keys().copied().collect();
        paths.sort_unstable();
        f.debug_struct("ModuleRegistry")
            .field("modules", &paths)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
