// Copyright 2026 Dropbox (created by Andrew Yates <ayates@dropbox.com>)

//! Type-erased symbol handles and module namespaces.
//!
//! A [`Symbol`] stands in for an item a crate exports: it remembers the
//! exported name, which concrete Rust type it designates, and how to build a
//! default-configured instance of that type. A [`SymbolTable`] is the
//! declared namespace of one module: its path plus the symbols it exports.
//!
//! Symbols are deliberately cheap: a couple of `&'static str`s, a `TypeId`,
//! and a function pointer. Tables are built once and read forever.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use crate::registry::Registry;

// ============================================================================
// Symbol - Type-Erased Export Handle
// ============================================================================

/// A type-erased handle to an item exported by a module.
///
/// The handle does not own the exported item; it designates the concrete
/// Rust type and can mint default-configured instances of it on demand.
///
/// # Example
///
/// ```rust,ignore
/// let symbol = Symbol::of::<ClickhouseSettings>("ClickhouseSettings");
/// assert!(symbol.is::<ClickhouseSettings>());
/// let settings: ClickhouseSettings = symbol.instantiate_as().unwrap();
/// ```
#[derive(Clone)]
pub struct Symbol {
    /// Name under which the item is exported by its module.
    name: &'static str,
    /// Concrete Rust type this symbol designates.
    type_id: TypeId,
    /// Fully-qualified type name, for diagnostics.
    type_name: &'static str,
    /// Builds a default-configured instance of the designated type.
    construct: fn() -> Box<dyn Any + Send + Sync>,
}

impl Symbol {
    /// Create a symbol designating type `T`, exported under `name`.
    #[must_use]
    pub fn of<T>(name: &'static str) -> Self
    where
        T: Default + Send + Sync + 'static,
    {
        Self {
            name,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            construct: || Box::new(T::default()),
        }
    }

    /// Exported name of the item.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `TypeId` of the designated type.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully-qualified name of the designated type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check whether this symbol designates type `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Build a default-configured instance of the designated type,
    /// type-erased.
    #[must_use]
    pub fn instantiate(&self) -> Box<dyn Any + Send + Sync> {
        (self.construct)()
    }

    /// Build a default-configured instance and downcast it to `T`.
    ///
    /// Returns `None` if the symbol does not designate `T`.
    #[must_use]
    pub fn instantiate_as<T: 'static>(&self) -> Option<T> {
        self.instantiate().downcast::<T>().ok().map(|boxed| *boxed)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Symbol")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .finish()
    }
}

// ============================================================================
// SymbolTable - Declared Module Namespace
// ============================================================================

/// The declared namespace of a module: its path and the symbols it exports.
///
/// Built once by the exporting crate (or by whoever wires the migration) and
/// then only read. Keys are the exported names.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// Path of the module this table describes (e.g. `relayflow_clickhouse`).
    module_path: &'static str,
    /// Exported symbols indexed by name.
    symbols: HashMap<&'static str, Symbol>,
}

impl SymbolTable {
    /// Create an empty namespace for the module at `module_path`.
    #[must_use]
    pub fn new(module_path: &'static str) -> Self {
        Self {
            module_path,
            symbols: HashMap::new(),
        }
    }

    /// Add a symbol to the namespace.
    ///
    /// Re-adding a name replaces the previous entry.
    #[must_use]
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbols.insert(symbol.name, symbol);
        self
    }

    /// Path of the module this table describes.
    #[must_use]
    pub fn module_path(&self) -> &'static str {
        self.module_path
    }

    /// Look up a symbol by its exported name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Check whether the module exports `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Number of exported symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the namespace is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Exported names, sorted for stable output.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.symbols.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Registry<Symbol> for SymbolTable {
    fn get(&self, key: &str) -> Option<&Symbol> {
        self.symbols.get(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.symbols.contains_key(key)
    }

    fn len(&self) -> usize {
        self.symbols.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
