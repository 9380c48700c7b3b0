// Copyright 2026 Dropbox (created by Andrew Yates <ayates@dropbox.com>)

//! Deprecated-import resolution machinery for `RelayFlow` crate splits.
//!
//! When an integration moves out of the core crate into its own crate, code
//! that imported it from the old path breaks. This crate provides the pieces
//! a crate needs to keep the old path alive during a migration window:
//!
//! - [`Symbol`]: a type-erased handle to an item exported by a module
//! - [`SymbolTable`]: the declared namespace of a module (name → symbol)
//! - [`ModuleRegistry`]: lazily-materialized namespaces keyed by module path
//! - [`DeprecatedImporter`]: alias table + resolution + deprecation notices
//!
//! # Example
//!
//! ```rust,ignore
//! use relayflow_compat::{DeprecatedImporter, Symbol, SymbolTable};
//!
//! fn exports() -> SymbolTable {
//!     SymbolTable::new("relayflow_clickhouse")
//!         .with_symbol(Symbol::of::<Clickhouse>("Clickhouse"))
//! }
//!
//! let importer = DeprecatedImporter::new("relayflow::vectorstores::clickhouse")
//!     .with_module("relayflow_clickhouse", exports)
//!     .with_alias("Clickhouse", "relayflow_clickhouse");
//!
//! // Old-path consumers resolve by name; a deprecation notice is logged.
//! let symbol = importer.resolve("Clickhouse")?;
//! assert!(symbol.is::<Clickhouse>());
//! ```
//!
//! Resolution is synchronous and stateless apart from the memoized module
//! load; see [`DeprecatedImporter::resolve`] for the exact contract.

mod importer;
mod modules;
mod registry;
mod symbol;

pub use importer::{DeprecatedImporter, ImportError, WarnPolicy};
pub use modules::ModuleRegistry;
pub use registry::Registry;
pub use symbol::{Symbol, SymbolTable};
