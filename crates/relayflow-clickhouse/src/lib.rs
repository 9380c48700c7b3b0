//! ClickHouse vector store configuration for `RelayFlow`.
//!
//! This crate is the new home of the ClickHouse integration that previously
//! lived at `relayflow::vectorstores::clickhouse`. It carries the
//! configuration surface of the store:
//!
//! - [`ClickhouseSettings`]: connection and schema settings with working
//!   local-server defaults
//! - [`Clickhouse`]: a validated, read-only handle built from those settings
//!
//! The crate does not open connections or speak the ClickHouse wire
//! protocol; it exists so configuration can be constructed, validated, and
//! serialized without pulling in a database client.
//!
//! # Example
//!
//! ```rust
//! use relayflow_clickhouse::{Clickhouse, ClickhouseSettings};
//!
//! let settings = ClickhouseSettings::default()
//!     .with_host("ch.internal")
//!     .with_table("embeddings");
//! let store = Clickhouse::new(settings)?;
//! assert_eq!(store.qualified_table(), "default.embeddings");
//! # Ok::<(), relayflow_clickhouse::ClickhouseError>(())
//! ```
//!
//! # Old-path consumers
//!
//! Code still importing from `relayflow::vectorstores::clickhouse` keeps
//! working through that module's deprecation shim, which forwards here. The
//! [`exports`] function publishes this crate's namespace to that machinery.

use relayflow_compat::{Symbol, SymbolTable};

mod settings;
mod store;

pub use settings::{ClickhouseSettings, ColumnMap, DistanceMetric};
pub use store::{Clickhouse, ClickhouseError};

/// Module path under which this crate's namespace is published.
pub const MODULE_PATH: &str = "relayflow_clickhouse";

/// Namespace of this crate, for deprecated-import resolution.
#[must_use]
pub fn exports() -> SymbolTable {
    SymbolTable::new(MODULE_PATH)
        .with_symbol(Symbol::of::<Clickhouse>("Clickhouse"))
        .with_symbol(Symbol::of::<ClickhouseSettings>("ClickhouseSettings"))
}
