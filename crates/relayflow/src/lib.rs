// Copyright 2026 Dropbox (created by Andrew Yates <ayates@dropbox.com>)

//! Core library for `RelayFlow`.
//!
//! Integrations are moving out of this crate into dedicated crates. During
//! the migration window the old module paths stay alive as deprecation
//! shims; see [`vectorstores`] for the paths this release still resolves.
//!
//! # Example
//!
//! ```rust
//! use relayflow::vectorstores::clickhouse;
//!
//! // Old-path consumers resolve by name; a deprecation notice is logged.
//! let symbol = clickhouse::resolve("Clickhouse")?;
//! assert!(symbol.is::<relayflow_clickhouse::Clickhouse>());
//! # Ok::<(), relayflow_compat::ImportError>(())
//! ```

pub mod error;
pub mod vectorstores;

pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shim_error_converts_to_core_error() {
        let err: Error = vectorstores::clickhouse::resolve("Sprocket")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::DeprecatedImport(_)));
    }
}
