// Copyright 2026 Dropbox (created by Andrew Yates <ayates@dropbox.com>)

//! Deprecated location of the ClickHouse vector store.
//!
//! The integration moved to the `relayflow-clickhouse` crate. This module
//! keeps the old path alive during the migration window: the deprecated
//! aliases below compile with a warning, and [`resolve`] serves callers
//! that look items up by name, logging a deprecation notice on every hit.
//!
//! New code should import from `relayflow_clickhouse` directly.

use std::sync::LazyLock;

use relayflow_compat::{DeprecatedImporter, ImportError, Symbol};

/// Path of this module, as it appears in deprecation notices.
pub const MODULE_PATH: &str = "relayflow::vectorstores::clickhouse";

/// Old name for [`relayflow_clickhouse::Clickhouse`].
#[deprecated(since = "0.9.0", note = "import from the `relayflow-clickhouse` crate instead")]
pub type Clickhouse = relayflow_clickhouse::Clickhouse;

/// Old name for [`relayflow_clickhouse::ClickhouseSettings`].
#[deprecated(since = "0.9.0", note = "import from the `relayflow-clickhouse` crate instead")]
pub type ClickhouseSettings = relayflow_clickhouse::ClickhouseSettings;

static IMPORTER: LazyLock<DeprecatedImporter> = LazyLock::new(|| {
    DeprecatedImporter::new(MODULE_PATH)
        .with_module(relayflow_clickhouse::MODULE_PATH, relayflow_clickhouse::exports)
        .with_alias("Clickhouse", relayflow_clickhouse::MODULE_PATH)
        .with_alias("ClickhouseSettings", relayflow_clickhouse::MODULE_PATH)
});

/// Resolve a name this module used to export, logging a deprecation notice.
///
/// # Errors
///
/// Returns [`ImportError::AttributeNotFound`] for names this module never
/// exported.
pub fn resolve(name: &str) -> Result<&'static Symbol, ImportError> {
    IMPORTER.resolve(name)
}

/// Names this module still resolves, sorted.
#[must_use]
pub fn exported_names() -> Vec<&'static str> {
    IMPORTER.names()
}

/// The importer backing this module, for introspection.
#[must_use]
pub fn importer() -> &'static DeprecatedImporter {
    &IMPORTER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_store_by_old_path() {
        let symbol = resolve("Clickhouse").unwrap();
        assert!(symbol.is::<relayflow_clickhouse::Clickhouse>());

        let store: relayflow_clickhouse::Clickhouse = symbol.instantiate_as().unwrap();
        assert_eq!(store, relayflow_clickhouse::Clickhouse::default());
    }

    #[test]
    fn test_resolve_settings_by_old_path() {
        let symbol = resolve("ClickhouseSettings").unwrap();
        assert!(symbol.is::<relayflow_clickhouse::ClickhouseSettings>());
    }

    #[test]
    fn test_resolve_unknown_name() {
        let err = resolve("ClickhouseClient").unwrap_err();
        assert_eq!(
            err,
            ImportError::AttributeNotFound {
                module: MODULE_PATH.to_string(),
                name: "ClickhouseClient".to_string(),
            }
        );
    }

    #[test]
    fn test_exported_names() {
        assert_eq!(exported_names(), vec!["Clickhouse", "ClickhouseSettings"]);
        assert!(importer().is_deprecated("Clickhouse"));
        assert!(!importer().is_deprecated("ClickhouseClient"));
    }

    #[test]
    #[allow(deprecated)]
    fn test_aliases_are_the_relocated_types() {
        let settings = ClickhouseSettings::default().with_table("embeddings");
        let store = Clickhouse::new(settings).unwrap();
        assert_eq!(store.qualified_table(), "default.embeddings");
    }
}
