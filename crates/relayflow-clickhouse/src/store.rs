// Copyright 2026 Dropbox (created by Andrew Yates <ayates@dropbox.com>)

//! Configuration handle for a ClickHouse-backed vector store.

use thiserror::Error;

use crate::settings::ClickhouseSettings;

// ============================================================================
// ClickhouseError - Configuration Failures
// ============================================================================

/// Errors raised when building a [`Clickhouse`] store handle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClickhouseError {
    /// The table name is empty.
    #[error("table name must not be empty")]
    EmptyTable,

    /// The database name is empty.
    #[error("database name must not be empty")]
    EmptyDatabase,

    /// The port is zero.
    #[error("port must be nonzero")]
    ZeroPort,
}

// ============================================================================
// Clickhouse - Store Handle
// ============================================================================

/// Handle for a ClickHouse-backed vector store.
///
/// The handle validates its settings up front and exposes them read-only.
/// It is configuration only: it does not open connections or speak the
/// ClickHouse wire protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct Clickhouse {
    settings: ClickhouseSettings,
}

impl Clickhouse {
    /// Build a store handle from validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the table or database name is empty, or if the
    /// port is zero.
    pub fn new(settings: ClickhouseSettings) -> Result<Self, ClickhouseError> {
        if settings.table.is_empty() {
            return Err(ClickhouseError::EmptyTable);
        }
        if settings.database.is_empty() {
            return Err(ClickhouseError::EmptyDatabase);
        }
        if settings.port == 0 {
            return Err(ClickhouseError::ZeroPort);
        }
        Ok(Self { settings })
    }

    /// Settings this handle was built from.
    #[must_use]
    pub fn settings(&self) -> &ClickhouseSettings {
        &self.settings
    }

    /// Fully-qualified `database.table` name the store writes to.
    #[must_use]
    pub fn qualified_table(&self) -> String {
        self.settings.qualified_table()
    }
}

impl Default for Clickhouse {
    fn default() -> Self {
        // Default settings always pass validation.
        Self {
            settings: ClickhouseSettings::default(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
