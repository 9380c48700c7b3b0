// Copyright 2026 Dropbox (created by Andrew Yates <ayates@dropbox.com>)

//! Core error types for `RelayFlow`.

use thiserror::Error;

/// Top-level error type for `RelayFlow` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Resolving a name through a deprecated module path failed.
    #[error("deprecated import failed: {0}")]
    DeprecatedImport(#[from] relayflow_compat::ImportError),

    /// Building a vector store handle from its settings failed.
    #[error("vector store configuration: {0}")]
    VectorStore(#[from] relayflow_clickhouse::ClickhouseError),
}

/// Convenience result type for `RelayFlow` operations.
pub type Result<T> = std::result::Result<T, Error>;
