// Copyright 2026 Dropbox (created by Andrew Yates <ayates@dropbox.com>)

//! Vector store integrations.
//!
//! Integrations live in dedicated crates (`relayflow-clickhouse` and
//! friends). The submodules here are the deprecated pre-split paths, kept
//! resolvable during the migration window; each forwards to the crate that
//! now owns its contents.

pub mod clickhouse;
