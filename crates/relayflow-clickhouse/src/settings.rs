// Copyright 2026 Dropbox (created by Andrew Yates <ayates@dropbox.com>)

//! Connection and schema settings for a ClickHouse-backed vector store.

use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// DistanceMetric - Similarity Scoring
// ============================================================================

/// Distance metric used to score vector similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Angular (cosine) distance.
    #[default]
    Angular,
    /// Euclidean (L2) distance.
    Euclidean,
    /// Manhattan (L1) distance.
    Manhattan,
    /// Hamming distance.
    Hamming,
    /// Dot product.
    Dot,
}

impl DistanceMetric {
    /// Lowercase name of the metric, as it appears in index definitions.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Angular => "angular",
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
            Self::Hamming => "hamming",
            Self::Dot => "dot",
        }
    }
}

// ============================================================================
// ColumnMap - Table Schema Column Names
// ============================================================================

/// Column names the store expects in its backing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    /// Primary key column.
    pub id: String,
    /// Raw document text column.
    pub document: String,
    /// Embedding vector column.
    pub embedding: String,
    /// Document metadata column.
    pub metadata: String,
    /// Server-generated row identity column.
    pub uuid: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            document: "document".to_string(),
            embedding: "embedding".to_string(),
            metadata: "metadata".to_string(),
            uuid: "uuid".to_string(),
        }
    }
}

// ============================================================================
// ClickhouseSettings - Store Configuration
// ============================================================================

/// Configuration for a ClickHouse-backed vector store.
///
/// Every field has a working default pointing at a local unauthenticated
/// server, so `ClickhouseSettings::default()` is a valid starting point and
/// the `with_*` setters override only what differs.
///
/// # Example
///
/// ```rust
/// use relayflow_clickhouse::{ClickhouseSettings, DistanceMetric};
///
/// let settings = ClickhouseSettings::default()
///     .with_host("ch.internal")
///     .with_port(8443)
///     .with_secure(true)
///     .with_metric(DistanceMetric::Euclidean);
///
/// assert_eq!(settings.connection_url().unwrap().as_str(), "https://ch.internal:8443/");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickhouseSettings {
    /// Server hostname.
    pub host: String,
    /// Server HTTP interface port.
    pub port: u16,
    /// Use HTTPS for the connection.
    pub secure: bool,
    /// Username for authenticated servers.
    pub username: Option<String>,
    /// Password for authenticated servers. Ignored without a username.
    pub password: Option<String>,
    /// Database holding the backing table.
    pub database: String,
    /// Backing table name.
    pub table: String,
    /// Distance metric for similarity scoring.
    pub metric: DistanceMetric,
    /// Index type for the embedding column.
    pub index_type: String,
    /// Parameters passed to the index definition, in declaration order.
    pub index_params: Vec<String>,
    /// Column names in the backing table.
    pub column_map: ColumnMap,
}

impl Default for ClickhouseSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8123,
            secure: false,
            username: None,
            password: None,
            database: "default".to_string(),
            table: "vectors".to_string(),
            metric: DistanceMetric::default(),
            index_type: "annoy".to_string(),
            index_params: vec!["'L2Distance'".to_string(), "100".to_string()],
            column_map: ColumnMap::default(),
        }
    }
}

impl ClickhouseSettings {
    /// Set the server hostname.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the server port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Toggle HTTPS.
    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Set the credentials sent to authenticated servers.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the database name.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the backing table name.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the distance metric.
    #[must_use]
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the embedding index type.
    #[must_use]
    pub fn with_index_type(mut self, index_type: impl Into<String>) -> Self {
        self.index_type = index_type.into();
        self
    }

    /// Set the index definition parameters.
    #[must_use]
    pub fn with_index_params(mut self, params: Vec<String>) -> Self {
        self.index_params = params;
        self
    }

    /// Set the column names of the backing table.
    #[must_use]
    pub fn with_column_map(mut self, column_map: ColumnMap) -> Self {
        self.column_map = column_map;
        self
    }

    /// Fully-qualified `database.table` name.
    #[must_use]
    pub fn qualified_table(&self) -> String {
        format!("{}.{}", self.database, self.table)
    }

    /// HTTP(S) URL of the server, with credentials embedded when set.
    pub fn connection_url(&self) -> Result<Url, url::ParseError> {
        let scheme = if self.secure { "https" } else { "http" };
        let mut url = Url::parse(&format!("{scheme}://{}:{}/", self.host, self.port))?;
        if let Some(username) = &self.username {
            // Cannot fail for http(s) URLs, which always have a host.
            let _ = url.set_username(username);
            let _ = url.set_password(self.password.as_deref());
        }
        Ok(url)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_server() {
        let settings = ClickhouseSettings::default();

        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.port, 8123);
        assert!(!settings.secure);
        assert!(settings.username.is_none());
        assert_eq!(settings.database, "default");
        assert_eq!(settings.table, "vectors");
        assert_eq!(settings.metric, DistanceMetric::Angular);
        assert_eq!(settings.index_type, "annoy");
        assert_eq!(settings.qualified_table(), "default.vectors");
    }

    #[test]
    fn test_connection_url_plain() {
        let settings = ClickhouseSettings::default();
        let url = settings.connection_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8123/");
    }

    #[test]
    fn test_connection_url_secure_with_credentials() {
        let settings = ClickhouseSettings::default()
            .with_host("ch.internal")
            .with_port(8443)
            .with_secure(true)
            .with_credentials("reader", "hunter2");

        let url = settings.connection_url().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("ch.internal"));
        assert_eq!(url.port(), Some(8443));
        assert_eq!(url.username(), "reader");
        assert_eq!(url.password(), Some("hunter2"));
    }

    #[test]
    fn test_connection_url_invalid_host() {
        let settings = ClickhouseSettings::default().with_host("not a host");
        assert!(settings.connection_url().is_err());
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(DistanceMetric::Angular.as_str(), "angular");
        assert_eq!(DistanceMetric::Euclidean.as_str(), "euclidean");
        assert_eq!(DistanceMetric::Dot.as_str(), "dot");
    }

    #[test]
    fn test_serde_round_trip_with_defaults() {
        let json = r#"{"host": "ch.internal", "metric": "euclidean"}"#;
        let settings: ClickhouseSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.host, "ch.internal");
        assert_eq!(settings.metric, DistanceMetric::Euclidean);
        assert_eq!(settings.port, 8123);
        assert_eq!(settings.column_map, ColumnMap::default());

        let encoded = serde_json::to_string(&settings).unwrap();
        let decoded: ClickhouseSettings = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, settings);
    }

    #[test]
    fn test_builder_overrides() {
        let column_map = ColumnMap {
            id: "pk".to_string(),
            ..ColumnMap::default()
        };
        let settings = ClickhouseSettings::default()
            .with_database("search")
            .with_table("embeddings")
            .with_index_type("hnsw")
            .with_index_params(vec!["64".to_string()])
            .with_column_map(column_map.clone());

        assert_eq!(settings.qualified_table(), "search.embeddings");
        assert_eq!(settings.index_type, "hnsw");
        assert_eq!(settings.index_params, vec!["64".to_string()]);
        assert_eq!(settings.column_map, column_map);
    }
}
