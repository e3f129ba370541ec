//! SurrealDB-backed MovieStore implementation
//!
//! Connects through `surrealdb::engine::any`, so the same type serves the
//! in-memory engine (`mem://`) and remote endpoints (`ws://`, `wss://`).

use async_trait::async_trait;
use chrono::Utc;
use razzie_core::AwardRecord;
use serde::Deserialize;
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::Root;
use surrealdb::Surreal;
use tracing::{debug, info, instrument};

use crate::error::StorageError;
use crate::schema::{MovieRecord, MOVIES_SCHEMA};
use crate::storage_traits::{MovieStore, StorageResult};

const DEFAULT_ENDPOINT: &str = "mem://";

/// Connection settings for [`SurrealMovieStore`]
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Endpoint URL (`mem://`, `ws://host:port`, ...)
    pub endpoint: String,
    /// Namespace (default: "razzie")
    pub namespace: String,
    /// Database name (default: "main")
    pub database: String,
    /// Root credentials, when the endpoint requires them
    pub credentials: Option<(String, String)>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            namespace: "razzie".to_string(),
            database: "main".to_string(),
            credentials: None,
        }
    }
}

impl StoreConfig {
    /// Set custom endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set custom namespace
    pub fn with_namespace(mut self, ns: impl Into<String>) -> Self {
        self.namespace = ns.into();
        self
    }

    /// Set custom database
    pub fn with_database(mut self, db: impl Into<String>) -> Self {
        self.database = db.into();
        self
    }

    /// Create from environment variables
    ///
    /// Reads:
    /// - SURREALDB_URL (optional, default: "mem://")
    /// - SURREALDB_NAMESPACE (optional, default: "razzie")
    /// - SURREALDB_DATABASE (optional, default: "main")
    /// - SURREALDB_USERNAME / SURREALDB_PASSWORD (optional, root sign-in
    ///   when both are set)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let endpoint = std::env::var("SURREALDB_URL").unwrap_or(defaults.endpoint);
        let namespace = std::env::var("SURREALDB_NAMESPACE").unwrap_or(defaults.namespace);
        let database = std::env::var("SURREALDB_DATABASE").unwrap_or(defaults.database);
        let credentials = match (
            std::env::var("SURREALDB_USERNAME"),
            std::env::var("SURREALDB_PASSWORD"),
        ) {
            (Ok(user), Ok(pass)) => Some((user, pass)),
            _ => None,
        };

        Self {
            endpoint,
            namespace,
            database,
            credentials,
        }
    }
}

/// SurrealDB-backed implementation of [`MovieStore`].
#[derive(Clone)]
pub struct SurrealMovieStore {
    db: Surreal<Any>,
}

#[derive(Deserialize)]
struct CountRow {
    count: usize,
}

impl SurrealMovieStore {
    /// Connect to an in-memory SurrealDB instance and set up the schema.
    pub async fn in_memory() -> StorageResult<Self> {
        Self::connect(StoreConfig::default()).await
    }

    /// Connect using [`StoreConfig::from_env`].
    pub async fn from_env() -> StorageResult<Self> {
        Self::connect(StoreConfig::from_env()).await
    }

    /// Connect with explicit settings and set up the schema.
    #[instrument(
        skip(config),
        fields(endpoint = %config.endpoint, namespace = %config.namespace, database = %config.database)
    )]
    pub async fn connect(config: StoreConfig) -> StorageResult<Self> {
        info!("Connecting to SurrealDB");

        let db = surrealdb::engine::any::connect(&config.endpoint)
            .await
            .map_err(|e| {
                StorageError::Connection(format!("Failed to connect to {}: {}", config.endpoint, e))
            })?;

        if let Some((username, password)) = &config.credentials {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await
            .map_err(|e| StorageError::Connection(format!("Root authentication failed: {}", e)))?;
        }

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await
            .map_err(|e| {
                StorageError::Connection(format!("Failed to select namespace/database: {}", e))
            })?;

        let store = Self { db };
        store.init_schema().await?;

        info!("SurrealDB connected and schema initialized");
        Ok(store)
    }

    async fn init_schema(&self) -> StorageResult<()> {
        debug!("Initializing movies schema");

        self.db
            .query(MOVIES_SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| StorageError::Schema(e.to_string()))?;

        Ok(())
    }

    async fn count_where(&self, sql: &'static str) -> StorageResult<usize> {
        let mut result = self.db.query(sql).await?;
        let rows: Vec<CountRow> = result.take(0)?;
        Ok(rows.first().map(|row| row.count).unwrap_or(0))
    }
}

#[async_trait]
impl MovieStore for SurrealMovieStore {
    #[instrument(skip(self, records), fields(records = records.len()))]
    async fn replace_all(&self, records: Vec<AwardRecord>) -> StorageResult<usize> {
        self.db.query("DELETE movies").await?.check()?;
        debug!("Existing movies removed");

        let now = Utc::now();
        let mut inserted = 0;
        for record in records {
            let row = MovieRecord::from_award(record, now);
            let created: Option<MovieRecord> = self.db.create("movies").content(row).await?;
            if created.is_none() {
                return Err(StorageError::Query("Failed to create movie".to_string()));
            }
            inserted += 1;
        }

        info!(inserted, "Movies stored");
        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn winners(&self) -> StorageResult<Vec<AwardRecord>> {
        let mut result = self
            .db
            .query("SELECT * FROM movies WHERE winner = true ORDER BY year ASC")
            .await?;

        let movies: Vec<MovieRecord> = result.take(0)?;
        debug!(winners = movies.len(), "Winners fetched");
        Ok(movies.into_iter().map(MovieRecord::into_award).collect())
    }

    async fn count(&self) -> StorageResult<usize> {
        self.count_where("SELECT count() FROM movies GROUP ALL").await
    }

    async fn count_winners(&self) -> StorageResult<usize> {
        self.count_where("SELECT count() FROM movies WHERE winner = true GROUP ALL")
            .await
    }
}
