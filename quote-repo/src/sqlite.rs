//! SQLite ledger adapter.
#![allow(clippy::collapsible_if)]

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

use quote_types::{Quote, QuoteLedger, RepoError, StoredQuoteRecord};

use crate::types::DbQuoteRecord;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Ledger
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite ledger implementation.
///
/// Holds connection options only. Every operation opens its own connection
/// and closes it before returning, so concurrent appends are serialized by
/// SQLite itself.
pub struct SqliteLedger {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl SqliteLedger {
    /// Creates a ledger for the database file at `path`.
    ///
    /// The parent directory is created when missing. The database file
    /// itself is created on first connection.
    pub async fn new(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        Ok(Self { path, options })
    }

    /// Returns the database file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the `cotation` table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_cotation.sql");

        let mut conn = self.connect().await?;
        let result = sqlx::query(ddl).execute(&mut conn).await;
        release(conn).await;

        result.map_err(|e| RepoError::Database(e.to_string()))?;
        tracing::info!(path = %self.path.display(), "Ledger schema ready");
        Ok(())
    }

    /// Reads every ledger row, oldest first.
    pub async fn records(&self) -> Result<Vec<StoredQuoteRecord>, RepoError> {
        let mut conn = self.connect().await?;
        let rows: Result<Vec<DbQuoteRecord>, _> =
            sqlx::query_as(r#"SELECT id, bid, timestamp FROM cotation ORDER BY id"#)
                .fetch_all(&mut conn)
                .await;
        release(conn).await;

        let rows = rows.map_err(|e| RepoError::Database(e.to_string()))?;
        Ok(rows.into_iter().map(DbQuoteRecord::into_domain).collect())
    }

    pub(crate) async fn connect(&self) -> Result<SqliteConnection, RepoError> {
        self.options
            .connect()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))
    }
}

/// Closes a connection, logging instead of failing when the close itself errors.
async fn release(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!("Failed to close ledger connection: {}", e);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Ledger implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl QuoteLedger for SqliteLedger {
    async fn append(&self, quote: &Quote) -> Result<(), RepoError> {
        let mut conn = self.connect().await?;

        let result = sqlx::query(r#"INSERT INTO cotation (bid) VALUES (?)"#)
            .bind(quote.bid())
            .execute(&mut conn)
            .await;
        release(conn).await;

        result.map_err(|e| RepoError::Database(e.to_string()))?;
        Ok(())
    }
}
