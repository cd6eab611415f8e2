//! Storage subsystem for dinedb
//!
//! Owns the single connection to the catalog's SQLite file and executes
//! parameterized statements built by [`crate::query`].
//!
//! # Design Principles
//!
//! - One handle, opened once before traffic is accepted
//! - Read-only from the HTTP surface
//! - Rows come back as ordered column name → JSON value maps
//! - Errors pass through unchanged

mod errors;
mod row;
pub mod seed;
mod sqlite;

use std::sync::Arc;

use crate::observability::{Logger, Severity};
use crate::query::Statement;

pub use errors::{StorageError, StorageResult};
pub use row::Row;
pub use sqlite::SqliteStorage;

/// A relational store that can answer parameterized selects.
///
/// Implementations are blocking; async callers go through [`fetch_all`]
/// and [`fetch_one`], which move the work onto the blocking pool.
pub trait Storage: Send + Sync {
    /// Run a statement and collect every row
    fn query_all(&self, statement: &Statement) -> StorageResult<Vec<Row>>;

    /// Run a statement and return its first row, if any
    fn query_one(&self, statement: &Statement) -> StorageResult<Option<Row>>;
}

/// Shared storage handle injected into fetchers
pub type SharedStorage = Arc<dyn Storage>;

/// Run `statement` on the blocking pool and collect every row
pub async fn fetch_all(storage: &SharedStorage, statement: Statement) -> StorageResult<Vec<Row>> {
    trace_statement(&statement);
    let storage = Arc::clone(storage);
    tokio::task::spawn_blocking(move || storage.query_all(&statement)).await?
}

/// Run `statement` on the blocking pool and return the first row
pub async fn fetch_one(
    storage: &SharedStorage,
    statement: Statement,
) -> StorageResult<Option<Row>> {
    trace_statement(&statement);
    let storage = Arc::clone(storage);
    tokio::task::spawn_blocking(move || storage.query_one(&statement)).await?
}

fn trace_statement(statement: &Statement) {
    if Logger::min_severity() > Severity::Trace {
        return;
    }
    let params = serde_json::to_string(&statement.params).unwrap_or_default();
    Logger::trace("QUERY", &[("params", &params), ("sql", &statement.sql)]);
}
