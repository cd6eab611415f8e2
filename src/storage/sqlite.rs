//! SQLite-backed storage

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::types::{ToSql, ToSqlOutput};
use rusqlite::{params_from_iter, Connection, OpenFlags};

use crate::query::{SqlParam, Statement};

use super::errors::{StorageError, StorageResult};
use super::row::{decode_row, Row};
use super::Storage;

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlParam::Integer(v) => ToSqlOutput::from(*v),
            SqlParam::Text(v) => ToSqlOutput::from(v.as_str()),
            SqlParam::Bool(v) => ToSqlOutput::from(i64::from(*v)),
        })
    }
}

/// Storage over a single SQLite connection
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Open an existing database file without write access
    pub fn open_read_only(path: impl AsRef<Path>) -> StorageResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self::from_connection(conn))
    }

    /// Open (creating if needed) a database file with write access
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let conn = Connection::open(path)?;
        Ok(Self::from_connection(conn))
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Run a batch of SQL. Used for seeding and fixtures, never by handlers.
    pub fn execute_batch(&self, sql: &str) -> StorageResult<()> {
        self.lock()?.execute_batch(sql)?;
        Ok(())
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl Storage for SqliteStorage {
    fn query_all(&self, statement: &Statement) -> StorageResult<Vec<Row>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(&statement.sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let rows = stmt.query_map(params_from_iter(statement.params.iter()), |row| {
            decode_row(row, &columns)
        })?;

        let records = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn query_one(&self, statement: &Statement) -> StorageResult<Option<Row>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(&statement.sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt.query(params_from_iter(statement.params.iter()))?;
        let record = match rows.next()? {
            Some(row) => Some(decode_row(row, &columns)?),
            None => None,
        };
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SelectBuilder, Table};
    use serde_json::json;
    use tempfile::TempDir;

    fn storage() -> SqliteStorage {
        let storage = SqliteStorage::open_in_memory().unwrap();
        storage
            .execute_batch(
                "CREATE TABLE dishes (id INTEGER PRIMARY KEY, name TEXT, price INTEGER, isVeg INTEGER);
                 INSERT INTO dishes VALUES (1, 'Dal', 120, 1), (2, 'Kebab', 240, 0);",
            )
            .unwrap();
        storage
    }

    #[test]
    fn test_rows_keep_column_order() {
        let rows = storage()
            .query_all(&SelectBuilder::select(Table::Dishes).build())
            .unwrap();
        assert_eq!(rows.len(), 2);
        let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "name", "price", "isVeg"]);
    }

    #[test]
    fn test_bool_binds_as_integer() {
        let stmt = SelectBuilder::select(Table::Dishes)
            .where_eq("isVeg", true)
            .build();
        let rows = storage().query_all(&stmt).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], json!("Dal"));
    }

    #[test]
    fn test_query_one_missing() {
        let stmt = SelectBuilder::select(Table::Dishes)
            .where_eq("id", 999_i64)
            .build();
        assert!(storage().query_one(&stmt).unwrap().is_none());
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let stmt = SelectBuilder::select(Table::Restaurants).build();
        let err = storage().query_all(&stmt).unwrap_err();
        assert!(err.to_string().contains("no such table"));
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.sqlite");
        SqliteStorage::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE dishes (id INTEGER PRIMARY KEY);")
            .unwrap();

        let storage = SqliteStorage::open_read_only(&path).unwrap();
        assert!(storage.execute_batch("INSERT INTO dishes VALUES (1);").is_err());
        assert!(storage
            .query_all(&SelectBuilder::select(Table::Dishes).build())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_read_only_requires_existing_file() {
        let tmp = TempDir::new().unwrap();
        assert!(SqliteStorage::open_read_only(tmp.path().join("absent.sqlite")).is_err());
    }
}
