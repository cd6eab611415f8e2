//! Shared fixtures for catalog integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use dinedb::catalog::Catalog;
use dinedb::query::Statement;
use dinedb::rest_api::{CatalogApp, CatalogServer, ServerConfig};
use dinedb::storage::{seed, Row, SqliteStorage, Storage, StorageError, StorageResult};

/// Five restaurants (ids 1, 3, 5 veg) and four dishes
pub fn demo_catalog() -> Catalog {
    let storage = SqliteStorage::open_in_memory().unwrap();
    seed::load_demo(&storage).unwrap();
    Catalog::new(Arc::new(storage))
}

/// Both tables present, no rows
pub fn empty_catalog() -> Catalog {
    let storage = SqliteStorage::open_in_memory().unwrap();
    storage.execute_batch(seed::SCHEMA).unwrap();
    Catalog::new(Arc::new(storage))
}

/// A database with no tables: every query fails inside SQLite
pub fn tableless_catalog() -> Catalog {
    Catalog::new(Arc::new(SqliteStorage::open_in_memory().unwrap()))
}

/// Storage that fails every call with a fixed message
pub struct FailingStorage(pub &'static str);

impl Storage for FailingStorage {
    fn query_all(&self, _: &Statement) -> StorageResult<Vec<Row>> {
        Err(StorageError::Join(self.0.to_string()))
    }

    fn query_one(&self, _: &Statement) -> StorageResult<Option<Row>> {
        Err(StorageError::Join(self.0.to_string()))
    }
}

pub fn failing_catalog(message: &'static str) -> Catalog {
    Catalog::new(Arc::new(FailingStorage(message)))
}

pub fn router(catalog: Catalog) -> CatalogApp {
    CatalogServer::new(ServerConfig::default(), catalog).app()
}

/// Issue a GET and decode the JSON body
pub async fn get_json(router: &CatalogApp, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub fn ids(records: &Value) -> Vec<i64> {
    records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}
