//! # Response Contract
//!
//! Every read endpoint ends in an [`Outcome`], converted to HTTP once:
//!
//! | Outcome    | Status | Body              |
//! |------------|--------|-------------------|
//! | `Found`    | 200    | `{<key>: data}`   |
//! | `NotFound` | 404    | `{message: "..."}`|
//! | `Fault`    | 500    | `{error: "..."}`  |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::observability::Logger;
use crate::storage::{Row, StorageError, StorageResult};

/// Result of a read endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Data to return under `key`
    Found { key: &'static str, data: Value },

    /// Nothing matched
    NotFound(String),

    /// Storage failed; carries the error text verbatim
    Fault(String),
}

/// 404 body
#[derive(Debug, Serialize)]
pub struct NotFoundBody {
    pub message: String,
}

/// 500 body
#[derive(Debug, Serialize)]
pub struct FaultBody {
    pub error: String,
}

impl Outcome {
    /// Map a collection lookup. An empty sequence is `NotFound`.
    pub fn rows(key: &'static str, not_found: &str, result: StorageResult<Vec<Row>>) -> Self {
        match result {
            Ok(rows) if rows.is_empty() => Outcome::NotFound(not_found.to_string()),
            Ok(rows) => Outcome::Found {
                key,
                data: Value::Array(rows.into_iter().map(Value::Object).collect()),
            },
            Err(err) => Outcome::fault(err),
        }
    }

    /// Map a single-record lookup
    pub fn record(key: &'static str, not_found: &str, result: StorageResult<Option<Row>>) -> Self {
        match result {
            Ok(Some(row)) => Outcome::Found {
                key,
                data: Value::Object(row),
            },
            Ok(None) => Outcome::NotFound(not_found.to_string()),
            Err(err) => Outcome::fault(err),
        }
    }

    fn fault(err: StorageError) -> Self {
        let message = err.to_string();
        Logger::error("STORAGE_FAULT", &[("error", &message)]);
        Outcome::Fault(message)
    }

    /// Get HTTP status code for this outcome
    pub fn status_code(&self) -> StatusCode {
        match self {
            Outcome::Found { .. } => StatusCode::OK,
            Outcome::NotFound(_) => StatusCode::NOT_FOUND,
            Outcome::Fault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Outcome::Found { key, data } => {
                let mut body = Map::with_capacity(1);
                body.insert(key.to_string(), data);
                (status, Json(Value::Object(body))).into_response()
            }
            Outcome::NotFound(message) => (status, Json(NotFoundBody { message })).into_response(),
            Outcome::Fault(error) => (status, Json(FaultBody { error })).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::capture;
    use serde_json::json;

    fn row(id: i64) -> Row {
        match json!({ "id": id, "name": "Dal" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_empty_rows_are_not_found() {
        let outcome = Outcome::rows("dishes", "No dishes found.", Ok(vec![]));
        assert_eq!(outcome, Outcome::NotFound("No dishes found.".to_string()));
        assert_eq!(outcome.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_rows_found() {
        let outcome = Outcome::rows("dishes", "No dishes found.", Ok(vec![row(1), row(2)]));
        match outcome {
            Outcome::Found { key, data } => {
                assert_eq!(key, "dishes");
                assert_eq!(data.as_array().unwrap().len(), 2);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_missing_record_is_not_found() {
        let outcome = Outcome::record("dish", "Dish not found.", Ok(None));
        assert_eq!(outcome, Outcome::NotFound("Dish not found.".to_string()));
    }

    #[test]
    fn test_record_found() {
        let outcome = Outcome::record("dish", "Dish not found.", Ok(Some(row(7))));
        assert_eq!(
            outcome,
            Outcome::Found {
                key: "dish",
                data: json!({ "id": 7, "name": "Dal" }),
            }
        );
    }

    #[test]
    fn test_storage_error_is_fault() {
        let outcome = Outcome::rows("restaurants", "No restaurants found.", Err(StorageError::Poisoned));
        assert_eq!(
            outcome,
            Outcome::Fault("storage connection lock poisoned".to_string())
        );
        assert_eq!(outcome.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_fault_logs_storage_error() {
        let events = capture::events(|| {
            let err = StorageError::Join("task panicked".to_string());
            Outcome::rows("dishes", "No dishes found.", Err(err));
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "STORAGE_FAULT");
        assert_eq!(events[0]["severity"], "ERROR");
        assert_eq!(events[0]["error"], "storage task failed: task panicked");
    }

    #[test]
    fn test_not_found_logs_nothing() {
        let events = capture::events(|| {
            Outcome::record("dish", "Dish not found.", Ok(None));
        });
        assert!(events.is_empty());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Outcome::Found { key: "dish", data: json!({}) }.into_response().status(),
            StatusCode::OK
        );
        assert_eq!(
            Outcome::NotFound("x".to_string()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Outcome::Fault("x".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
