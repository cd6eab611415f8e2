//! Request logging middleware

use std::time::{Duration, Instant};

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use uuid::Uuid;

use crate::observability::Logger;

/// Log one `HTTP_REQUEST` event per request, after the response is built
pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let fields = request_fields(
        &method,
        &path,
        response.status(),
        started.elapsed(),
        &request_id,
    );
    let borrowed: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
    Logger::info("HTTP_REQUEST", &borrowed);

    response
}

/// Fields of an `HTTP_REQUEST` event
pub(crate) fn request_fields(
    method: &str,
    path: &str,
    status: StatusCode,
    elapsed: Duration,
    request_id: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("duration_ms", elapsed.as_millis().to_string()),
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("request_id", request_id.to_string()),
        ("status", status.as_u16().to_string()),
    ]
}
