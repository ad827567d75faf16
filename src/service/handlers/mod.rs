//! HTTP request handlers for the ARD web service

use axum::{http::StatusCode, response::Json};

use crate::service::types::{ErrorResponse, GatewayError};

pub mod health;
pub mod info;
pub mod mac;
pub mod reduce;
pub mod validate;

/// Handler result: a JSON success body, or a status code with a JSON error body
pub type HandlerResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Run a gateway operation on the blocking pool and map its outcome
///
/// A failed worker is reported as a domain error so every response keeps a
/// gateway status code.
async fn run_gateway<T, F>(operation: &'static str, f: F) -> HandlerResult<T>
where
    F: FnOnce() -> Result<T, GatewayError> + Send + 'static,
    T: Send + 'static,
{
    tracing::debug!("Handling {} request", operation);

    let outcome = tokio::task::spawn_blocking(f).await.unwrap_or_else(|e| {
        tracing::error!("{} task failed: {}", operation, e);
        Err(GatewayError::Domain(format!("Task error: {}", e)))
    });

    outcome.map(Json).map_err(|error| {
        tracing::debug!("{} request rejected: {}", operation, error);
        reject(&error)
    })
}

/// Pair a gateway error with its status code
pub fn reject(error: &GatewayError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::BAD_REQUEST),
        Json(error.to_response()),
    )
}
