//! GL string validation endpoint

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
};

use crate::service::{
    gateway,
    handlers::{run_gateway, HandlerResult},
    server::AppState,
    types::ValidateResponse,
    validation::decode_body,
};

/// Validate the `gl_string` of a JSON request body
///
/// An unreadable body (for example one over the size limit) is treated as
/// absent.
pub async fn validate_gl(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> HandlerResult<ValidateResponse> {
    let body = body.ok().and_then(|bytes| decode_body(&bytes));
    let ard = state.ard.clone();

    run_gateway("validate", move || gateway::validate(ard.as_ref(), body.as_ref())).await
}
