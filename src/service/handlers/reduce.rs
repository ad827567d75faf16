//! GL string reduction endpoint

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
};

use crate::service::{
    gateway,
    handlers::{run_gateway, HandlerResult},
    server::AppState,
    types::ReduceResponse,
    validation::decode_body,
};

/// Reduce the `gl_string` of a JSON request body using its `reduction_method`
pub async fn reduce_gl(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> HandlerResult<ReduceResponse> {
    let body = body.ok().and_then(|bytes| decode_body(&bytes));
    let ard = state.ard.clone();

    run_gateway("reduce", move || gateway::reduce(ard.as_ref(), body.as_ref())).await
}
