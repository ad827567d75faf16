//! MAC expansion endpoint

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::Uri,
};

use crate::service::{
    gateway,
    handlers::{reject, run_gateway, HandlerResult},
    server::AppState,
    types::{GatewayError, MacResponse},
};

/// Expand the multiple allele code given as the path parameter
pub async fn expand_mac(
    State(state): State<AppState>,
    uri: Uri,
    allele_code: Result<Path<String>, PathRejection>,
) -> HandlerResult<MacResponse> {
    // An undecodable segment cannot name a MAC
    let Path(allele_code) = allele_code.map_err(|rejection| {
        tracing::debug!("mac path rejected: {}", rejection);
        let segment = uri.path().rsplit('/').next().unwrap_or_default();
        reject(&GatewayError::NotAMac(segment.to_string()))
    })?;

    let ard = state.ard.clone();

    run_gateway("mac", move || gateway::expand_mac(ard.as_ref(), &allele_code)).await
}
