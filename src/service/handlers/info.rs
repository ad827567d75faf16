//! Service information endpoint

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::ard::ReductionMethod;
use crate::service::server::AppState;

/// Provide basic service information
pub async fn service_info(State(state): State<AppState>) -> Json<Value> {
    let reduction_methods: Vec<&str> = ReductionMethod::all()
        .iter()
        .map(ReductionMethod::as_str)
        .collect();

    Json(json!({
        "service": "ferro-ard-web",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "HLA allele nomenclature web gateway",
        "reduction_methods": reduction_methods,
        "max_request_size": state.config.server.max_request_size,
        "endpoints": {
            "validate": "POST /validate",
            "reduce": "POST /reduce",
            "mac": "GET /mac/{allele_code}",
            "health": "GET /health",
            "info": "GET /info"
        }
    }))
}
