//! Gateway operations: field extraction, backend call and outcome mapping
//!
//! These functions are transport-agnostic. Each takes the shared backend and
//! the decoded request, and returns either a success body or a
//! [`GatewayError`] that knows its own status code and error body. No backend
//! error escapes as anything other than a `GatewayError`.

use crate::ard::Ard;
use crate::service::types::{GatewayError, MacResponse, ReduceResponse, ValidateResponse};
use crate::service::validation::{required_str, RequestBody};

const GL_STRING: &str = "gl_string";
const REDUCTION_METHOD: &str = "reduction_method";

/// Validate the `gl_string` field of a request body
///
/// An absent body is treated the same as a body without `gl_string`.
pub fn validate(
    ard: &dyn Ard,
    body: Option<&RequestBody>,
) -> Result<ValidateResponse, GatewayError> {
    let gl_string = body
        .and_then(|b| required_str(b, GL_STRING))
        .ok_or(GatewayError::MissingField("gl_string not provided"))?;

    match ard.is_valid_gl(gl_string) {
        Ok(()) => Ok(ValidateResponse { valid: true }),
        Err(e) if e.is_invalid_allele() => Err(GatewayError::InvalidGlString {
            gl_string: gl_string.to_string(),
            cause: e.message().to_string(),
        }),
        Err(e) => Err(GatewayError::domain(e)),
    }
}

/// Reduce the `gl_string` field of a request body with `reduction_method`
pub fn reduce(ard: &dyn Ard, body: Option<&RequestBody>) -> Result<ReduceResponse, GatewayError> {
    let body = body.ok_or(GatewayError::NoInput)?;

    let (gl_string, reduction_method) =
        match (required_str(body, GL_STRING), required_str(body, REDUCTION_METHOD)) {
            (Some(gl_string), Some(method)) => (gl_string, method),
            _ => {
                return Err(GatewayError::MissingField(
                    "gl_string and reduction_method not provided",
                ))
            }
        };

    ard.redux_gl(gl_string, reduction_method)
        .map(|ard| ReduceResponse { ard })
        .map_err(GatewayError::domain)
}

/// Expand a multiple allele code
///
/// The code is passed to the backend as-is.
pub fn expand_mac(ard: &dyn Ard, allele_code: &str) -> Result<MacResponse, GatewayError> {
    if !ard.is_mac(allele_code) {
        return Err(GatewayError::NotAMac(allele_code.to_string()));
    }

    let alleles = ard.expand_mac(allele_code).map_err(GatewayError::domain)?;
    Ok(MacResponse::new(allele_code, alleles))
}
