//! Request and response types for the ARD web service

use serde::{Deserialize, Serialize};

use crate::error::ArdError;

/// Successful GL string validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// Always `true`; invalid strings are reported through [`GatewayError`]
    pub valid: bool,
}

/// Successful GL string reduction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceResponse {
    /// The reduced GL string
    pub ard: String,
}

/// Successful MAC expansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacResponse {
    /// The requested allele code
    pub mac: String,
    /// Expanded alleles, in backend order
    pub alleles: Vec<String>,
    /// The alleles joined with `/`
    pub gl_string: String,
}

impl MacResponse {
    /// Build a response from an allele code and its expansion
    pub fn new(mac: impl Into<String>, alleles: Vec<String>) -> Self {
        let gl_string = alleles.join("/");
        Self {
            mac: mac.into(),
            alleles,
            gl_string,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status ("ok")
    pub status: String,
    /// Service version
    pub version: String,
    /// Time of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Seconds since the service started
    pub uptime_seconds: u64,
}

/// Error body returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorResponse {
    /// The GL string failed validation
    InvalidGlString {
        valid: bool,
        message: String,
        cause: String,
    },
    /// Any other failure
    Message { message: String },
}

/// Outcome of a gateway operation that did not succeed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// A required request field is absent
    #[error("{0}")]
    MissingField(&'static str),

    /// No request payload at all
    #[error("No input data provided")]
    NoInput,

    /// The backend rejected the GL string as invalid
    #[error("Provided GL String is invalid: {gl_string}")]
    InvalidGlString { gl_string: String, cause: String },

    /// Any other backend failure; the message is forwarded verbatim
    #[error("{0}")]
    Domain(String),

    /// The allele code is not a MAC
    #[error("{0} is not a valid MAC")]
    NotAMac(String),
}

impl GatewayError {
    /// Map a backend error raised outside GL string validation
    pub fn domain(err: ArdError) -> Self {
        GatewayError::Domain(err.message().to_string())
    }

    /// Convert to HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Domain(_) => 400,
            GatewayError::MissingField(_)
            | GatewayError::NoInput
            | GatewayError::InvalidGlString { .. }
            | GatewayError::NotAMac(_) => 404,
        }
    }

    /// Convert to error response
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            GatewayError::InvalidGlString { cause, .. } => ErrorResponse::InvalidGlString {
                valid: false,
                message: self.to_string(),
                cause: cause.clone(),
            },
            _ => ErrorResponse::Message {
                message: self.to_string(),
            },
        }
    }
}

/// Service error types for startup and configuration
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Data error: {0}")]
    DataError(#[from] ArdError),
}
