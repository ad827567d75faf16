//! Error types for ferro-ard
//!
//! Errors raised by an allele-nomenclature backend. Every variant carries the
//! backend's human-readable message and displays it verbatim, so the web layer
//! can forward it to clients unchanged.

use thiserror::Error;

/// Errors raised by an [`Ard`](crate::ard::Ard) implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArdError {
    /// The GL string (or one of its alleles) failed nomenclature validation
    #[error("{0}")]
    InvalidAllele(String),

    /// The allele code is not a known multiple allele code
    #[error("{0}")]
    InvalidMac(String),

    /// The requested reduction method is not supported
    #[error("{0}")]
    InvalidReductionMethod(String),

    /// Reference data is missing or could not be loaded
    #[error("{0}")]
    Data(String),
}

impl ArdError {
    /// Whether this error signals an invalid allele or GL string
    pub fn is_invalid_allele(&self) -> bool {
        matches!(self, ArdError::InvalidAllele(_))
    }

    /// The backend-provided message
    pub fn message(&self) -> &str {
        match self {
            ArdError::InvalidAllele(msg)
            | ArdError::InvalidMac(msg)
            | ArdError::InvalidReductionMethod(msg)
            | ArdError::Data(msg) => msg,
        }
    }
}

impl From<std::io::Error> for ArdError {
    fn from(err: std::io::Error) -> Self {
        ArdError::Data(err.to_string())
    }
}

impl From<serde_json::Error> for ArdError {
    fn from(err: serde_json::Error) -> Self {
        ArdError::Data(format!("Invalid ARD data file: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_verbatim() {
        let err = ArdError::InvalidReductionMethod("bad method".to_string());
        assert_eq!(err.to_string(), "bad method");
        assert_eq!(err.message(), "bad method");
    }

    #[test]
    fn test_is_invalid_allele() {
        assert!(ArdError::InvalidAllele("x".to_string()).is_invalid_allele());
        assert!(!ArdError::InvalidMac("x".to_string()).is_invalid_allele());
        assert!(!ArdError::Data("x".to_string()).is_invalid_allele());
    }
}
