//! Allele-nomenclature backend interface
//!
//! The web gateway never looks inside GL strings or code tables itself; it
//! talks to a backend through the [`Ard`] trait. Implementations might include:
//! - [`TableArd`] backed by JSON lookup tables (and built-in sample data)
//! - stub implementations in tests

pub mod gl_string;
pub mod table;

pub use table::{ArdTables, ReductionMethod, TableArd};

use crate::error::ArdError;

/// Capabilities the gateway needs from an allele-nomenclature backend
///
/// A single instance is shared by every request, so implementations must be
/// safe to call concurrently.
pub trait Ard: Send + Sync {
    /// Check that a GL string is valid
    ///
    /// Returns [`ArdError::InvalidAllele`] with a human-readable cause when the
    /// string fails nomenclature validation, or another variant for any other
    /// failure.
    fn is_valid_gl(&self, gl_string: &str) -> Result<(), ArdError>;

    /// Reduce a GL string using the named reduction method
    fn redux_gl(&self, gl_string: &str, reduction_method: &str) -> Result<String, ArdError>;

    /// Whether `allele_code` is a multiple allele code
    fn is_mac(&self, allele_code: &str) -> bool;

    /// Expand a multiple allele code into its ordered list of alleles
    fn expand_mac(&self, allele_code: &str) -> Result<Vec<String>, ArdError>;
}
