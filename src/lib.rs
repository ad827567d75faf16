// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-ard: HLA allele nomenclature web gateway
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! # Example
//!
//! ```
//! use ferro_ard::service::gateway;
//! use ferro_ard::TableArd;
//!
//! // Backend with a small sample dataset
//! let ard = TableArd::with_test_data();
//!
//! // Expand a multiple allele code
//! let response = gateway::expand_mac(&ard, "A*01:AB").unwrap();
//! assert_eq!(response.gl_string, "A*01:01/A*01:02");
//! ```

pub mod ard;
pub mod error;
pub mod service;

// Re-export commonly used types
pub use ard::{Ard, ReductionMethod, TableArd};
pub use error::ArdError;

/// Result type alias for ferro-ard operations
pub type Result<T> = std::result::Result<T, ArdError>;
