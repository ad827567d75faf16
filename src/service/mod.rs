//! Web service module for HLA allele nomenclature
//!
//! This module provides a web API in front of an allele-nomenclature backend:
//! - GL string validation
//! - GL string reduction
//! - multiple allele code (MAC) expansion
//!
//! Request decoding and error mapping live in [`gateway`]; [`handlers`] adapt
//! it to HTTP.

pub mod config;
pub mod gateway;
pub mod handlers;
pub mod server;
pub mod types;
pub mod validation;

pub use config::ServiceConfig;
pub use server::{create_app, load_ard, AppState};
pub use types::*;
