//! Comprehensive error handling system using `thiserror` and `anyhow`.
//!
//! This module provides domain-specific error types for precise error
//! handling, plus the `anyhow`-backed operational result alias used on
//! startup paths.

pub mod domain;

pub use domain::{CollectionError, Result};
