//! Error types for the Routh stability analyzer.
//!
//! This module provides a unified error type [`RouthError`] that covers
//! all error conditions that can occur during coefficient parsing,
//! configuration, root delegation and report output.
//!
//! A zero pivot during array construction is deliberately absent here: it is
//! recovered by epsilon substitution and recorded on the array instead.

use thiserror::Error;

/// Result type alias using [`RouthError`].
pub type Result<T> = std::result::Result<T, RouthError>;

/// Unified error type for all Routh operations.
#[derive(Error, Debug)]
pub enum RouthError {
    // ============ Input Errors ============
    /// No token of the input parsed as a finite number
    #[error("Please enter valid coefficients")]
    NoValidCoefficients,

    /// A coefficient handed to the library directly is NaN or infinite
    #[error("Coefficient {index} is not finite (value: {value})")]
    NonFiniteCoefficient { index: usize, value: f64 },

    /// Invalid analysis or delegation parameter
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // ============ Root Service Errors ============
    /// The external root-finder failed or answered with garbage
    #[error("Root service unavailable: {reason}")]
    RootServiceUnavailable { reason: String },

    /// The external root-finder did not answer in time
    #[error("Root service timed out after {timeout_ms} ms")]
    RootServiceTimeout { timeout_ms: u64 },

    // ============ I/O Errors ============
    /// Error reading coefficients from stdin
    #[error("Failed to read coefficients: {source}")]
    InputReadError {
        #[source]
        source: std::io::Error,
    },

    /// Error encoding a report
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RouthError {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a root service failure
    pub fn root_service(reason: impl Into<String>) -> Self {
        Self::RootServiceUnavailable {
            reason: reason.into(),
        }
    }

    /// Whether this error came from the root-finder boundary.
    ///
    /// These never invalidate an already computed verdict.
    pub fn is_root_service(&self) -> bool {
        matches!(
            self,
            Self::RootServiceUnavailable { .. } | Self::RootServiceTimeout { .. }
        )
    }
}
