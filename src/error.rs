//! Custom error types for voucher-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! The engine itself is deliberately lenient: malformed cells, dates, and
//! amounts degrade to absent/zero values instead of raising. The only fatal
//! engine condition is a source table with no rows at all.

use thiserror::Error;

/// The main error type for voucher-cli operations
#[derive(Error, Debug)]
pub enum VoucherError {
    /// Source table cannot be processed at all (e.g. zero rows)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors reading the ledger export
    #[error("Read error: {0}")]
    Read(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Errors writing voucher records
    #[error("Export error: {0}")]
    Export(String),

    /// Invalid user-supplied values (amounts, arguments)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl VoucherError {
    /// Create a schema error for an empty source table
    pub fn empty_table() -> Self {
        Self::Schema("source table contains no rows".into())
    }

    /// Check if this is a schema error
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for VoucherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VoucherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for VoucherError {
    fn from(err: csv::Error) -> Self {
        Self::Read(err.to_string())
    }
}

/// Result type alias for voucher-cli operations
pub type VoucherResult<T> = Result<T, VoucherError>;
