//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by record mutations and queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to edit is not on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// The record has no birthday set
    #[error("No birthday set for {0}")]
    NoBirthday(String),

    /// The next birthday falls outside the representable date range
    #[error("Birthday date out of range for {0}")]
    DateOutOfRange(String),
}

/// Errors that can occur while saving or loading a book.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The book could not be encoded
    #[error("Failed to encode address book: {0}")]
    Encode(String),

    /// The file contents are not a valid address book
    #[error("Failed to decode address book: {0}")]
    Decode(String),

    /// The file was written by an unknown format version
    #[error("Unsupported address book format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
