//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command can fail with.
///
/// Each variant renders as the message shown to the user; see
/// [`crate::commands::translate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No contact is stored under the given name
    #[error("Name not found. Please, check and try again.")]
    ContactNotFound(String),

    /// Too few arguments, or an argument of the wrong kind
    #[error("Enter correct information.")]
    MalformedArguments,

    /// A phone, birthday, or name failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file could not be encoded or decoded
    #[error("Storage format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
