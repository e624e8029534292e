//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` text of [`AddressBookError`] is exactly what the user sees
//! when a command fails.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address book and command operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A phone number or birthday failed validation
    #[error(transparent)]
    InvalidFormat(#[from] ValidationError),

    /// No contact with the given name
    #[error("Name not found. Please, check and try again.")]
    ContactNotFound(String),

    /// The contact has no such phone number
    #[error("Phone number not found")]
    PhoneNotFound(String),

    /// Too few arguments were supplied to a command
    #[error("Enter correct information.")]
    ArgumentError {
        command: String,
        expected: usize,
        received: usize,
    },
}

/// Errors that can occur while loading or saving the database file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
