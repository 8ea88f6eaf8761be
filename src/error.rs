//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on an [`AddressBook`](crate::AddressBook).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// No record is stored under the requested name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
