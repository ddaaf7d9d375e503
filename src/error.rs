//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{FieldKind, ValidationError};
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The exact value is already stored on the record
    #[error("{kind} {value} is already recorded for this contact")]
    DuplicateField { kind: FieldKind, value: String },

    /// No stored value matches
    #[error("{kind} not found for this contact: {value}")]
    FieldNotFound { kind: FieldKind, value: String },

    /// A change was requested without saying which of several values to replace
    #[error("Contact has {count} {kind} values, specify which one to change")]
    AmbiguousField { kind: FieldKind, count: usize },

    /// A contact with this name already exists
    #[error("Contact already exists: {0}")]
    DuplicateContact(String),

    /// No contact with this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

/// Errors raised while saving or loading the address book.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Underlying file system failure
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Stored data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored data decoded but violates a book invariant
    #[error("Corrupt address book: {0}")]
    Corrupt(#[from] BookError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced by the command shell.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The first word of the input is not a known command
    #[error("Command \"{0}\" not recognized, type help for the list of commands")]
    UnknownCommand(String),

    /// Wrong number of positional arguments
    #[error("Command {command} expects {expected} argument(s), got {actual}")]
    WrongArity {
        command: &'static str,
        expected: String,
        actual: usize,
    },

    #[error(transparent)]
    Book(#[from] BookError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::Validation(err))
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
