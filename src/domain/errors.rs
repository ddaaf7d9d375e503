//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// Every variant carries the offending input so the shell can echo it back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The contact name is empty or whitespace only.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("Invalid phone number: {0} (expected 10 digits)")]
    InvalidPhone(String),

    /// The provided email address is invalid.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The provided postal address is empty.
    #[error("Invalid address: {0:?}")]
    InvalidAddress(String),

    /// The provided birthday is not a calendar date.
    #[error("Invalid birthday: {0} (expected DD.MM.YYYY or YYYY-MM-DD)")]
    InvalidBirthday(String),

    /// The provided birthday lies in the future.
    #[error("Birthday cannot be in the future: {0}")]
    FutureBirthday(String),

    /// The group label is empty.
    #[error("Group label cannot be empty")]
    EmptyGroup,

    /// The field kind name is not one of the known kinds.
    #[error("Unknown field type: {0} (expected phone, email, address, birthday or group)")]
    UnknownFieldKind(String),

    /// The field operation name is not one of add, delete or change.
    #[error("Unknown field operation: {0}")]
    UnknownOperation(String),
}
