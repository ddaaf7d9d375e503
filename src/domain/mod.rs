//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the attributes of a contact:
//! names, phone numbers, email addresses, postal addresses, birthdays and
//! group labels. These value objects validate at construction time, so an
//! invalid value can never be stored in a record.

pub mod address;
pub mod birthday;
pub mod email;
pub mod errors;
pub mod field;
pub mod group;
pub mod name;
pub mod phone;

pub use address::PostalAddress;
pub use birthday::Birthday;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::{FieldKind, FieldValue};
pub use group::GroupLabel;
pub use name::ContactName;
pub use phone::PhoneNumber;
