//! Data models for the contact book.
//!
//! This module contains the contact record with its field-mutation protocol
//! and the address book that owns all records.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, FieldOperation};
pub use record::{Record, SingletonPolicy};
