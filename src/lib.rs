//! Contact Book - a command-line personal address book.
//!
//! Contacts carry phone numbers, emails, postal addresses, a birthday and a
//! group. The book answers which birthdays fall in the coming week and is
//! stored as JSON between runs.
//!
//! # Architecture
//!
//! - **domain**: Self-validating field values and field kinds
//! - **models**: Contact records and the address book
//! - **birthdays**: Upcoming-birthday computation with weekend shifting
//! - **repositories**: Saving and loading the record collection
//! - **shell**: Command table, handlers and the interactive loop
//! - **config**: Configuration from environment variables
//! - **error**: Error types for every layer

pub mod birthdays;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod shell;

pub use birthdays::UpcomingBirthday;
pub use config::Config;
pub use domain::{FieldKind, FieldValue, ValidationError};
pub use error::{BookError, CommandError, ConfigError, PersistenceError};
pub use models::{AddressBook, FieldOperation, Record, SingletonPolicy};
pub use repositories::{BookRepository, JsonFileRepository};
pub use shell::{run_shell, CommandContext};
