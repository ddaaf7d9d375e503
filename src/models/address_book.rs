//! The address book: records keyed by name, in insertion order.

use super::record::{Record, SingletonPolicy};
use crate::birthdays::{self, UpcomingBirthday};
use crate::domain::{ContactName, FieldKind, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Field-level operation routed through [`AddressBook::change_contact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOperation {
    Add,
    Delete,
    Change,
}

impl FromStr for FieldOperation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "del" | "delete" => Ok(Self::Delete),
            "change" => Ok(Self::Change),
            _ => Err(ValidationError::UnknownOperation(s.to_string())),
        }
    }
}

/// In-memory collection of contact records.
///
/// Records are stored in insertion order alongside a name index, so listing
/// and birthday ordering are deterministic. Names are trimmed and matched
/// case-sensitively.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<ContactName, usize>,
    singleton_policy: SingletonPolicy,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty book applying `policy` when a birthday or group is added twice.
    pub fn with_policy(policy: SingletonPolicy) -> Self {
        Self {
            singleton_policy: policy,
            ..Self::default()
        }
    }

    /// Rebuild a book from a loaded record collection, keeping its order.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateContact` if two records share a name.
    pub fn from_records(records: Vec<Record>, policy: SingletonPolicy) -> BookResult<Self> {
        let mut book = Self::with_policy(policy);
        for record in records {
            book.add_contact(record)?;
        }
        Ok(book)
    }

    pub fn singleton_policy(&self) -> SingletonPolicy {
        self.singleton_policy
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateContact` if the name is taken.
    pub fn add_contact(&mut self, record: Record) -> BookResult<()> {
        if self.index.contains_key(record.name()) {
            return Err(BookError::DuplicateContact(record.name().to_string()));
        }
        debug!(name = %record.name(), "Adding contact");
        self.index.insert(record.name().clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Look up a record by exact name.
    pub fn find_contact(&self, name: &str) -> BookResult<&Record> {
        let position = self.position(name)?;
        Ok(&self.records[position])
    }

    /// Remove a record by exact name, returning it.
    pub fn delete_contact(&mut self, name: &str) -> BookResult<Record> {
        let position = self.position(name)?;
        let record = self.records.remove(position);
        self.index.remove(record.name());
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        debug!(name = %record.name(), "Deleted contact");
        Ok(record)
    }

    /// Apply a field operation to the named record.
    ///
    /// `old_value` is only consulted by `FieldOperation::Change`. Record-level
    /// errors are returned unchanged.
    pub fn change_contact(
        &mut self,
        operation: FieldOperation,
        name: &str,
        kind: FieldKind,
        value: &str,
        old_value: Option<&str>,
    ) -> BookResult<&Record> {
        let position = self.position(name)?;
        let policy = self.singleton_policy;
        let record = &mut self.records[position];

        match operation {
            FieldOperation::Add => record.add_field_with_policy(kind, value, policy)?,
            FieldOperation::Delete => record.delete_field(kind, value)?,
            FieldOperation::Change => record.change_field(kind, value, old_value)?,
        }

        debug!(
            name = %record.name(),
            ?operation,
            %kind,
            "Contact field updated"
        );
        Ok(&*record)
    }

    /// Contacts to congratulate within `window_days` of `reference`.
    pub fn upcoming_birthdays(
        &self,
        reference: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        birthdays::upcoming(&self.records, reference, window_days)
    }

    fn position(&self, name: &str) -> BookResult<usize> {
        let key = ContactName::new(name)?;
        self.index
            .get(key.as_str())
            .copied()
            .ok_or_else(|| BookError::ContactNotFound(key.into_inner()))
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "Address book is empty.");
        }
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
