//! Contact record and its field-mutation protocol.

use crate::domain::{
    Birthday, ContactName, EmailAddress, FieldKind, FieldValue, GroupLabel, PhoneNumber,
    PostalAddress, ValidationError,
};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What `add_field` does when a singleton field (birthday, group) is already set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingletonPolicy {
    /// Last write wins.
    #[default]
    Replace,
    /// Fail with `BookError::DuplicateField`.
    Reject,
}

impl FromStr for SingletonPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "reject" => Ok(Self::Reject),
            other => Err(format!("expected replace or reject, got: {}", other)),
        }
    }
}

/// One contact: a name plus its phones, emails, addresses, birthday and group.
///
/// Multi-valued collections keep insertion order and never hold the same
/// value twice. Every mutation either succeeds or leaves the record as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredRecord")]
pub struct Record {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    emails: Vec<EmailAddress>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    addresses: Vec<PostalAddress>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    group: Option<GroupLabel>,
}

/// A record as written on disk, before the no-duplicates rule is checked.
#[derive(Debug, Deserialize)]
pub(crate) struct StoredRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    emails: Vec<EmailAddress>,

    #[serde(default)]
    addresses: Vec<PostalAddress>,

    #[serde(default)]
    birthday: Option<Birthday>,

    #[serde(default)]
    group: Option<GroupLabel>,
}

impl TryFrom<StoredRecord> for Record {
    type Error = BookError;

    fn try_from(stored: StoredRecord) -> BookResult<Self> {
        let mut record = Record::with_name(stored.name);
        for phone in stored.phones {
            insert_unique(&mut record.phones, phone, FieldKind::Phone)?;
        }
        for email in stored.emails {
            insert_unique(&mut record.emails, email, FieldKind::Email)?;
        }
        for address in stored.addresses {
            insert_unique(&mut record.addresses, address, FieldKind::Address)?;
        }
        record.birthday = stored.birthday;
        record.group = stored.group;
        Ok(record)
    }
}

impl Record {
    /// Create an empty record carrying only a name.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            emails: Vec::new(),
            addresses: Vec::new(),
            birthday: None,
            group: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn emails(&self) -> &[EmailAddress] {
        &self.emails
    }

    pub fn addresses(&self) -> &[PostalAddress] {
        &self.addresses
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn group(&self) -> Option<&GroupLabel> {
        self.group.as_ref()
    }

    /// Validate `raw` as `kind` and add it, replacing an existing singleton.
    pub fn add_field(&mut self, kind: FieldKind, raw: &str) -> BookResult<()> {
        self.add_field_with_policy(kind, raw, SingletonPolicy::Replace)
    }

    /// Validate `raw` as `kind` and add it under the given singleton policy.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if `raw` is not a valid `kind`
    /// - `BookError::DuplicateField` if a multi-valued collection already holds
    ///   the value, or a singleton is set and `policy` is `Reject`
    pub fn add_field_with_policy(
        &mut self,
        kind: FieldKind,
        raw: &str,
        policy: SingletonPolicy,
    ) -> BookResult<()> {
        let value = kind.parse_value(raw)?;
        self.add_value(value, policy)
    }

    /// Add an already validated value.
    pub fn add_value(&mut self, value: FieldValue, policy: SingletonPolicy) -> BookResult<()> {
        match value {
            FieldValue::Phone(phone) => insert_unique(&mut self.phones, phone, FieldKind::Phone),
            FieldValue::Email(email) => insert_unique(&mut self.emails, email, FieldKind::Email),
            FieldValue::Address(address) => {
                insert_unique(&mut self.addresses, address, FieldKind::Address)
            }
            FieldValue::Birthday(birthday) => {
                set_singleton(&mut self.birthday, birthday, FieldKind::Birthday, policy)
            }
            FieldValue::Group(group) => {
                set_singleton(&mut self.group, group, FieldKind::Group, policy)
            }
        }
    }

    /// Remove a value of `kind`.
    ///
    /// Multi-valued kinds need an exact match of `raw`. Singletons are
    /// removed whenever present; `raw` is only echoed in the error.
    pub fn delete_field(&mut self, kind: FieldKind, raw: &str) -> BookResult<()> {
        match kind {
            FieldKind::Phone => remove_exact(&mut self.phones, &PhoneNumber::new(raw)?, kind),
            FieldKind::Email => remove_exact(&mut self.emails, &EmailAddress::new(raw)?, kind),
            FieldKind::Address => {
                remove_exact(&mut self.addresses, &PostalAddress::new(raw)?, kind)
            }
            FieldKind::Birthday => take_singleton(&mut self.birthday, kind, raw),
            FieldKind::Group => take_singleton(&mut self.group, kind, raw),
        }
    }

    /// Replace a value of `kind` with `new_raw`.
    ///
    /// For multi-valued kinds `old_raw` selects the value to replace; it may
    /// be omitted only when exactly one value is stored. Singletons are set
    /// to the new value and `old_raw` is ignored.
    ///
    /// # Errors
    ///
    /// - `BookError::FieldNotFound` if `old_raw` is not stored, or nothing is stored
    /// - `BookError::AmbiguousField` if `old_raw` is omitted and several values are stored
    /// - `BookError::DuplicateField` if `new_raw` is already stored elsewhere
    pub fn change_field(
        &mut self,
        kind: FieldKind,
        new_raw: &str,
        old_raw: Option<&str>,
    ) -> BookResult<()> {
        match kind.parse_value(new_raw)? {
            FieldValue::Phone(new) => {
                let old = old_raw.map(PhoneNumber::new).transpose()?;
                replace_in(&mut self.phones, new, old, kind)
            }
            FieldValue::Email(new) => {
                let old = old_raw.map(EmailAddress::new).transpose()?;
                replace_in(&mut self.emails, new, old, kind)
            }
            FieldValue::Address(new) => {
                let old = old_raw.map(PostalAddress::new).transpose()?;
                replace_in(&mut self.addresses, new, old, kind)
            }
            FieldValue::Birthday(new) => {
                self.birthday = Some(new);
                Ok(())
            }
            FieldValue::Group(new) => {
                self.group = Some(new);
                Ok(())
            }
        }
    }

    /// Number of values currently stored for `kind`.
    pub fn count(&self, kind: FieldKind) -> usize {
        match kind {
            FieldKind::Phone => self.phones.len(),
            FieldKind::Email => self.emails.len(),
            FieldKind::Address => self.addresses.len(),
            FieldKind::Birthday => usize::from(self.birthday.is_some()),
            FieldKind::Group => usize::from(self.group.is_some()),
        }
    }
}

fn insert_unique<T>(items: &mut Vec<T>, value: T, kind: FieldKind) -> BookResult<()>
where
    T: PartialEq + fmt::Display,
{
    if items.contains(&value) {
        return Err(BookError::DuplicateField {
            kind,
            value: value.to_string(),
        });
    }
    items.push(value);
    Ok(())
}

fn set_singleton<T>(
    slot: &mut Option<T>,
    value: T,
    kind: FieldKind,
    policy: SingletonPolicy,
) -> BookResult<()>
where
    T: fmt::Display,
{
    if let (Some(existing), SingletonPolicy::Reject) = (slot.as_ref(), policy) {
        return Err(BookError::DuplicateField {
            kind,
            value: existing.to_string(),
        });
    }
    *slot = Some(value);
    Ok(())
}

fn remove_exact<T>(items: &mut Vec<T>, value: &T, kind: FieldKind) -> BookResult<()>
where
    T: PartialEq + fmt::Display,
{
    let index = items
        .iter()
        .position(|item| item == value)
        .ok_or_else(|| BookError::FieldNotFound {
            kind,
            value: value.to_string(),
        })?;
    items.remove(index);
    Ok(())
}

fn take_singleton<T>(slot: &mut Option<T>, kind: FieldKind, raw: &str) -> BookResult<()> {
    slot.take().map(|_| ()).ok_or_else(|| BookError::FieldNotFound {
        kind,
        value: raw.to_string(),
    })
}

fn replace_in<T>(items: &mut [T], new: T, old: Option<T>, kind: FieldKind) -> BookResult<()>
where
    T: PartialEq + fmt::Display,
{
    let index = match old {
        Some(old) => items
            .iter()
            .position(|item| *item == old)
            .ok_or_else(|| BookError::FieldNotFound {
                kind,
                value: old.to_string(),
            })?,
        None => match items.len() {
            0 => {
                return Err(BookError::FieldNotFound {
                    kind,
                    value: "no values recorded".to_string(),
                })
            }
            1 => 0,
            count => return Err(BookError::AmbiguousField { kind, count }),
        },
    };

    if items
        .iter()
        .enumerate()
        .any(|(i, item)| i != index && *item == new)
    {
        return Err(BookError::DuplicateField {
            kind,
            value: new.to_string(),
        });
    }

    items[index] = new;
    Ok(())
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "  Phones: {}", join(&self.phones))?;
        writeln!(f, "  Emails: {}", join(&self.emails))?;
        writeln!(f, "  Addresses: {}", join(&self.addresses))?;
        match &self.birthday {
            Some(birthday) => writeln!(f, "  Birthday: {}", birthday)?,
            None => writeln!(f, "  Birthday: -")?,
        }
        match &self.group {
            Some(group) => write!(f, "  Group: {}", group),
            None => write!(f, "  Group: -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record::new("Alice").unwrap()
    }

    #[test]
    fn test_new_record_is_empty() {
        let r = record();
        assert_eq!(r.name().as_str(), "Alice");
        for kind in FieldKind::ALL {
            assert_eq!(r.count(kind), 0);
        }
    }

    #[test]
    fn test_add_duplicate_phone_fails_and_keeps_size() {
        let mut r = record();
        r.add_field(FieldKind::Phone, "0501234567").unwrap();
        let err = r.add_field(FieldKind::Phone, "0501234567").unwrap_err();
        assert!(matches!(err, BookError::DuplicateField { kind: FieldKind::Phone, .. }));
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn test_add_invalid_value_leaves_record_unchanged() {
        let mut r = record();
        let before = r.clone();
        assert!(matches!(
            r.add_field(FieldKind::Email, "not-an-email"),
            Err(BookError::Validation(ValidationError::InvalidEmail(_)))
        ));
        assert_eq!(r, before);
    }

    #[test]
    fn test_multi_valued_fields_keep_insertion_order() {
        let mut r = record();
        r.add_field(FieldKind::Address, "Kyiv").unwrap();
        r.add_field(FieldKind::Address, "Lviv").unwrap();
        r.add_field(FieldKind::Address, "Odesa").unwrap();
        let addresses: Vec<&str> = r.addresses().iter().map(|a| a.as_str()).collect();
        assert_eq!(addresses, vec!["Kyiv", "Lviv", "Odesa"]);
    }

    #[test]
    fn test_birthday_replaces_under_default_policy() {
        let mut r = record();
        r.add_field(FieldKind::Birthday, "01.01.1990").unwrap();
        r.add_field(FieldKind::Birthday, "02.02.1991").unwrap();
        assert_eq!(r.birthday().unwrap().to_string(), "02.02.1991");
    }

    #[test]
    fn test_singleton_reject_policy() {
        let mut r = record();
        r.add_field_with_policy(FieldKind::Group, "work", SingletonPolicy::Reject)
            .unwrap();
        let err = r
            .add_field_with_policy(FieldKind::Group, "family", SingletonPolicy::Reject)
            .unwrap_err();
        assert_eq!(
            err,
            BookError::DuplicateField {
                kind: FieldKind::Group,
                value: "work".to_string()
            }
        );
        assert_eq!(r.group().unwrap().as_str(), "work");
    }

    #[test]
    fn test_delete_field() {
        let mut r = record();
        r.add_field(FieldKind::Phone, "0501234567").unwrap();
        r.add_field(FieldKind::Phone, "0671234567").unwrap();
        r.delete_field(FieldKind::Phone, "0501234567").unwrap();
        assert_eq!(r.phones()[0].as_str(), "0671234567");

        let err = r.delete_field(FieldKind::Phone, "0501234567").unwrap_err();
        assert!(matches!(err, BookError::FieldNotFound { .. }));
    }

    #[test]
    fn test_delete_singleton() {
        let mut r = record();
        assert!(matches!(
            r.delete_field(FieldKind::Birthday, "01.01.1990"),
            Err(BookError::FieldNotFound { kind: FieldKind::Birthday, .. })
        ));
        r.add_field(FieldKind::Birthday, "01.01.1990").unwrap();
        r.delete_field(FieldKind::Birthday, "01.01.1990").unwrap();
        assert!(r.birthday().is_none());
    }

    #[test]
    fn test_change_single_entry_without_old_value() {
        let mut r = record();
        r.add_field(FieldKind::Email, "a@example.com").unwrap();
        r.change_field(FieldKind::Email, "b@example.com", None).unwrap();
        assert_eq!(r.emails()[0].as_str(), "b@example.com");
    }

    #[test]
    fn test_change_ambiguous_without_old_value() {
        let mut r = record();
        r.add_field(FieldKind::Phone, "0501234567").unwrap();
        r.add_field(FieldKind::Phone, "0671234567").unwrap();
        let err = r
            .change_field(FieldKind::Phone, "0931234567", None)
            .unwrap_err();
        assert_eq!(
            err,
            BookError::AmbiguousField {
                kind: FieldKind::Phone,
                count: 2
            }
        );
    }

    #[test]
    fn test_change_with_old_value_replaces_in_place() {
        let mut r = record();
        r.add_field(FieldKind::Phone, "0501234567").unwrap();
        r.add_field(FieldKind::Phone, "0671234567").unwrap();
        r.change_field(FieldKind::Phone, "0931234567", Some("0501234567"))
            .unwrap();
        let phones: Vec<&str> = r.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["0931234567", "0671234567"]);
    }

    #[test]
    fn test_change_missing_old_value() {
        let mut r = record();
        r.add_field(FieldKind::Phone, "0501234567").unwrap();
        assert!(matches!(
            r.change_field(FieldKind::Phone, "0931234567", Some("0671234567")),
            Err(BookError::FieldNotFound { .. })
        ));
        assert!(matches!(
            record().change_field(FieldKind::Phone, "0931234567", None),
            Err(BookError::FieldNotFound { .. })
        ));
    }

    #[test]
    fn test_change_to_existing_value_is_duplicate() {
        let mut r = record();
        r.add_field(FieldKind::Phone, "0501234567").unwrap();
        r.add_field(FieldKind::Phone, "0671234567").unwrap();
        assert!(matches!(
            r.change_field(FieldKind::Phone, "0671234567", Some("0501234567")),
            Err(BookError::DuplicateField { .. })
        ));
        // Replacing a value with itself is a no-op, not a duplicate
        r.change_field(FieldKind::Phone, "0501234567", Some("0501234567"))
            .unwrap();
    }

    #[test]
    fn test_change_singleton_sets_value() {
        let mut r = record();
        r.change_field(FieldKind::Group, "friends", None).unwrap();
        assert_eq!(r.group().unwrap().as_str(), "friends");
        r.change_field(FieldKind::Group, "work", Some("ignored")).unwrap();
        assert_eq!(r.group().unwrap().as_str(), "work");
    }

    #[test]
    fn test_record_serialization_skips_empty_fields() {
        let json = serde_json::to_string(&record()).unwrap();
        assert_eq!(json, r#"{"name":"Alice"}"#);
    }

    #[test]
    fn test_record_display() {
        let mut r = record();
        r.add_field(FieldKind::Phone, "0501234567").unwrap();
        let text = r.to_string();
        assert!(text.starts_with("Name: Alice"));
        assert!(text.contains("Phones: 0501234567"));
        assert!(text.contains("Birthday: -"));
    }

    #[test]
    fn test_deserialize_rejects_repeated_phone() {
        let json = r#"{"name":"A","phones":["0501234567","0501234567"]}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn test_stored_record_rebuild_reports_duplicate() {
        let stored: StoredRecord = serde_json::from_str(
            r#"{"name":"A","emails":["a@example.com","b@example.com","a@example.com"]}"#,
        )
        .unwrap();
        assert_eq!(
            Record::try_from(stored),
            Err(BookError::DuplicateField {
                kind: FieldKind::Email,
                value: "a@example.com".to_string(),
            })
        );
    }
}
