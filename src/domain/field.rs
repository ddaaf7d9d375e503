//! Field kinds and tagged field values.

use super::{Birthday, EmailAddress, GroupLabel, PhoneNumber, PostalAddress, ValidationError};
use std::fmt;
use std::str::FromStr;

/// A typed attribute category of a contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Phone,
    Email,
    Address,
    Birthday,
    Group,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Phone,
        FieldKind::Email,
        FieldKind::Address,
        FieldKind::Birthday,
        FieldKind::Group,
    ];

    /// Lowercase name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::Birthday => "birthday",
            Self::Group => "group",
        }
    }

    /// Kinds holding at most one value per record.
    pub fn is_singleton(&self) -> bool {
        matches!(self, Self::Birthday | Self::Group)
    }

    /// Validate `raw` as a value of this kind.
    pub fn parse_value(&self, raw: &str) -> Result<FieldValue, ValidationError> {
        Ok(match self {
            Self::Phone => FieldValue::Phone(PhoneNumber::new(raw)?),
            Self::Email => FieldValue::Email(EmailAddress::new(raw)?),
            Self::Address => FieldValue::Address(PostalAddress::new(raw)?),
            Self::Birthday => FieldValue::Birthday(Birthday::new(raw)?),
            Self::Group => FieldValue::Group(GroupLabel::new(raw)?),
        })
    }
}

impl FromStr for FieldKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == folded)
            .ok_or_else(|| ValidationError::UnknownFieldKind(s.to_string()))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated value of one field kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Phone(PhoneNumber),
    Email(EmailAddress),
    Address(PostalAddress),
    Birthday(Birthday),
    Group(GroupLabel),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Phone(_) => FieldKind::Phone,
            Self::Email(_) => FieldKind::Email,
            Self::Address(_) => FieldKind::Address,
            Self::Birthday(_) => FieldKind::Birthday,
            Self::Group(_) => FieldKind::Group,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phone(v) => v.fmt(f),
            Self::Email(v) => v.fmt(f),
            Self::Address(v) => v.fmt(f),
            Self::Birthday(v) => v.fmt(f),
            Self::Group(v) => v.fmt(f),
        }
    }
}
