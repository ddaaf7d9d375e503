//! GroupLabel value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A free-form label used to group contacts (family, work, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupLabel(String);

impl GroupLabel {
    pub fn new(label: impl AsRef<str>) -> Result<Self, ValidationError> {
        let label = label.as_ref().trim();
        if label.is_empty() {
            return Err(ValidationError::EmptyGroup);
        }
        Ok(Self(label.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for GroupLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GroupLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        GroupLabel::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
