//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and storage format.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Alternative ISO 8601 input format.
const ISO_FORMAT: &str = "%Y-%m-%d";

/// A contact's date of birth.
///
/// Accepted input is `DD.MM.YYYY` or `YYYY-MM-DD`. The date must not lie
/// after the day it is validated on.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::Birthday;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let birthday = Birthday::parse_on("14.06.1990", today).unwrap();
/// assert_eq!(birthday.to_string(), "14.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday, validating it against the local current date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for text that is not a
    /// calendar date and `ValidationError::FutureBirthday` for future dates.
    pub fn new(input: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::parse_on(input, Local::now().date_naive())
    }

    /// Parse a birthday, validating it against `today`.
    pub fn parse_on(input: impl AsRef<str>, today: NaiveDate) -> Result<Self, ValidationError> {
        let input = input.as_ref().trim();
        let date = NaiveDate::parse_from_str(input, BIRTHDAY_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(input, ISO_FORMAT))
            .map_err(|_| ValidationError::InvalidBirthday(input.to_string()))?;
        Self::from_date(date, today)
    }

    /// Wrap an already parsed date, validating it against `today`.
    pub fn from_date(date: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        if date > today {
            return Err(ValidationError::FutureBirthday(
                date.format(BIRTHDAY_FORMAT).to_string(),
            ));
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// 29 February falls on 28 February in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day() - 1))
            .unwrap_or(self.0)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
