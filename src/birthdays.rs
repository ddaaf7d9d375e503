//! Upcoming-birthday computation.
//!
//! Anniversaries are computed from the month and day of each birthday. An
//! anniversary that falls on a weekend is congratulated on the following
//! Monday.

use crate::domain::{Birthday, ContactName};
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// Default length of the look-ahead window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact to congratulate and the day to do it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: ContactName,

    /// Anniversary as it falls in the calendar
    pub birthday: NaiveDate,

    /// Anniversary moved off the weekend
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.name,
            self.congratulation_date.format("%d.%m.%Y"),
            self.congratulation_date.weekday()
        )
    }
}

/// The first anniversary of `birthday` on or after `reference`.
pub fn next_anniversary(birthday: &Birthday, reference: NaiveDate) -> NaiveDate {
    let this_year = birthday.anniversary_in(reference.year());
    if this_year < reference {
        birthday.anniversary_in(reference.year() + 1)
    } else {
        this_year
    }
}

/// Move Saturday and Sunday forward to Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Contacts whose next anniversary falls in `[reference, reference + window_days)`.
///
/// Sorted by congratulation date; contacts sharing a date keep the order of
/// `records`.
pub fn upcoming<'a, I>(records: I, reference: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    // None when the window runs past the last representable date
    let window_end = reference.checked_add_signed(Duration::days(i64::from(window_days)));

    let mut upcoming: Vec<UpcomingBirthday> = records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let anniversary = next_anniversary(birthday, reference);
            window_end
                .map_or(true, |end| anniversary < end)
                .then(|| UpcomingBirthday {
                    name: record.name().clone(),
                    birthday: anniversary,
                    congratulation_date: congratulation_date(anniversary),
                })
        })
        .collect();

    // Stable sort keeps insertion order for ties
    upcoming.sort_by_key(|entry| entry.congratulation_date);
    upcoming
}
