//! Day-granularity normalization, arithmetic and keys.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

use crate::error::CalendarError;

/// Format of the canonical day key.
const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// A value that denotes a calendar day, possibly with a time-of-day component.
pub trait ToDay {
    /// Returns the calendar day, discarding any time-of-day component.
    fn to_day(&self) -> NaiveDate;
}

impl ToDay for NaiveDate {
    fn to_day(&self) -> NaiveDate {
        *self
    }
}

impl ToDay for NaiveDateTime {
    fn to_day(&self) -> NaiveDate {
        self.date()
    }
}

/// Uses the local date in the value's own time zone.
impl<Tz: TimeZone> ToDay for DateTime<Tz> {
    fn to_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Truncates a date-like value to day granularity.
///
/// Idempotent: `normalize(normalize(d)) == normalize(d)`.
pub fn normalize<D: ToDay>(date: D) -> NaiveDate {
    date.to_day()
}

/// Returns the date `days` calendar days after `date` (before, if negative).
///
/// Returns `None` only when the result falls outside the range chrono can
/// represent.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

/// Signed number of calendar days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Canonical `YYYY-MM-DD` key; two dates share a key iff they are the same day.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` day key.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDayKey`] if `key` is not a valid calendar
/// date in that format.
pub fn parse_day_key(key: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(key.trim(), DAY_KEY_FORMAT).map_err(|_| {
        CalendarError::InvalidDayKey {
            key: key.to_string(),
        }
    })
}
