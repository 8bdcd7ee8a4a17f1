//! Extracted holiday entries.

use chrono::NaiveDate;
use serde::Serialize;

/// A candidate holiday harvested from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayEntry {
    /// Calendar date.
    pub date: NaiveDate,
    /// Text found on the same line, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Collects the dates of `entries`, in order.
pub fn entry_dates(entries: &[HolidayEntry]) -> Vec<NaiveDate> {
    entries.iter().map(|e| e.date).collect()
}
