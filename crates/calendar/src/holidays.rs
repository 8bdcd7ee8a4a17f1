//! De-duplicated, sorted holiday set.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::date::{ToDay, normalize};

/// An immutable set of holiday dates.
///
/// Inputs are normalized to day granularity and de-duplicated; iteration is
/// in ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    days: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `date` is one of the holidays.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    /// Iterates over the holidays in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }

    /// Iterates over the holidays in `first..=last`, ascending.
    pub fn between(&self, first: NaiveDate, last: NaiveDate) -> impl Iterator<Item = NaiveDate> + '_ {
        let bounds = if first <= last {
            Some((first, last))
        } else {
            None
        };
        bounds
            .into_iter()
            .flat_map(move |(lo, hi)| self.days.range(lo..=hi).copied())
    }

    /// Returns the number of distinct holidays.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl<D: ToDay> FromIterator<D> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().map(normalize).collect(),
        }
    }
}
