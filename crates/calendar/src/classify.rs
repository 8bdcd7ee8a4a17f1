//! Day classification against a holiday calendar.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::holidays::HolidaySet;

/// Classification of a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// A listed holiday (takes precedence over everything else).
    Holiday,
    /// Saturday or Sunday.
    Weekend,
    /// A working day selected to be taken as leave.
    SuggestedLeave,
    /// Any other day.
    WorkingDay,
}

impl DayKind {
    /// Returns `true` for every kind except [`DayKind::WorkingDay`].
    pub fn is_off(self) -> bool {
        !matches!(self, DayKind::WorkingDay)
    }
}

/// Returns `true` for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns `true` if `date` is in the holiday set.
pub fn is_holiday(date: NaiveDate, holidays: &HolidaySet) -> bool {
    holidays.contains(date)
}

/// Returns `true` if `date` is neither a weekend nor a holiday.
pub fn is_working_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    !is_weekend(date) && !is_holiday(date, holidays)
}

/// Classifies `date`, checking holiday, weekend and then leave.
pub fn classify(date: NaiveDate, holidays: &HolidaySet, leave: &BTreeSet<NaiveDate>) -> DayKind {
    if is_holiday(date, holidays) {
        DayKind::Holiday
    } else if is_weekend(date) {
        DayKind::Weekend
    } else if leave.contains(&date) {
        DayKind::SuggestedLeave
    } else {
        DayKind::WorkingDay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekend_days() {
        // Mon Jan 6 through Sun Jan 12, 2025
        let expected = [false, false, false, false, false, true, true];
        for (offset, &weekend) in expected.iter().enumerate() {
            let d = date(2025, 1, 6 + offset as u32);
            assert_eq!(is_weekend(d), weekend, "{d}");
        }
    }

    #[test]
    fn holiday_membership() {
        let holidays: HolidaySet = [date(2025, 1, 1)].into_iter().collect();
        assert!(is_holiday(date(2025, 1, 1), &holidays));
        assert!(!is_holiday(date(2025, 1, 2), &holidays));
    }

    #[test]
    fn working_day_excludes_holidays_and_weekends() {
        let holidays: HolidaySet = [date(2025, 1, 1)].into_iter().collect();
        assert!(!is_working_day(date(2025, 1, 1), &holidays)); // Wed holiday
        assert!(is_working_day(date(2025, 1, 2), &holidays)); // Thu
        assert!(!is_working_day(date(2025, 1, 4), &holidays)); // Sat
    }

    #[test]
    fn classify_precedence() {
        // Sat Jun 7, 2025 is both a holiday and a weekend day.
        let holidays: HolidaySet = [date(2025, 6, 7), date(2025, 6, 3)].into_iter().collect();
        let leave: BTreeSet<NaiveDate> = [date(2025, 6, 3), date(2025, 6, 4), date(2025, 6, 8)]
            .into_iter()
            .collect();
        assert_eq!(classify(date(2025, 6, 7), &holidays, &leave), DayKind::Holiday);
        assert_eq!(classify(date(2025, 6, 3), &holidays, &leave), DayKind::Holiday);
        assert_eq!(classify(date(2025, 6, 8), &holidays, &leave), DayKind::Weekend);
        assert_eq!(
            classify(date(2025, 6, 4), &holidays, &leave),
            DayKind::SuggestedLeave
        );
        assert_eq!(
            classify(date(2025, 6, 5), &holidays, &leave),
            DayKind::WorkingDay
        );
    }

    #[test]
    fn is_off() {
        assert!(DayKind::Holiday.is_off());
        assert!(DayKind::Weekend.is_off());
        assert!(DayKind::SuggestedLeave.is_off());
        assert!(!DayKind::WorkingDay.is_off());
    }
}
