//! Growing a seed of leave dates into its full contiguous off-day block.

use std::collections::BTreeSet;

use bridgeday_calendar::{HolidaySet, add_days, classify, days_between};
use chrono::NaiveDate;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First day of the span.
    pub start: NaiveDate,
    /// Last day of the span.
    pub end: NaiveDate,
}

impl Span {
    /// Number of calendar days in the span, both ends included.
    pub fn total_days(&self) -> u32 {
        u32::try_from(days_between(self.start, self.end) + 1).unwrap_or(0)
    }

    /// Returns `true` if `date` lies within the span.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Expands `leave_dates` around `anchor` to the maximal contiguous run of
/// off days (weekends, holidays and the leave dates themselves).
///
/// The span starts at the earliest and ends at the latest of the anchor and
/// the leave dates, then grows one day at a time in each direction until the
/// neighbouring day is a working day. Growth also stops at the calendar's
/// representable limits.
pub fn extend_to_full_vacation(
    leave_dates: &[NaiveDate],
    holidays: &HolidaySet,
    anchor: NaiveDate,
) -> Span {
    let leave: BTreeSet<NaiveDate> = leave_dates.iter().copied().collect();
    let is_off = |d: NaiveDate| classify(d, holidays, &leave).is_off();

    let mut start = leave.first().map_or(anchor, |&first| first.min(anchor));
    let mut end = leave.last().map_or(anchor, |&last| last.max(anchor));

    while let Some(prev) = add_days(start, -1).filter(|&d| is_off(d)) {
        start = prev;
    }
    while let Some(next) = add_days(end, 1).filter(|&d| is_off(d)) {
        end = next;
    }

    Span { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgeday_calendar::is_weekend;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn total_days_inclusive() {
        let span = Span {
            start: date(2025, 1, 4),
            end: date(2025, 1, 4),
        };
        assert_eq!(span.total_days(), 1);
        let span = Span {
            start: date(2025, 1, 4),
            end: date(2025, 1, 12),
        };
        assert_eq!(span.total_days(), 9);
    }

    #[test]
    fn contains_bounds() {
        let span = Span {
            start: date(2025, 1, 4),
            end: date(2025, 1, 6),
        };
        assert!(span.contains(date(2025, 1, 4)));
        assert!(span.contains(date(2025, 1, 6)));
        assert!(!span.contains(date(2025, 1, 3)));
        assert!(!span.contains(date(2025, 1, 7)));
    }

    #[test]
    fn friday_leave_joins_weekend_and_monday_holiday() {
        // Mon Jan 6, 2025 holiday; leave on Fri Jan 3.
        let holidays: HolidaySet = [date(2025, 1, 6)].into_iter().collect();
        let span = extend_to_full_vacation(&[date(2025, 1, 3)], &holidays, date(2025, 1, 6));
        assert_eq!(span.start, date(2025, 1, 3));
        assert_eq!(span.end, date(2025, 1, 6));
        assert_eq!(span.total_days(), 4);
    }

    #[test]
    fn grows_backwards_over_weekend() {
        // Mon Jan 6 holiday; leave Tue..Thu. Sat and Sun attach in front.
        let holidays: HolidaySet = [date(2025, 1, 6)].into_iter().collect();
        let leave = [date(2025, 1, 7), date(2025, 1, 8), date(2025, 1, 9)];
        let span = extend_to_full_vacation(&leave, &holidays, date(2025, 1, 6));
        assert_eq!(span.start, date(2025, 1, 4));
        assert_eq!(span.end, date(2025, 1, 9));
    }

    #[test]
    fn merges_neighbouring_holiday_cluster() {
        // Thu Dec 25 and Fri Dec 26, 2025; leave on Wed Dec 24.
        let holidays: HolidaySet = [date(2025, 12, 25), date(2025, 12, 26)]
            .into_iter()
            .collect();
        let span = extend_to_full_vacation(&[date(2025, 12, 24)], &holidays, date(2025, 12, 25));
        assert_eq!(span.start, date(2025, 12, 24));
        assert_eq!(span.end, date(2025, 12, 28));
    }

    #[test]
    fn empty_leave_spans_anchor_block() {
        let holidays: HolidaySet = [date(2025, 7, 4)].into_iter().collect();
        let span = extend_to_full_vacation(&[], &holidays, date(2025, 7, 4));
        assert_eq!(span.start, date(2025, 7, 4));
        assert_eq!(span.end, date(2025, 7, 6));
    }

    #[test]
    fn boundaries_are_working_days() {
        let holidays: HolidaySet = [date(2025, 1, 1)].into_iter().collect();
        let leave = [date(2025, 1, 2), date(2025, 1, 3)];
        let span = extend_to_full_vacation(&leave, &holidays, date(2025, 1, 1));
        // Wed holiday, Thu+Fri leave, Sat+Sun.
        assert_eq!(span.start, date(2025, 1, 1));
        assert_eq!(span.end, date(2025, 1, 5));
        assert!(!is_weekend(date(2024, 12, 31)));
        assert!(!is_weekend(date(2025, 1, 6)));
    }
}
