//! Inclusive date ranges.

use chrono::NaiveDate;

/// Returns every calendar day from `start` to `end`, inclusive, in order.
///
/// A single day when `start == end`; empty when `end < start`.
///
/// # Example
///
/// ```
/// use bridgeday_calendar::{date_range, parse_day_key};
///
/// let start = parse_day_key("2024-12-30").unwrap();
/// let end = parse_day_key("2025-01-02").unwrap();
/// let days = date_range(start, end);
/// assert_eq!(days.len(), 4);
/// assert_eq!(days[2], parse_day_key("2025-01-01").unwrap());
/// ```
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    std::iter::successors(Some(start), |d| d.succ_opt())
        .take_while(|d| *d <= end)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_when_reversed() {
        assert!(date_range(date(2025, 1, 2), date(2025, 1, 1)).is_empty());
    }

    #[test]
    fn single() {
        let d = date(2025, 6, 15);
        assert_eq!(date_range(d, d), vec![d]);
    }

    #[test]
    fn full_leap_year() {
        let days = date_range(date(2024, 1, 1), date(2024, 12, 31));
        assert_eq!(days.len(), 366);
        assert_eq!(days[59], date(2024, 2, 29));
    }

    #[test]
    fn year_transition() {
        let days = date_range(date(2024, 12, 30), date(2025, 1, 2));
        assert_eq!(
            days,
            vec![
                date(2024, 12, 30),
                date(2024, 12, 31),
                date(2025, 1, 1),
                date(2025, 1, 2),
            ]
        );
    }

    #[test]
    fn consecutive_days() {
        let days = date_range(date(2025, 2, 20), date(2025, 3, 10));
        for pair in days.windows(2) {
            assert_eq!(pair[1].signed_duration_since(pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn range_up_to_calendar_limit_keeps_last_day() {
        let start = NaiveDate::MAX.pred_opt().unwrap();
        assert_eq!(date_range(start, NaiveDate::MAX), vec![start, NaiveDate::MAX]);
    }

    #[test]
    fn ends_at_calendar_limit() {
        let days = date_range(NaiveDate::MAX, NaiveDate::MAX);
        assert_eq!(days, vec![NaiveDate::MAX]);
    }
}
