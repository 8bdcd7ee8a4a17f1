//! Business rules every candidate opportunity must satisfy.

use bridgeday_calendar::{HolidaySet, add_days, is_weekend, is_working_day};
use chrono::NaiveDate;

/// Returns `true` if `leave_dates` contains a run of more than `max`
/// consecutive days that are working days on the original calendar.
///
/// Dates are sorted first. The streak grows when a date is exactly one day
/// after its predecessor and is itself a working day; any gap or non-working
/// day resets it to 1. Leave days are not treated as off here: the check
/// bounds raw weekday spending.
pub fn exceeds_max_consecutive_working_leave(
    leave_dates: &[NaiveDate],
    holidays: &HolidaySet,
    max: usize,
) -> bool {
    let mut sorted = leave_dates.to_vec();
    sorted.sort_unstable();

    let mut streak = 1usize;
    for pair in sorted.windows(2) {
        let (prev, current) = (pair[0], pair[1]);
        if add_days(prev, 1) == Some(current) && is_working_day(current, holidays) {
            streak += 1;
        } else {
            streak = 1;
        }
        if streak > max {
            return true;
        }
    }
    false
}

/// Returns `true` if some leave date lies within `radius` calendar days
/// (inclusive) of a holiday that does not fall on a weekend.
pub fn has_holiday_anchor(leave_dates: &[NaiveDate], holidays: &HolidaySet, radius: u32) -> bool {
    let radius = i64::from(radius);
    leave_dates.iter().any(|&leave| {
        let first = add_days(leave, -radius).unwrap_or(NaiveDate::MIN);
        let last = add_days(leave, radius).unwrap_or(NaiveDate::MAX);
        holidays.between(first, last).any(|h| !is_weekend(h))
    })
}
