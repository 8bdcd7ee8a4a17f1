//! Invariants checked over realistic calendars and a range of budgets.

use std::collections::BTreeSet;

use bridgeday_calendar::{
    HolidaySet, add_days, date_range, days_between, is_holiday, is_weekend, is_working_day,
    parse_day_key,
};
use bridgeday_optimize::{OptimizationResult, has_holiday_anchor, optimize_leaves};
use chrono::NaiveDate;

fn date(key: &str) -> NaiveDate {
    parse_day_key(key).unwrap()
}

/// A mixed calendar: weekday holidays, a Saturday holiday, a Thu/Fri
/// cluster, a Tue/Thu pair and a year boundary.
fn calendars() -> Vec<Vec<NaiveDate>> {
    let keys: Vec<Vec<&str>> = vec![
        vec![
            "2025-01-01",
            "2025-01-20",
            "2025-02-17",
            "2025-05-26",
            "2025-06-19",
            "2025-07-04",
            "2025-09-01",
            "2025-10-13",
            "2025-11-11",
            "2025-11-27",
            "2025-12-25",
        ],
        vec![
            "2025-04-18",
            "2025-04-21",
            "2025-05-01",
            "2025-06-03",
            "2025-06-05",
            "2025-06-07",
            "2025-12-24",
            "2025-12-25",
            "2025-12-26",
            "2025-12-31",
            "2026-01-01",
            "2026-01-02",
        ],
        vec!["2025-03-17"],
    ];
    keys.into_iter()
        .map(|k| k.into_iter().map(date).collect())
        .collect()
}

fn for_each_plan(mut check: impl FnMut(&HolidaySet, i64, &OptimizationResult)) {
    for calendar in calendars() {
        let holidays: HolidaySet = calendar.iter().copied().collect();
        for total_leaves in -1..=25 {
            for prefer_longer in [false, true] {
                let result = optimize_leaves(calendar.iter().copied(), total_leaves, false, prefer_longer);
                check(&holidays, total_leaves, &result);
            }
        }
    }
}

#[test]
fn determinism() {
    for calendar in calendars() {
        for total_leaves in [1, 4, 9, 20] {
            for prefer_longer in [false, true] {
                let a = optimize_leaves(calendar.iter().copied(), total_leaves, false, prefer_longer);
                let b = optimize_leaves(calendar.iter().copied(), total_leaves, false, prefer_longer);
                assert_eq!(a, b);
            }
        }
    }
}

#[test]
fn input_order_does_not_matter() {
    for calendar in calendars() {
        let mut reversed = calendar.clone();
        reversed.reverse();
        let a = optimize_leaves(calendar, 12, false, false);
        let b = optimize_leaves(reversed, 12, false, false);
        assert_eq!(a, b);
    }
}

#[test]
fn budget_conservation() {
    for_each_plan(|_, total_leaves, result| {
        let used: i64 = result
            .recommendations
            .iter()
            .map(|r| i64::from(r.leaves_used))
            .sum();
        assert_eq!(used + result.leaves_remaining, total_leaves);
        if total_leaves > 0 {
            assert!(result.leaves_remaining >= 0);
        }
    });
}

#[test]
fn no_double_booking() {
    for_each_plan(|_, _, result| {
        let mut seen = BTreeSet::new();
        for rec in &result.recommendations {
            for &d in &rec.leave_dates {
                assert!(seen.insert(d), "{d} booked twice");
            }
        }
    });
}

#[test]
fn span_containment_and_counts() {
    for_each_plan(|_, _, result| {
        for rec in &result.recommendations {
            assert!(rec.start_date <= rec.end_date);
            for &d in &rec.leave_dates {
                assert!(rec.start_date <= d && d <= rec.end_date);
            }
            assert_eq!(
                i64::from(rec.total_days),
                days_between(rec.start_date, rec.end_date) + 1
            );
            assert_eq!(rec.leaves_used as usize, rec.leave_dates.len());
            assert!(rec.leaves_used >= 1);
        }
    });
}

#[test]
fn spans_are_maximal() {
    for_each_plan(|holidays, _, result| {
        for rec in &result.recommendations {
            let leave: BTreeSet<NaiveDate> = rec.leave_dates.iter().copied().collect();
            let is_off =
                |d: NaiveDate| is_weekend(d) || is_holiday(d, holidays) || leave.contains(&d);
            let before = add_days(rec.start_date, -1).unwrap();
            let after = add_days(rec.end_date, 1).unwrap();
            assert!(!is_off(before), "span can extend back to {before}");
            assert!(!is_off(after), "span can extend forward to {after}");
            for d in date_range(rec.start_date, rec.end_date) {
                assert!(is_off(d), "{d} inside span is a working day");
            }
        }
    });
}

#[test]
fn consecutive_leave_cap() {
    for_each_plan(|holidays, _, result| {
        for rec in &result.recommendations {
            let mut sorted = rec.leave_dates.clone();
            sorted.sort_unstable();
            let mut streak = 1;
            for pair in sorted.windows(2) {
                if days_between(pair[0], pair[1]) == 1 && is_working_day(pair[1], holidays) {
                    streak += 1;
                } else {
                    streak = 1;
                }
                assert!(streak <= 3, "more than 3 consecutive leave days");
            }
        }
    });
}

#[test]
fn leave_is_spent_on_anchored_working_days() {
    for_each_plan(|holidays, _, result| {
        for rec in &result.recommendations {
            for &d in &rec.leave_dates {
                assert!(is_working_day(d, holidays), "{d} is not a working day");
            }
            assert!(has_holiday_anchor(&rec.leave_dates, holidays, 3));
        }
    });
}

#[test]
fn summary_totals_match_recommendations() {
    for_each_plan(|_, _, result| {
        assert_eq!(result.total_vacations, result.recommendations.len());
        assert_eq!(
            result.longest_break,
            result
                .recommendations
                .iter()
                .map(|r| r.total_days)
                .max()
                .unwrap_or(0)
        );
        let flattened: Vec<NaiveDate> = result
            .recommendations
            .iter()
            .flat_map(|r| r.leave_dates.iter().copied())
            .collect();
        assert_eq!(result.optimized_leaves, flattened);
    });
}
