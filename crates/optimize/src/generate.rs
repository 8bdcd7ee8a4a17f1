//! Candidate generation around each weekday holiday.

use bridgeday_calendar::{HolidaySet, add_days, is_weekend, is_working_day};
use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::config::OptimizerConfig;
use crate::result::Opportunity;
use crate::rules::{exceeds_max_consecutive_working_leave, has_holiday_anchor};
use crate::span::extend_to_full_vacation;

/// Validates a seed of leave dates and expands it into an [`Opportunity`].
///
/// Returns `None` when the seed is empty, breaks the consecutive-leave cap,
/// or has no weekday holiday within the anchor radius.
pub fn build_opportunity(
    leave_dates: Vec<NaiveDate>,
    holidays: &HolidaySet,
    anchor: NaiveDate,
    config: &OptimizerConfig,
) -> Option<Opportunity> {
    if leave_dates.is_empty() {
        return None;
    }
    if exceeds_max_consecutive_working_leave(&leave_dates, holidays, config.max_consecutive_leave())
    {
        debug!(%anchor, n_leave = leave_dates.len(), "rejected: consecutive leave cap");
        return None;
    }
    if !has_holiday_anchor(&leave_dates, holidays, config.anchor_radius()) {
        debug!(%anchor, n_leave = leave_dates.len(), "rejected: no holiday anchor");
        return None;
    }
    let span = extend_to_full_vacation(&leave_dates, holidays, anchor);
    debug_assert!(leave_dates.iter().all(|&d| span.contains(d)));
    Some(Opportunity::new(anchor, leave_dates, span))
}

/// Collects up to `window` working days walking away from `holiday` by `step`.
///
/// The walk stops at the first non-working day. Days are returned nearest
/// first.
fn working_days_from(
    holiday: NaiveDate,
    holidays: &HolidaySet,
    step: i64,
    window: usize,
) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(window);
    let mut cursor = holiday;
    while days.len() < window {
        match add_days(cursor, step) {
            Some(day) if is_working_day(day, holidays) => {
                days.push(day);
                cursor = day;
            }
            _ => break,
        }
    }
    days
}

/// Generates before-only, after-only and combined candidates for every
/// holiday that falls on a weekday.
///
/// Holidays are visited in ascending order and candidates are returned in
/// generation order. Overlapping candidates are kept; the selector resolves
/// conflicts.
#[tracing::instrument(skip_all, fields(n_holidays = holidays.len()))]
pub fn generate_opportunities(holidays: &HolidaySet, config: &OptimizerConfig) -> Vec<Opportunity> {
    let window = config.seed_window();
    let mut candidates = Vec::new();

    for holiday in holidays.iter() {
        if is_weekend(holiday) {
            trace!(%holiday, "skipping weekend holiday");
            continue;
        }

        let mut before = working_days_from(holiday, holidays, -1, window);
        before.reverse();
        let after = working_days_from(holiday, holidays, 1, window);
        let combined: Vec<NaiveDate> = before.iter().chain(after.iter()).copied().collect();

        for seed in [before, after, combined] {
            if let Some(opportunity) = build_opportunity(seed, holidays, holiday, config) {
                trace!(
                    %holiday,
                    start = %opportunity.start_date(),
                    end = %opportunity.end_date(),
                    total_days = opportunity.total_days(),
                    leaves = opportunity.leaves_used(),
                    "candidate"
                );
                candidates.push(opportunity);
            }
        }
    }

    debug!(n_candidates = candidates.len(), "generated opportunities");
    candidates
}
