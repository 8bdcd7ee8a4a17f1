//! Greedy selection of non-overlapping opportunities under a budget.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::trace;

use crate::result::Opportunity;

/// Ranks `candidates` and greedily accepts those that fit.
///
/// Candidates are sorted descending by total days (`prefer_longer`) or by
/// efficiency. The sort is stable, so ties keep generation order. A
/// candidate is accepted when none of its leave dates is already taken and
/// its cost fits the remaining budget. Accepted candidates are returned in
/// priority order.
pub fn select_opportunities(
    mut candidates: Vec<Opportunity>,
    total_leaves: i64,
    prefer_longer: bool,
) -> Vec<Opportunity> {
    if prefer_longer {
        candidates.sort_by(|a, b| b.total_days().cmp(&a.total_days()));
    } else {
        candidates.sort_by(|a, b| b.efficiency().total_cmp(&a.efficiency()));
    }

    let mut taken: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut used: i64 = 0;
    let mut selected = Vec::new();

    for candidate in candidates {
        let cost = i64::from(candidate.leaves_used());
        if candidate.leave_dates().iter().any(|d| taken.contains(d)) {
            trace!(start = %candidate.start_date(), "skipped: leave already booked");
            continue;
        }
        if used + cost > total_leaves {
            trace!(start = %candidate.start_date(), cost, used, "skipped: over budget");
            continue;
        }
        taken.extend(candidate.leave_dates().iter().copied());
        used += cost;
        trace!(
            anchor = %candidate.anchor(),
            start = %candidate.start_date(),
            cost,
            used,
            "accepted"
        );
        selected.push(candidate);
    }

    selected
}
