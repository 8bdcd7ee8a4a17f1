//! Candidate and output types.

use chrono::NaiveDate;
use serde::Serialize;

use crate::span::Span;

/// A validated, fully expanded candidate vacation.
///
/// Created by the generator and never mutated afterwards. `leave_dates` is
/// non-empty, so `efficiency` is always defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Opportunity {
    anchor: NaiveDate,
    leave_dates: Vec<NaiveDate>,
    span: Span,
    total_days: u32,
    bonus_days: u32,
    efficiency: f64,
}

impl Opportunity {
    /// Builds an opportunity from its seed and expanded span.
    ///
    /// Callers guarantee `leave_dates` is non-empty and lies within `span`.
    pub(crate) fn new(anchor: NaiveDate, leave_dates: Vec<NaiveDate>, span: Span) -> Self {
        let total_days = span.total_days();
        let leaves = u32::try_from(leave_dates.len()).unwrap_or(u32::MAX);
        Self {
            anchor,
            total_days,
            bonus_days: total_days.saturating_sub(leaves),
            efficiency: f64::from(total_days) / f64::from(leaves.max(1)),
            leave_dates,
            span,
        }
    }

    /// Returns the holiday this opportunity was built around.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Returns the working days to take as leave.
    pub fn leave_dates(&self) -> &[NaiveDate] {
        &self.leave_dates
    }

    /// Returns the full off-day span.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the first day off.
    pub fn start_date(&self) -> NaiveDate {
        self.span.start
    }

    /// Returns the last day off.
    pub fn end_date(&self) -> NaiveDate {
        self.span.end
    }

    /// Returns the number of calendar days in the span.
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Returns the days off gained beyond the leave spent.
    pub fn bonus_days(&self) -> u32 {
        self.bonus_days
    }

    /// Returns days off per leave day spent.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Returns the number of leave days this opportunity costs.
    pub fn leaves_used(&self) -> u32 {
        u32::try_from(self.leave_dates.len()).unwrap_or(u32::MAX)
    }
}

/// An accepted opportunity, as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Working days to take as leave, in seed order.
    pub leave_dates: Vec<NaiveDate>,
    /// First day off.
    pub start_date: NaiveDate,
    /// Last day off.
    pub end_date: NaiveDate,
    /// Calendar days in `start_date..=end_date`.
    pub total_days: u32,
    /// Equal to `leave_dates.len()`.
    pub leaves_used: u32,
    /// Human-readable summary.
    pub description: String,
}

impl From<Opportunity> for Recommendation {
    fn from(opportunity: Opportunity) -> Self {
        let leaves_used = opportunity.leaves_used();
        let total_days = opportunity.total_days();
        let span = opportunity.span();
        Self {
            description: format!(
                "Take {leaves_used} leave day(s) to get {total_days} continuous days off"
            ),
            start_date: span.start,
            end_date: span.end,
            leave_dates: opportunity.leave_dates,
            total_days,
            leaves_used,
        }
    }
}

/// The final leave plan and its summary totals.
///
/// Leave dates are never shared between recommendations, but spans are
/// expanded per recommendation against the holiday calendar and that
/// recommendation's own leave only. Two spans may therefore overlap or abut
/// (e.g. both covering the same weekend), and a day can be counted in more
/// than one `total_days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationResult {
    /// Accepted recommendations in priority order.
    pub recommendations: Vec<Recommendation>,
    /// Number of recommendations.
    pub total_vacations: usize,
    /// Longest span among the recommendations, or 0.
    pub longest_break: u32,
    /// Budget minus the leave used; may be negative for negative budgets.
    pub leaves_remaining: i64,
    /// Every leave date across the recommendations, in selection order.
    pub optimized_leaves: Vec<NaiveDate>,
}

impl OptimizationResult {
    /// A plan with no recommendations that leaves the budget untouched.
    pub fn empty(total_leaves: i64) -> Self {
        Self {
            recommendations: Vec::new(),
            total_vacations: 0,
            longest_break: 0,
            leaves_remaining: total_leaves,
            optimized_leaves: Vec::new(),
        }
    }

    /// Aggregates selected opportunities into a plan against `total_leaves`.
    pub fn from_selected(selected: Vec<Opportunity>, total_leaves: i64) -> Self {
        let recommendations: Vec<Recommendation> =
            selected.into_iter().map(Recommendation::from).collect();
        let used: i64 = recommendations
            .iter()
            .map(|r| i64::from(r.leaves_used))
            .sum();
        Self {
            total_vacations: recommendations.len(),
            longest_break: recommendations
                .iter()
                .map(|r| r.total_days)
                .max()
                .unwrap_or(0),
            leaves_remaining: total_leaves - used,
            optimized_leaves: recommendations
                .iter()
                .flat_map(|r| r.leave_dates.iter().copied())
                .collect(),
            recommendations,
        }
    }
}
