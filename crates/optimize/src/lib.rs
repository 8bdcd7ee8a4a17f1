//! Greedy leave optimizer.
//!
//! Given a set of holidays and a leave budget, recommends which working days
//! to take off so that leave joins holidays and weekends into the longest or
//! most efficient breaks.
//!
//! | Objective | Ranking key | Use case |
//! |-----------|-------------|----------|
//! | Efficiency | `total_days / leaves_used` | Default: most days off per leave day |
//! | Longer | `total_days` | Fewer, longer breaks |
//!
//! # Quick start
//!
//! ```
//! use bridgeday_calendar::parse_day_key;
//! use bridgeday_optimize::optimize_leaves;
//!
//! // Independence Day 2025 falls on a Friday.
//! let holidays = [parse_day_key("2025-07-04").unwrap()];
//! let result = optimize_leaves(holidays, 3, false, false);
//!
//! assert_eq!(result.total_vacations, 1);
//! assert_eq!(result.recommendations[0].leaves_used, 3);
//! assert_eq!(result.leaves_remaining, 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! optimize()
//!   ├─ generate_opportunities()          (generate.rs)
//!   │    ├─ before / after / combined seeds per weekday holiday
//!   │    └─ build_opportunity()
//!   │         ├─ exceeds_max_consecutive_working_leave()  (rules.rs)
//!   │         ├─ has_holiday_anchor()                     (rules.rs)
//!   │         └─ extend_to_full_vacation()                (span.rs)
//!   ├─ select_opportunities()            (select.rs)
//!   └─ OptimizationResult::from_selected() (result.rs)
//! ```
//!
//! The optimizer is a deterministic greedy heuristic, not an exhaustive
//! search, and never fails: degenerate inputs produce an empty plan.

pub mod config;
pub mod error;
pub mod generate;
pub mod result;
pub mod rules;
pub mod select;
pub mod span;

pub use config::OptimizerConfig;
pub use error::OptimizeError;
pub use generate::{build_opportunity, generate_opportunities};
pub use result::{OptimizationResult, Opportunity, Recommendation};
pub use rules::{exceeds_max_consecutive_working_leave, has_holiday_anchor};
pub use select::select_opportunities;
pub use span::{Span, extend_to_full_vacation};

use bridgeday_calendar::{HolidaySet, ToDay};
use tracing::debug;

/// Plans leave around `holidays` with the default rule values.
///
/// `sandwich_rule` is accepted for interface compatibility and has no effect.
/// `prefer_longer` ranks by total days off instead of efficiency.
pub fn optimize_leaves<I, D>(
    holidays: I,
    total_leaves: i64,
    sandwich_rule: bool,
    prefer_longer: bool,
) -> OptimizationResult
where
    I: IntoIterator<Item = D>,
    D: ToDay,
{
    let holidays: HolidaySet = holidays.into_iter().collect();
    let config = OptimizerConfig::new(total_leaves)
        .with_sandwich_rule(sandwich_rule)
        .with_prefer_longer(prefer_longer);
    optimize(&holidays, &config)
}

/// Plans leave around `holidays` under `config`.
///
/// An empty holiday set or a non-positive budget returns
/// [`OptimizationResult::empty`]. The configuration is not validated here;
/// zero-valued rule parameters simply yield fewer candidates.
///
/// Recommendations never share a leave date, but their spans may overlap or
/// abut; see [`OptimizationResult`].
#[tracing::instrument(skip_all, fields(
    n_holidays = holidays.len(),
    total_leaves = config.total_leaves(),
    prefer_longer = config.prefer_longer(),
))]
pub fn optimize(holidays: &HolidaySet, config: &OptimizerConfig) -> OptimizationResult {
    if holidays.is_empty() || config.total_leaves() <= 0 {
        debug!("no holidays or no budget: empty plan");
        return OptimizationResult::empty(config.total_leaves());
    }
    if config.sandwich_rule() {
        debug!("sandwich rule requested; it does not change the plan");
    }

    let candidates = generate_opportunities(holidays, config);
    let selected = select_opportunities(candidates, config.total_leaves(), config.prefer_longer());
    let result = OptimizationResult::from_selected(selected, config.total_leaves());

    debug!(
        total_vacations = result.total_vacations,
        longest_break = result.longest_break,
        leaves_remaining = result.leaves_remaining,
        "plan ready"
    );
    result
}
