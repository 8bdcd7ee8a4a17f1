//! Configuration for a leave optimization run.

use crate::error::OptimizeError;

/// Default cap on consecutive working-day leave within one opportunity.
pub const DEFAULT_MAX_CONSECUTIVE_LEAVE: usize = 3;

/// Default number of working days seeded on each side of a holiday.
pub const DEFAULT_SEED_WINDOW: usize = 3;

/// Default distance, in calendar days, between a leave day and its anchor holiday.
pub const DEFAULT_ANCHOR_RADIUS: u32 = 3;

/// Configuration for a leave optimization run.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use bridgeday_optimize::OptimizerConfig;
///
/// let config = OptimizerConfig::new(10)
///     .with_prefer_longer(true)
///     .with_seed_window(4);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_consecutive_leave(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerConfig {
    /// Leave budget. Non-positive budgets produce an empty plan.
    total_leaves: i64,
    /// Rank by total days off instead of days off per leave day.
    prefer_longer: bool,
    /// Treat a lone working day between holidays as a holiday. Currently inert.
    sandwich_rule: bool,
    /// Maximum run of consecutive working days taken as leave.
    max_consecutive_leave: usize,
    /// Working days considered on each side of a holiday.
    seed_window: usize,
    /// Maximum distance from a leave day to a weekday holiday.
    anchor_radius: u32,
}

impl OptimizerConfig {
    /// Creates a new configuration with the given leave budget.
    ///
    /// Defaults: efficiency objective, sandwich rule off, and a cap, seed
    /// window and anchor radius of 3.
    pub fn new(total_leaves: i64) -> Self {
        Self {
            total_leaves,
            prefer_longer: false,
            sandwich_rule: false,
            max_consecutive_leave: DEFAULT_MAX_CONSECUTIVE_LEAVE,
            seed_window: DEFAULT_SEED_WINDOW,
            anchor_radius: DEFAULT_ANCHOR_RADIUS,
        }
    }

    /// Sets the leave budget.
    pub fn with_total_leaves(mut self, total_leaves: i64) -> Self {
        self.total_leaves = total_leaves;
        self
    }

    /// Selects the ranking objective.
    pub fn with_prefer_longer(mut self, prefer_longer: bool) -> Self {
        self.prefer_longer = prefer_longer;
        self
    }

    /// Records the sandwich-rule preference.
    pub fn with_sandwich_rule(mut self, sandwich_rule: bool) -> Self {
        self.sandwich_rule = sandwich_rule;
        self
    }

    /// Sets the consecutive working-day leave cap.
    pub fn with_max_consecutive_leave(mut self, max_consecutive_leave: usize) -> Self {
        self.max_consecutive_leave = max_consecutive_leave;
        self
    }

    /// Sets the seed window length.
    pub fn with_seed_window(mut self, seed_window: usize) -> Self {
        self.seed_window = seed_window;
        self
    }

    /// Sets the holiday-anchor radius.
    pub fn with_anchor_radius(mut self, anchor_radius: u32) -> Self {
        self.anchor_radius = anchor_radius;
        self
    }

    /// Returns the leave budget.
    pub fn total_leaves(&self) -> i64 {
        self.total_leaves
    }

    /// Returns `true` when ranking by total days off.
    pub fn prefer_longer(&self) -> bool {
        self.prefer_longer
    }

    /// Returns the sandwich-rule preference.
    pub fn sandwich_rule(&self) -> bool {
        self.sandwich_rule
    }

    /// Returns the consecutive working-day leave cap.
    pub fn max_consecutive_leave(&self) -> usize {
        self.max_consecutive_leave
    }

    /// Returns the seed window length.
    pub fn seed_window(&self) -> usize {
        self.seed_window
    }

    /// Returns the holiday-anchor radius in days.
    pub fn anchor_radius(&self) -> u32 {
        self.anchor_radius
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the cap, the seed window or the anchor radius is
    /// zero. The budget is not checked: any integer is a valid budget.
    pub fn validate(&self) -> Result<(), OptimizeError> {
        if self.max_consecutive_leave < 1 {
            return Err(OptimizeError::InvalidMaxConsecutiveLeave {
                value: self.max_consecutive_leave,
            });
        }
        if self.seed_window < 1 {
            return Err(OptimizeError::InvalidSeedWindow {
                value: self.seed_window,
            });
        }
        if self.anchor_radius < 1 {
            return Err(OptimizeError::InvalidAnchorRadius {
                value: self.anchor_radius,
            });
        }
        Ok(())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
