//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use bridgeday_calendar::parse_day_key;
use bridgeday_extract::{ExtractConfig, ExtractError};
use bridgeday_optimize::OptimizerConfig;

use crate::config::{ExtractToml, PlannerToml};

/// Parses the inline `[holidays].dates` list.
pub fn parse_holiday_dates(keys: &[String]) -> Result<Vec<NaiveDate>> {
    keys.iter()
        .map(|k| parse_day_key(k).context("invalid date in [holidays].dates"))
        .collect()
}

/// Builds and validates an [`OptimizerConfig`] from the `[planner]` table.
pub fn build_optimizer_config(planner: &PlannerToml) -> Result<OptimizerConfig> {
    let cfg = OptimizerConfig::default()
        .with_total_leaves(planner.total_leaves)
        .with_prefer_longer(planner.prefer_longer)
        .with_sandwich_rule(planner.sandwich_rule)
        .with_max_consecutive_leave(planner.max_consecutive_leave)
        .with_seed_window(planner.seed_window)
        .with_anchor_radius(planner.anchor_radius);
    cfg.validate().context("invalid [planner] configuration")?;
    Ok(cfg)
}

/// Builds an [`ExtractConfig`] from the `[extract]` table.
pub fn build_extract_config(extract: &ExtractToml) -> ExtractConfig {
    ExtractConfig::new().with_day_first(extract.day_first)
}

/// Renders an extraction failure as `CODE: message (detail)`.
pub fn describe_extract_error(e: &ExtractError) -> String {
    match e.detail() {
        Some(detail) => format!("{}: {} ({detail})", e.code(), e.message()),
        None => format!("{}: {}", e.code(), e.message()),
    }
}
