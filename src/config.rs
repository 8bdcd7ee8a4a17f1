use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "bridgeday.toml";

/// Top-level Bridgeday configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgedayConfig {
    /// Holiday sources.
    #[serde(default)]
    pub holidays: HolidaysToml,

    /// Optimizer settings.
    #[serde(default)]
    pub planner: PlannerToml,

    /// Document extraction settings.
    #[serde(default)]
    pub extract: ExtractToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidaysToml {
    /// Inline `YYYY-MM-DD` dates.
    #[serde(default)]
    pub dates: Vec<String>,
    /// Document to extract further dates from.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerToml {
    #[serde(default)]
    pub total_leaves: i64,
    #[serde(default)]
    pub prefer_longer: bool,
    #[serde(default)]
    pub sandwich_rule: bool,
    #[serde(default = "default_three")]
    pub max_consecutive_leave: usize,
    #[serde(default = "default_three")]
    pub seed_window: usize,
    #[serde(default = "default_anchor_radius")]
    pub anchor_radius: u32,
}

impl Default for PlannerToml {
    fn default() -> Self {
        Self {
            total_leaves: 0,
            prefer_longer: false,
            sandwich_rule: false,
            max_consecutive_leave: default_three(),
            seed_window: default_three(),
            anchor_radius: default_anchor_radius(),
        }
    }
}

fn default_three() -> usize {
    3
}
fn default_anchor_radius() -> u32 {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractToml {
    #[serde(default = "default_true")]
    pub day_first: bool,
}

impl Default for ExtractToml {
    fn default() -> Self {
        Self { day_first: true }
    }
}

fn default_true() -> bool {
    true
}

/// Loads the configuration.
///
/// An explicitly named file must exist. Without one, [`DEFAULT_CONFIG`] is
/// read if present and all defaults apply otherwise.
pub fn load(explicit: Option<&Path>) -> Result<BridgedayConfig> {
    match explicit {
        Some(path) => load_from(path, true),
        None => load_from(Path::new(DEFAULT_CONFIG), false),
    }
}

fn load_from(path: &Path, required: bool) -> Result<BridgedayConfig> {
    if !required && !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(BridgedayConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
