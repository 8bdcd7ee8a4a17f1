//! Plan command: recommend leave days around the configured holidays.

use std::collections::BTreeSet;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use tracing::{info, info_span};

use bridgeday_calendar::{DayKind, HolidaySet, classify, date_range, day_key};
use bridgeday_extract::{Extractor, entry_dates};
use bridgeday_optimize::{OptimizationResult, optimize};

use crate::cli::{OutputFormat, PlanArgs};
use crate::config;
use crate::convert;
use crate::output::write_output;

/// Run the planning pipeline.
pub fn run(args: PlanArgs) -> Result<()> {
    let _cmd = info_span!("plan").entered();
    // 1. Load config and apply CLI overrides
    let mut cfg = config::load(args.config.as_deref())?;
    if let Some(leaves) = args.leaves {
        cfg.planner.total_leaves = leaves;
    }
    if args.prefer_longer {
        cfg.planner.prefer_longer = true;
    }
    if let Some(path) = args.holidays {
        cfg.holidays.file = Some(path);
    }

    // 2. Resolve holidays: inline dates plus any extracted document
    let mut dates = convert::parse_holiday_dates(&cfg.holidays.dates)?;
    if let Some(ref path) = cfg.holidays.file {
        let extractor = Extractor::new(convert::build_extract_config(&cfg.extract))
            .map_err(|e| anyhow!(convert::describe_extract_error(&e)))?;
        info!(path = %path.display(), "extracting holidays");
        let entries = extractor
            .extract_path(path)
            .map_err(|e| anyhow!(convert::describe_extract_error(&e)))
            .with_context(|| format!("failed to extract holidays: {}", path.display()))?;
        dates.extend(entry_dates(&entries));
    }
    let holidays: HolidaySet = dates.into_iter().collect();
    info!(n_holidays = holidays.len(), "holidays resolved");

    // 3. Optimize
    let optimizer_cfg = convert::build_optimizer_config(&cfg.planner)?;
    let result = optimize(&holidays, &optimizer_cfg);
    info!(
        n_recommendations = result.total_vacations,
        leaves_remaining = result.leaves_remaining,
        "plan computed"
    );

    // 4. Render
    let rendered = match args.format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&result).context("failed to serialize plan")?;
            json.push('\n');
            json
        }
        OutputFormat::Text => render_text(&result, &holidays),
    };
    write_output(&rendered, args.output.as_deref())
}

/// One-character code for a classified day.
fn day_symbol(kind: DayKind) -> char {
    match kind {
        DayKind::Holiday => 'H',
        DayKind::Weekend => 'W',
        DayKind::SuggestedLeave => 'L',
        DayKind::WorkingDay => '.',
    }
}

/// Renders the day-by-day strip for `start..=end`.
fn day_strip(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &HolidaySet,
    leave: &BTreeSet<NaiveDate>,
) -> String {
    date_range(start, end)
        .into_iter()
        .map(|d| day_symbol(classify(d, holidays, leave)))
        .collect()
}

fn plural(n: u32, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Human-readable plan report.
pub fn render_text(result: &OptimizationResult, holidays: &HolidaySet) -> String {
    let mut lines: Vec<String> = Vec::new();
    if result.recommendations.is_empty() {
        lines.push("No leave opportunities found.".to_string());
    }
    for (i, rec) in result.recommendations.iter().enumerate() {
        let leave: BTreeSet<NaiveDate> = rec.leave_dates.iter().copied().collect();
        let leave_keys: Vec<String> = rec.leave_dates.iter().map(|d| day_key(*d)).collect();
        lines.push(format!(
            "{}. {} .. {} ({})",
            i + 1,
            day_key(rec.start_date),
            day_key(rec.end_date),
            plural(rec.total_days, "day"),
        ));
        lines.push(format!("   {}", rec.description));
        lines.push(format!("   leave: {}", leave_keys.join(", ")));
        lines.push(format!(
            "   {}",
            day_strip(rec.start_date, rec.end_date, holidays, &leave)
        ));
        lines.push(String::new());
    }

    lines.push(format!("vacations:      {}", result.total_vacations));
    lines.push(format!("longest break:  {}", plural(result.longest_break, "day")));
    lines.push(format!("leave used:     {}", result.optimized_leaves.len()));
    lines.push(format!("leave left:     {}", result.leaves_remaining));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
