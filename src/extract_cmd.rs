//! Extract command: print the holiday dates found in a document.

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use bridgeday_extract::Extractor;

use crate::cli::ExtractArgs;
use crate::config;
use crate::convert;
use crate::output::write_output;

/// Run document extraction.
pub fn run(args: ExtractArgs) -> Result<()> {
    let _cmd = info_span!("extract").entered();
    let mut cfg = config::load(args.config.as_deref())?;
    if args.month_first {
        cfg.extract.day_first = false;
    }

    let extractor = Extractor::new(convert::build_extract_config(&cfg.extract))
        .map_err(|e| anyhow!(convert::describe_extract_error(&e)))?;

    info!(
        path = %args.document.display(),
        day_first = extractor.config().day_first(),
        "extracting holidays"
    );
    let entries = extractor
        .extract_path(&args.document)
        .map_err(|e| anyhow!(convert::describe_extract_error(&e)))?;
    info!(n_entries = entries.len(), "extraction complete");

    let mut json = serde_json::to_string_pretty(&entries).context("failed to serialize entries")?;
    json.push('\n');
    write_output(&json, args.output.as_deref())
}
