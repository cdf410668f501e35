use std::path::PathBuf;

use serde_json::json;

use tradelens_core::{analyze, read_trades_from_path};

use crate::cli::AnalyzeArgs;
use crate::error::CliError;

use super::{open_warehouse, CommandResult};

pub fn run(args: &AnalyzeArgs, home: Option<PathBuf>) -> Result<CommandResult, CliError> {
    let records = match &args.input {
        Some(path) => read_trades_from_path(path)?,
        None => open_warehouse(home)?.fetch_trades()?,
    };

    let report = analyze(&records);

    // The engine always ranks the full daily-per-symbol view; --top only
    // bounds what gets rendered.
    let ranked_pairs = report.daily_symbol_totals.len();
    let top_day = report.top_day().cloned();
    let shown: Vec<_> = report
        .daily_symbol_totals
        .iter()
        .take(args.top)
        .cloned()
        .collect();

    let mut result = CommandResult::ok(json!({
        "record_count": records.len(),
        "symbol_summaries": report.symbol_summaries,
        "net_positions": report.net_positions,
        "daily_totals": report.daily_totals,
        "top_day": top_day,
        "daily_symbol_totals": shown,
    }));

    if records.is_empty() {
        result = result.with_warning("no trade records in input; all views are empty");
    }

    if ranked_pairs > args.top {
        result = result.with_warning(format!(
            "daily per-symbol view truncated to top {} of {ranked_pairs} rows (raise --top to widen)",
            args.top
        ));
    }

    Ok(result)
}
