use std::path::PathBuf;

use serde_json::json;
use uuid::Uuid;

use tradelens_core::read_trades_from_path;

use crate::cli::LoadArgs;
use crate::error::CliError;

use super::{open_warehouse, CommandResult};

pub fn run(args: &LoadArgs, home: Option<PathBuf>) -> Result<CommandResult, CliError> {
    let records = read_trades_from_path(&args.input)?;

    let warehouse = open_warehouse(home)?;
    let load_id = format!("load-{}", Uuid::new_v4());
    let rows_loaded = warehouse.replace_trades(
        &load_id,
        &args.input.display().to_string(),
        &records,
    )?;

    let mut result = CommandResult::ok(json!({
        "load_id": load_id,
        "rows_loaded": rows_loaded,
        "db_path": warehouse.db_path().display().to_string(),
    }));

    if rows_loaded == 0 {
        result = result.with_warning("input contained no data rows; warehouse is now empty");
    }

    Ok(result)
}
