mod analyze;
mod generate;
mod load;

use std::path::PathBuf;
use std::time::Instant;

use serde_json::Value;
use uuid::Uuid;

use tradelens_core::{Envelope, EnvelopeMeta};
use tradelens_warehouse::{Warehouse, WarehouseConfig};

use crate::cli::{Cli, Command};
use crate::error::CliError;

const SCHEMA_VERSION: &str = "v1.0.0";

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();

    let command_result = match &cli.command {
        Command::Generate(args) => generate::run(args)?,
        Command::Load(args) => load::run(args, cli.home.clone())?,
        Command::Analyze(args) => analyze::run(args, cli.home.clone())?,
    };

    let CommandResult { data, warnings } = command_result;

    let mut meta = EnvelopeMeta::new(
        format!("req-{}", Uuid::new_v4()),
        SCHEMA_VERSION,
        started.elapsed().as_millis() as u64,
    )?;

    for warning in warnings {
        meta.push_warning(warning);
    }

    Envelope::new(meta, data).map_err(CliError::from)
}

fn open_warehouse(home: Option<PathBuf>) -> Result<Warehouse, CliError> {
    let config = match home {
        Some(home) => WarehouseConfig::at_home(home),
        None => WarehouseConfig::default(),
    };
    Warehouse::open(config).map_err(CliError::from)
}
