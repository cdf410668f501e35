//! CLI argument definitions for tradelens.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `generate` | Produce a synthetic trade log CSV |
//! | `load` | Validate a trade log CSV and load it into the warehouse |
//! | `analyze` | Compute the derived analytics views |
//!
//! # Examples
//!
//! ```bash
//! tradelens generate --days 45 --seed 7 --output trades.csv
//! tradelens load trades.csv
//! tradelens analyze --top 10 --pretty
//! tradelens analyze --input trades.csv --format table
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Trade log analytics: summarize executions by symbol, position, and day.
#[derive(Debug, Parser)]
#[command(
    name = "tradelens",
    author,
    version,
    about = "Trade log analytics CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Override the tradelens home directory.
    ///
    /// Defaults to `$TRADELENS_HOME`, else `~/.tradelens`.
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format for terminal display.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Produce a synthetic trade log CSV.
    ///
    /// Generates random BUY/SELL executions across a fixed symbol universe,
    /// with prices sampled around per-symbol base levels and timestamps
    /// spread over market hours. Deterministic when `--seed` is given.
    Generate(GenerateArgs),

    /// Validate a trade log CSV and load it into the warehouse.
    ///
    /// The load is all-or-nothing: the first invalid row aborts with its
    /// position and reason, and the previous load stays in place.
    Load(LoadArgs),

    /// Compute the derived analytics views.
    ///
    /// Reads trades from the warehouse (or directly from a CSV with
    /// `--input`) and reports volume/value per symbol, net positions, daily
    /// totals with the busiest day, and per-day-per-symbol volumes.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `generate` command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Output CSV path.
    #[arg(long, default_value = "trades.csv")]
    pub output: PathBuf,

    /// Number of consecutive calendar days to generate.
    #[arg(long, default_value_t = 45)]
    pub days: u32,

    /// Number of trades per day.
    #[arg(long, default_value_t = 500)]
    pub trades_per_day: u32,

    /// First trading day (YYYY-MM-DD).
    #[arg(long, default_value = "2024-07-01")]
    pub start_date: String,

    /// RNG seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `load` command.
#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Trade log CSV to load.
    pub input: PathBuf,
}

/// Arguments for the `analyze` command.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Analyze a CSV directly instead of the warehouse contents.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Number of daily per-symbol rows to display.
    ///
    /// The engine always computes the full ranking; this only truncates the
    /// rendered output.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}
