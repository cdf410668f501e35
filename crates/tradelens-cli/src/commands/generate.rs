use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde_json::json;
use time::{Duration, PrimitiveDateTime, Time};

use tradelens_core::{Side, Symbol, TradeDate, TradeRecord, TradeTimestamp};

use crate::cli::GenerateArgs;
use crate::error::CliError;

use super::CommandResult;

/// Symbol universe with per-symbol base price levels.
const SYMBOL_UNIVERSE: &[(&str, f64)] = &[
    ("AAPL", 190.0),
    ("GOOG", 130.0),
    ("MSFT", 340.0),
    ("AMZN", 135.0),
    ("TSLA", 250.0),
    ("NFLX", 450.0),
    ("NVDA", 420.0),
    ("META", 300.0),
];

const MARKET_OPEN_SECS: u32 = 9 * 3600 + 30 * 60;
const MARKET_CLOSE_SECS: u32 = 16 * 3600;

struct SymbolModel {
    symbol: Symbol,
    price: Normal<f64>,
}

pub fn run(args: &GenerateArgs) -> Result<CommandResult, CliError> {
    let start_date = TradeDate::parse(&args.start_date)?.into_inner();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let universe = build_universe()?;
    let total = args.days as usize * args.trades_per_day as usize;
    let mut records = Vec::with_capacity(total);

    for day_offset in 0..args.days {
        let date = start_date
            .checked_add(Duration::days(i64::from(day_offset)))
            .ok_or_else(|| {
                CliError::Command(String::from("start date too close to the calendar limit"))
            })?;

        for _ in 0..args.trades_per_day {
            let model = &universe[rng.gen_range(0..universe.len())];
            let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };

            let mut quantity: i64 = rng.gen_range(10..1000);
            let mut price = round_cents(model.price.sample(&mut rng));

            // Rare anomalies: price spikes/drops and outsized trades.
            if rng.gen::<f64>() < 0.01 {
                price = round_cents(price * rng.gen_range(0.5..1.5));
            }
            if rng.gen::<f64>() < 0.01 {
                quantity *= rng.gen_range(5..=10);
            }

            let timestamp = TradeTimestamp::from_primitive(PrimitiveDateTime::new(
                date,
                random_market_time(&mut rng)?,
            ));

            records.push(TradeRecord::new(
                timestamp,
                model.symbol.clone(),
                side,
                quantity,
                price.max(0.01),
            )?);
        }
    }

    records.sort_by_key(|record| record.timestamp);
    write_csv(args.output.as_path(), &records)?;

    Ok(CommandResult::ok(json!({
        "path": args.output.display().to_string(),
        "rows": records.len(),
        "days": args.days,
        "trades_per_day": args.trades_per_day,
        "start_date": args.start_date,
        "seed": args.seed,
    })))
}

fn build_universe() -> Result<Vec<SymbolModel>, CliError> {
    SYMBOL_UNIVERSE
        .iter()
        .map(|(ticker, base)| {
            let symbol = Symbol::parse(ticker)?;
            let price = Normal::new(*base, base * 0.02).map_err(|_| {
                CliError::Command(format!("invalid price distribution for {ticker}"))
            })?;
            Ok(SymbolModel { symbol, price })
        })
        .collect()
}

/// Uniformly random wall-clock time between market open and close.
fn random_market_time(rng: &mut StdRng) -> Result<Time, CliError> {
    let secs = rng.gen_range(MARKET_OPEN_SECS..=MARKET_CLOSE_SECS);
    Time::from_hms(
        (secs / 3600) as u8,
        ((secs % 3600) / 60) as u8,
        (secs % 60) as u8,
    )
    .map_err(|_| CliError::Command(String::from("market-hours clock out of range")))
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn write_csv(path: &Path, records: &[TradeRecord]) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Timestamp", "Symbol", "Side", "Quantity", "Price"])?;

    for record in records {
        writer.write_record([
            record.timestamp.to_string(),
            record.symbol.to_string(),
            record.side.to_string(),
            record.quantity.to_string(),
            format!("{:.2}", record.price),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GenerateArgs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn args(output: PathBuf, seed: u64) -> GenerateArgs {
        GenerateArgs {
            output,
            days: 3,
            trades_per_day: 20,
            start_date: String::from("2024-07-01"),
            seed: Some(seed),
        }
    }

    #[test]
    fn generates_a_loadable_csv() {
        let temp = tempdir().expect("tempdir");
        let output = temp.path().join("trades.csv");

        let result = run(&args(output.clone(), 7)).expect("generate");
        assert_eq!(result.data["rows"], 60);

        let records = tradelens_core::read_trades_from_path(&output).expect("generated CSV loads");
        assert_eq!(records.len(), 60);
        assert!(records.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn same_seed_reproduces_the_same_dataset() {
        let temp = tempdir().expect("tempdir");
        let first = temp.path().join("a.csv");
        let second = temp.path().join("b.csv");

        run(&args(first.clone(), 42)).expect("first run");
        run(&args(second.clone(), 42)).expect("second run");

        let a = std::fs::read_to_string(first).expect("read a");
        let b = std::fs::read_to_string(second).expect("read b");
        assert_eq!(a, b);
    }
}
