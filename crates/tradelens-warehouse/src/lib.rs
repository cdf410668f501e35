//! DuckDB-backed trade store.
//!
//! The warehouse is a cache of the most recent trade log load, not a system
//! of record: `replace_trades` swaps the whole table, and `fetch_trades`
//! returns rows in load order so downstream ordering-sensitive analytics see
//! the caller-supplied sequence. Rows are re-validated through the domain
//! constructors on the way out, so nothing the store hands back can bypass
//! the invariants the ingest boundary enforced.

pub mod duckdb;
pub mod migrations;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use ::duckdb::Connection;
use thiserror::Error;

use tradelens_core::{Side, Symbol, TradeRecord, TradeTimestamp, ValidationError};

pub use duckdb::{AccessMode, DuckDbPool, PooledConnection};

#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error(transparent)]
    DuckDb(#[from] ::duckdb::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("corrupt trade at seq {seq}: {source}")]
    Corrupt { seq: i64, source: ValidationError },
}

#[derive(Debug, Clone)]
pub struct WarehouseConfig {
    pub home: PathBuf,
    pub db_path: PathBuf,
    pub max_pool_size: usize,
}

impl WarehouseConfig {
    pub fn at_home(home: PathBuf) -> Self {
        let db_path = home.join("trades.duckdb");
        Self {
            home,
            db_path,
            max_pool_size: 4,
        }
    }
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self::at_home(resolve_home())
    }
}

#[derive(Clone)]
pub struct Warehouse {
    pool: DuckDbPool,
}

impl Warehouse {
    pub fn open_default() -> Result<Self, WarehouseError> {
        Self::open(WarehouseConfig::default())
    }

    pub fn open(config: WarehouseConfig) -> Result<Self, WarehouseError> {
        if let Some(parent) = config.db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let pool = DuckDbPool::new(config.db_path, config.max_pool_size);
        let warehouse = Self { pool };
        warehouse.initialize()?;
        Ok(warehouse)
    }

    pub fn initialize(&self) -> Result<(), WarehouseError> {
        let connection = self.pool.acquire(AccessMode::ReadWrite)?;
        migrations::apply_migrations(&connection)?;
        Ok(())
    }

    pub fn db_path(&self) -> &Path {
        self.pool.db_path()
    }

    /// Replace the stored trade log with `records`, preserving their order.
    ///
    /// Returns the number of rows written. The swap is transactional: on any
    /// failure the previous load survives untouched.
    pub fn replace_trades(
        &self,
        load_id: &str,
        source: &str,
        records: &[TradeRecord],
    ) -> Result<usize, WarehouseError> {
        let connection = self.pool.acquire(AccessMode::ReadWrite)?;
        connection.execute_batch("BEGIN TRANSACTION")?;

        let result = (|| -> Result<usize, WarehouseError> {
            connection.execute_batch("DELETE FROM trades")?;

            for (seq, record) in records.iter().enumerate() {
                let sql = format!(
                    r#"
INSERT INTO trades (seq, ts, symbol, side, quantity, price)
VALUES ({seq}, TRY_CAST('{ts}' AS TIMESTAMP), '{symbol}', '{side}', {quantity}, {price});
"#,
                    seq = seq,
                    ts = escape_sql_string(&record.timestamp.to_string()),
                    symbol = escape_sql_string(record.symbol.as_str()),
                    side = record.side.as_str(),
                    quantity = record.quantity,
                    price = record.price,
                );
                connection.execute_batch(sql.as_str())?;
            }

            let log = format!(
                r#"
INSERT INTO load_log (load_id, source, rows_loaded, status)
VALUES ('{load_id}', '{source}', {rows}, 'ok');
"#,
                load_id = escape_sql_string(load_id),
                source = escape_sql_string(source),
                rows = records.len(),
            );
            connection.execute_batch(log.as_str())?;

            Ok(records.len())
        })();

        finalize_transaction(&connection, result)
    }

    /// Read the stored trade log back in load order.
    pub fn fetch_trades(&self) -> Result<Vec<TradeRecord>, WarehouseError> {
        let connection = self.pool.acquire(AccessMode::ReadOnly)?;
        let mut statement = connection.prepare(
            "SELECT seq, CAST(ts AS VARCHAR), symbol, side, quantity, price \
             FROM trades ORDER BY seq",
        )?;

        let mut rows = statement.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            let seq: i64 = row.get(0)?;
            let ts: String = row.get(1)?;
            let symbol: String = row.get(2)?;
            let side: String = row.get(3)?;
            let quantity: i64 = row.get(4)?;
            let price: f64 = row.get(5)?;

            let record = rebuild_record(&ts, &symbol, &side, quantity, price)
                .map_err(|source| WarehouseError::Corrupt { seq, source })?;
            records.push(record);
        }

        Ok(records)
    }

    pub fn count_trades(&self) -> Result<u64, WarehouseError> {
        let connection = self.pool.acquire(AccessMode::ReadOnly)?;
        let count: i64 = connection.query_row("SELECT COUNT(*) FROM trades", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }
}

fn rebuild_record(
    ts: &str,
    symbol: &str,
    side: &str,
    quantity: i64,
    price: f64,
) -> Result<TradeRecord, ValidationError> {
    TradeRecord::new(
        TradeTimestamp::parse(ts)?,
        Symbol::parse(symbol)?,
        Side::parse(side)?,
        quantity,
        price,
    )
}

fn finalize_transaction<T>(
    connection: &Connection,
    result: Result<T, WarehouseError>,
) -> Result<T, WarehouseError> {
    match result {
        Ok(value) => {
            connection.execute_batch("COMMIT")?;
            Ok(value)
        }
        Err(error) => {
            let _ = connection.execute_batch("ROLLBACK");
            Err(error)
        }
    }
}

fn resolve_home() -> PathBuf {
    if let Some(path) = env::var_os("TRADELENS_HOME") {
        let path = PathBuf::from(path);
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home).join(".tradelens");
    }

    PathBuf::from(".tradelens")
}

fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn trade(ts: &str, symbol: &str, side: Side, quantity: i64, price: f64) -> TradeRecord {
        TradeRecord::new(
            TradeTimestamp::parse(ts).expect("timestamp"),
            Symbol::parse(symbol).expect("symbol"),
            side,
            quantity,
            price,
        )
        .expect("valid record")
    }

    fn open_temp(temp: &tempfile::TempDir) -> Warehouse {
        Warehouse::open(WarehouseConfig::at_home(temp.path().join("tradelens-home")))
            .expect("warehouse open")
    }

    #[test]
    fn initializes_schema_on_open() {
        let temp = tempdir().expect("tempdir");
        let warehouse = open_temp(&temp);
        assert_eq!(warehouse.count_trades().expect("count"), 0);
        assert!(warehouse.fetch_trades().expect("fetch").is_empty());
    }

    #[test]
    fn replace_then_fetch_preserves_order_and_values() {
        let temp = tempdir().expect("tempdir");
        let warehouse = open_temp(&temp);

        let records = vec![
            trade("2024-07-01 10:32:11", "AAPL", Side::Buy, 100, 190.25),
            trade("2024-07-01 10:40:02", "GOOG", Side::Sell, 40, 130.10),
            trade("2024-07-02 09:31:00", "AAPL", Side::Sell, 25, 191.00),
        ];

        let written = warehouse
            .replace_trades("load-0001", "trades.csv", &records)
            .expect("replace");
        assert_eq!(written, 3);

        let fetched = warehouse.fetch_trades().expect("fetch");
        assert_eq!(fetched, records);
    }

    #[test]
    fn second_load_replaces_the_first() {
        let temp = tempdir().expect("tempdir");
        let warehouse = open_temp(&temp);

        let first = vec![trade("2024-07-01 10:00:00", "MSFT", Side::Buy, 10, 340.0)];
        let second = vec![
            trade("2024-07-03 11:00:00", "NVDA", Side::Buy, 5, 420.0),
            trade("2024-07-03 11:05:00", "NVDA", Side::Sell, 2, 421.0),
        ];

        warehouse
            .replace_trades("load-0001", "a.csv", &first)
            .expect("first load");
        warehouse
            .replace_trades("load-0002", "b.csv", &second)
            .expect("second load");

        assert_eq!(warehouse.count_trades().expect("count"), 2);
        let fetched = warehouse.fetch_trades().expect("fetch");
        assert_eq!(fetched, second);
    }
}
