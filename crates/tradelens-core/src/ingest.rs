//! CSV normalizer.
//!
//! Turns raw tabular rows into validated [`TradeRecord`]s. The contract is
//! fail-fast: the first offending row aborts the whole load with its position
//! and reason, and no partial collection is returned. Bad rows are never
//! skipped or coerced, so every record handed to the engine traces back to a
//! row that passed validation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::{Side, Symbol, TradeRecord, TradeTimestamp, ValidationError};

/// Errors surfaced while normalizing a CSV trade log.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid trade at data row {row}: {source}")]
    Record {
        /// 1-based position among data rows, header excluded.
        row: usize,
        source: ValidationError,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One raw CSV row, headers as emitted by the trade log producer.
///
/// Numeric fields stay as strings here so that rejection errors can quote
/// the offending text rather than a deserializer message.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrade {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Side")]
    pub side: String,
    #[serde(rename = "Quantity")]
    pub quantity: String,
    #[serde(rename = "Price")]
    pub price: String,
}

impl RawTrade {
    /// Validate and coerce this row into a typed record.
    pub fn into_record(self) -> Result<TradeRecord, ValidationError> {
        let timestamp = TradeTimestamp::parse(&self.timestamp)?;
        let symbol = Symbol::parse(&self.symbol)?;
        let side = Side::parse(&self.side)?;

        let quantity: i64 =
            self.quantity
                .trim()
                .parse()
                .map_err(|_| ValidationError::InvalidQuantity {
                    value: self.quantity.clone(),
                })?;

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidPrice {
                value: self.price.clone(),
            })?;

        TradeRecord::new(timestamp, symbol, side, quantity, price)
    }
}

/// Read and validate an entire CSV trade log.
pub fn read_trades<R: Read>(reader: R) -> Result<Vec<TradeRecord>, IngestError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in reader.deserialize::<RawTrade>().enumerate() {
        let raw = row?;
        let record = raw
            .into_record()
            .map_err(|source| IngestError::Record {
                row: index + 1,
                source,
            })?;
        records.push(record);
    }

    Ok(records)
}

/// Convenience wrapper over [`read_trades`] for a file on disk.
pub fn read_trades_from_path(path: impl AsRef<Path>) -> Result<Vec<TradeRecord>, IngestError> {
    let file = File::open(path)?;
    read_trades(file)
}
