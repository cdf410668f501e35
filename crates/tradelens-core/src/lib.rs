//! Core contracts for tradelens.
//!
//! This crate contains:
//! - Canonical trade domain model and validation
//! - CSV normalizer for raw trade rows
//! - The aggregation engine producing derived analytics views
//! - Response envelope for machine-readable outputs

pub mod analysis;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod ingest;

pub use analysis::{
    analyze, AnalysisReport, DailySymbolTotal, DailyTotal, NetPosition, SymbolSummary,
};
pub use domain::{Side, Symbol, TradeDate, TradeRecord, TradeTimestamp};
pub use envelope::{Envelope, EnvelopeMeta};
pub use error::ValidationError;
pub use ingest::{read_trades, read_trades_from_path, IngestError, RawTrade};
