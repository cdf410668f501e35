//! Shared helpers for tradelens behavior tests.

use tradelens_core::{Side, Symbol, TradeRecord, TradeTimestamp};

/// Build a validated trade record, panicking on bad test data.
pub fn trade(ts: &str, symbol: &str, side: Side, quantity: i64, price: f64) -> TradeRecord {
    TradeRecord::new(
        TradeTimestamp::parse(ts).expect("test timestamp must parse"),
        Symbol::parse(symbol).expect("test symbol must parse"),
        side,
        quantity,
        price,
    )
    .expect("test record must be valid")
}
