//! Aggregation engine.
//!
//! Pure, stateless computations over a validated trade collection. Each view
//! is produced by its own single pass; no pass reads another view's output.
//!
//! Ordering is part of the contract: every view is sorted descending by its
//! headline measure with a stable sort, so groups with equal measures keep
//! the order in which their first record appeared in the input.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Symbol, TradeDate, TradeRecord};

/// Traded volume and value per symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolSummary {
    pub symbol: Symbol,
    pub total_volume: u64,
    pub total_value: f64,
    pub net_position: i64,
}

/// Net bought-minus-sold quantity per symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPosition {
    pub symbol: Symbol,
    pub net_position: i64,
}

/// Total volume per calendar date across all symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: TradeDate,
    pub total_volume: u64,
}

/// Total volume per (calendar date, symbol) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySymbolTotal {
    pub date: TradeDate,
    pub symbol: Symbol,
    pub total_volume: u64,
}

/// The four derived views over one input collection.
///
/// Computed fresh on each [`analyze`] call; holds no state of its own. The
/// daily-per-symbol view is returned in full; top-K truncation is a
/// presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub symbol_summaries: Vec<SymbolSummary>,
    pub net_positions: Vec<NetPosition>,
    pub daily_totals: Vec<DailyTotal>,
    pub daily_symbol_totals: Vec<DailySymbolTotal>,
}

impl AnalysisReport {
    /// The single busiest trading day, absent for empty input.
    ///
    /// When several dates tie for the maximum, the first-encountered one
    /// wins; the full ranking in `daily_totals` lets callers inspect ties.
    pub fn top_day(&self) -> Option<&DailyTotal> {
        self.daily_totals.first()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_summaries.is_empty()
    }
}

/// Run all four aggregations over `records`.
///
/// Order-independent for the sums; the input order only decides how groups
/// with equal sort keys rank relative to each other.
pub fn analyze(records: &[TradeRecord]) -> AnalysisReport {
    AnalysisReport {
        symbol_summaries: symbol_summaries(records),
        net_positions: net_positions(records),
        daily_totals: daily_totals(records),
        daily_symbol_totals: daily_symbol_totals(records),
    }
}

fn symbol_summaries(records: &[TradeRecord]) -> Vec<SymbolSummary> {
    let mut groups: Vec<SymbolSummary> = Vec::new();
    let mut index: HashMap<Symbol, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.symbol.clone()).or_insert_with(|| {
            groups.push(SymbolSummary {
                symbol: record.symbol.clone(),
                total_volume: 0,
                total_value: 0.0,
                net_position: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.total_volume += record.quantity;
        group.total_value += record.notional();
        group.net_position += record.signed_quantity();
    }

    // Sums are finite by construction, so total_cmp gives a plain numeric
    // descending order.
    groups.sort_by(|a, b| b.total_value.total_cmp(&a.total_value));
    groups
}

fn net_positions(records: &[TradeRecord]) -> Vec<NetPosition> {
    let mut groups: Vec<NetPosition> = Vec::new();
    let mut index: HashMap<Symbol, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.symbol.clone()).or_insert_with(|| {
            groups.push(NetPosition {
                symbol: record.symbol.clone(),
                net_position: 0,
            });
            groups.len() - 1
        });

        groups[slot].net_position += record.signed_quantity();
    }

    groups.sort_by(|a, b| b.net_position.cmp(&a.net_position));
    groups
}

fn daily_totals(records: &[TradeRecord]) -> Vec<DailyTotal> {
    let mut groups: Vec<DailyTotal> = Vec::new();
    let mut index: HashMap<TradeDate, usize> = HashMap::new();

    for record in records {
        let date = record.timestamp.trade_date();
        let slot = *index.entry(date).or_insert_with(|| {
            groups.push(DailyTotal {
                date,
                total_volume: 0,
            });
            groups.len() - 1
        });

        groups[slot].total_volume += record.quantity;
    }

    groups.sort_by(|a, b| b.total_volume.cmp(&a.total_volume));
    groups
}

fn daily_symbol_totals(records: &[TradeRecord]) -> Vec<DailySymbolTotal> {
    let mut groups: Vec<DailySymbolTotal> = Vec::new();
    let mut index: HashMap<(TradeDate, Symbol), usize> = HashMap::new();

    for record in records {
        let date = record.timestamp.trade_date();
        let slot = *index
            .entry((date, record.symbol.clone()))
            .or_insert_with(|| {
                groups.push(DailySymbolTotal {
                    date,
                    symbol: record.symbol.clone(),
                    total_volume: 0,
                });
                groups.len() - 1
            });

        groups[slot].total_volume += record.quantity;
    }

    groups.sort_by(|a, b| b.total_volume.cmp(&a.total_volume));
    groups
}
