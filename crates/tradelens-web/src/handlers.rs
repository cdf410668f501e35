//! Route handlers.
//!
//! Each handler recomputes its view from a fresh warehouse read, so the
//! response always reflects the latest load. An empty warehouse is reported
//! as 404 rather than an empty-but-plausible analytics payload.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use tradelens_core::{
    analyze, AnalysisReport, DailySymbolTotal, DailyTotal, NetPosition, SymbolSummary,
};
use tradelens_warehouse::Warehouse;

use crate::error::ApiError;
use crate::server::AppState;

const DEFAULT_DAILY_SYMBOL_LIMIT: usize = 10;

/// Query parameters for the daily per-symbol view.
#[derive(Debug, Deserialize)]
pub struct DailySymbolQuery {
    pub limit: Option<usize>,
}

pub async fn symbol_summaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<SymbolSummary>>, ApiError> {
    let report = load_report(state.warehouse).await?;
    Ok(Json(report.symbol_summaries))
}

pub async fn net_positions(
    State(state): State<AppState>,
) -> Result<Json<Vec<NetPosition>>, ApiError> {
    let report = load_report(state.warehouse).await?;
    Ok(Json(report.net_positions))
}

pub async fn top_day(State(state): State<AppState>) -> Result<Json<DailyTotal>, ApiError> {
    let report = load_report(state.warehouse).await?;
    report
        .top_day()
        .cloned()
        .map(Json)
        .ok_or(ApiError::NoData)
}

pub async fn daily_by_symbol(
    State(state): State<AppState>,
    Query(query): Query<DailySymbolQuery>,
) -> Result<Json<Vec<DailySymbolTotal>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_DAILY_SYMBOL_LIMIT);
    let report = load_report(state.warehouse).await?;

    let mut rows = report.daily_symbol_totals;
    rows.truncate(limit);
    Ok(Json(rows))
}

/// Fetch the stored trades and run the engine over them.
///
/// The DuckDB read is blocking, so it runs off the async worker threads.
async fn load_report(warehouse: Arc<Warehouse>) -> Result<AnalysisReport, ApiError> {
    let records = tokio::task::spawn_blocking(move || warehouse.fetch_trades())
        .await
        .map_err(|_| ApiError::Internal(String::from("warehouse read task failed")))??;

    if records.is_empty() {
        return Err(ApiError::NoData);
    }

    Ok(analyze(&records))
}
