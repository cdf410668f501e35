//! Behavior-driven tests for the trade store.
//!
//! These verify HOW the warehouse handles loads and reads from a user's
//! point of view: what goes in comes back out, in order, and a new load
//! replaces the previous one.

use tempfile::tempdir;

use tradelens_core::{analyze, read_trades, Side};
use tradelens_tests::trade;
use tradelens_warehouse::{Warehouse, WarehouseConfig};

fn open_temp(temp: &tempfile::TempDir) -> Warehouse {
    Warehouse::open(WarehouseConfig::at_home(temp.path().join("home"))).expect("warehouse open")
}

#[test]
fn when_user_loads_trades_they_can_fetch_them_back_in_order() {
    let temp = tempdir().expect("tempdir");
    let warehouse = open_temp(&temp);

    let records = vec![
        trade("2024-07-01 10:32:11", "AAPL", Side::Buy, 100, 190.25),
        trade("2024-07-01 10:40:02", "GOOG", Side::Sell, 40, 130.10),
        trade("2024-07-02 09:31:00", "AAPL", Side::Sell, 25, 191.00),
    ];

    warehouse
        .replace_trades("load-0001", "trades.csv", &records)
        .expect("load");

    let fetched = warehouse.fetch_trades().expect("fetch");
    assert_eq!(fetched, records, "values and order must round-trip");
    assert_eq!(warehouse.count_trades().expect("count"), 3);
}

#[test]
fn when_user_reloads_the_previous_load_is_replaced() {
    let temp = tempdir().expect("tempdir");
    let warehouse = open_temp(&temp);

    warehouse
        .replace_trades(
            "load-0001",
            "old.csv",
            &[trade("2024-07-01 10:00:00", "MSFT", Side::Buy, 10, 340.0)],
        )
        .expect("first load");

    let replacement = vec![
        trade("2024-07-05 10:00:00", "NVDA", Side::Buy, 5, 420.0),
        trade("2024-07-05 10:01:00", "NVDA", Side::Sell, 2, 421.0),
    ];
    warehouse
        .replace_trades("load-0002", "new.csv", &replacement)
        .expect("second load");

    let fetched = warehouse.fetch_trades().expect("fetch");
    assert_eq!(fetched, replacement);
    assert!(
        !fetched.iter().any(|r| r.symbol.as_str() == "MSFT"),
        "old load must be gone"
    );
}

#[test]
fn a_fresh_warehouse_is_empty_not_an_error() {
    let temp = tempdir().expect("tempdir");
    let warehouse = open_temp(&temp);

    assert_eq!(warehouse.count_trades().expect("count"), 0);
    assert!(warehouse.fetch_trades().expect("fetch").is_empty());
}

#[test]
fn csv_to_warehouse_to_analysis_preserves_tie_break_order() {
    // End-to-end: the stored sequence feeds ordering-sensitive analytics, so
    // the store must not reshuffle equal-keyed rows.
    let csv = "Timestamp,Symbol,Side,Quantity,Price\n\
               2024-07-01 10:00:00,ZZZ,BUY,10,100.00\n\
               2024-07-01 10:01:00,AAA,BUY,20,50.00\n";

    let records = read_trades(csv.as_bytes()).expect("csv loads");

    let temp = tempdir().expect("tempdir");
    let warehouse = open_temp(&temp);
    warehouse
        .replace_trades("load-0001", "tie.csv", &records)
        .expect("load");

    let report = analyze(&warehouse.fetch_trades().expect("fetch"));
    let order: Vec<&str> = report
        .symbol_summaries
        .iter()
        .map(|s| s.symbol.as_str())
        .collect();

    assert_eq!(order, vec!["ZZZ", "AAA"]);
}
