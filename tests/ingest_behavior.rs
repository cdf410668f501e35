//! Behavior-driven tests for the CSV normalizer.
//!
//! The normalizer is the only validation boundary: these tests pin down the
//! fail-fast contract (first bad row aborts, with position and reason) and
//! the accepted input shapes.

use tradelens_core::{read_trades, IngestError, Side, ValidationError};

const HEADER: &str = "Timestamp,Symbol,Side,Quantity,Price\n";

fn csv_with_rows(rows: &[&str]) -> String {
    let mut out = String::from(HEADER);
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

#[test]
fn user_can_load_a_well_formed_trade_log() {
    let csv = csv_with_rows(&[
        "2024-07-01 10:32:11,AAPL,BUY,100,190.25",
        "2024-07-01 10:40:02,goog,sell,40,130.10",
    ]);

    let records = read_trades(csv.as_bytes()).expect("log should load");

    assert_eq!(records.len(), 2);
    // Symbols and sides normalize on the way in.
    assert_eq!(records[1].symbol.as_str(), "GOOG");
    assert_eq!(records[1].side, Side::Sell);
    assert_eq!(records[1].quantity, 40);
}

#[test]
fn both_timestamp_shapes_are_accepted() {
    let csv = csv_with_rows(&[
        "2024-07-01 10:32:11,AAPL,BUY,100,190.25",
        "2024-07-01T11:05:00,AAPL,SELL,50,191.00",
        "2024-07-01T11:06:00.500,AAPL,BUY,10,190.80",
    ]);

    let records = read_trades(csv.as_bytes()).expect("log should load");
    assert_eq!(records.len(), 3);
    assert!(records
        .iter()
        .all(|r| r.timestamp.trade_date().to_string() == "2024-07-01"));
}

#[test]
fn zero_quantity_is_rejected_not_silently_included() {
    let csv = csv_with_rows(&[
        "2024-07-01 10:32:11,AAPL,BUY,100,190.25",
        "2024-07-01 10:40:02,GOOG,SELL,0,130.10",
        "2024-07-01 10:41:00,MSFT,BUY,10,340.00",
    ]);

    let err = read_trades(csv.as_bytes()).expect_err("zero quantity must reject the load");

    match err {
        IngestError::Record { row, source } => {
            assert_eq!(row, 2, "error must point at the offending data row");
            assert!(matches!(
                source,
                ValidationError::NonPositiveQuantity { value: 0 }
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn first_bad_row_aborts_with_no_partial_result() {
    let csv = csv_with_rows(&[
        "2024-07-01 10:32:11,AAPL,BUY,-5,190.25",
        "2024-07-01 10:40:02,GOOG,SELL,40,bad-price",
    ]);

    // Row 1 fails first; row 2's problem is never reached.
    let err = read_trades(csv.as_bytes()).expect_err("must fail");
    assert!(matches!(
        err,
        IngestError::Record {
            row: 1,
            source: ValidationError::NonPositiveQuantity { value: -5 }
        }
    ));
}

#[test]
fn negative_price_is_rejected_with_the_offending_value() {
    let csv = csv_with_rows(&["2024-07-01 10:32:11,AAPL,BUY,100,-190.25"]);

    let err = read_trades(csv.as_bytes()).expect_err("must fail");
    match err {
        IngestError::Record { row: 1, source } => {
            assert!(matches!(source, ValidationError::NonPositivePrice { .. }));
            assert!(source.to_string().contains("-190.25"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unparseable_timestamp_is_rejected() {
    let csv = csv_with_rows(&["07/01/2024 10:32,AAPL,BUY,100,190.25"]);

    let err = read_trades(csv.as_bytes()).expect_err("must fail");
    assert!(matches!(
        err,
        IngestError::Record {
            row: 1,
            source: ValidationError::InvalidTimestamp { .. }
        }
    ));
}

#[test]
fn empty_symbol_is_rejected() {
    let csv = csv_with_rows(&["2024-07-01 10:32:11, ,BUY,100,190.25"]);

    let err = read_trades(csv.as_bytes()).expect_err("must fail");
    assert!(matches!(
        err,
        IngestError::Record {
            row: 1,
            source: ValidationError::EmptySymbol
        }
    ));
}

#[test]
fn header_only_input_yields_an_empty_collection() {
    let records = read_trades(HEADER.as_bytes()).expect("empty log is valid");
    assert!(records.is_empty());
}
