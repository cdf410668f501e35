use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Symbol, TradeTimestamp, ValidationError};

/// Direction of an execution. Quantity is always positive; direction is
/// encoded solely here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("BUY") {
            Ok(Self::Buy)
        } else if trimmed.eq_ignore_ascii_case("SELL") {
            Ok(Self::Sell)
        } else {
            Err(ValidationError::InvalidSide {
                value: input.to_owned(),
            })
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validated buy or sell execution.
///
/// Construction is the validation boundary: a `TradeRecord` in hand always
/// satisfies quantity > 0 and 0 < price < inf, so downstream aggregation
/// needs no defensive checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub timestamp: TradeTimestamp,
    pub symbol: Symbol,
    pub side: Side,
    pub quantity: u64,
    pub price: f64,
}

impl TradeRecord {
    pub fn new(
        timestamp: TradeTimestamp,
        symbol: Symbol,
        side: Side,
        quantity: i64,
        price: f64,
    ) -> Result<Self, ValidationError> {
        if quantity <= 0 {
            return Err(ValidationError::NonPositiveQuantity { value: quantity });
        }

        if !price.is_finite() {
            return Err(ValidationError::NonFinitePrice);
        }
        if price <= 0.0 {
            return Err(ValidationError::NonPositivePrice { value: price });
        }

        Ok(Self {
            timestamp,
            symbol,
            side,
            quantity: quantity as u64,
            price,
        })
    }

    /// Quantity signed by direction: positive for buys, negative for sells.
    pub fn signed_quantity(&self) -> i64 {
        match self.side {
            Side::Buy => self.quantity as i64,
            Side::Sell => -(self.quantity as i64),
        }
    }

    /// Traded value of this execution.
    pub fn notional(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(side: Side, quantity: i64, price: f64) -> Result<TradeRecord, ValidationError> {
        TradeRecord::new(
            TradeTimestamp::parse("2024-07-01 10:00:00").expect("timestamp"),
            Symbol::parse("AAPL").expect("symbol"),
            side,
            quantity,
            price,
        )
    }

    #[test]
    fn parses_side_case_insensitively() {
        assert_eq!(Side::parse("buy").expect("must parse"), Side::Buy);
        assert_eq!(Side::parse(" SELL ").expect("must parse"), Side::Sell);
        assert!(matches!(
            Side::parse("HOLD"),
            Err(ValidationError::InvalidSide { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let err = record(Side::Buy, 0, 10.0).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::NonPositiveQuantity { value: 0 }
        ));
    }

    #[test]
    fn rejects_non_positive_price() {
        let err = record(Side::Sell, 5, -1.5).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonPositivePrice { .. }));
    }

    #[test]
    fn rejects_non_finite_price() {
        let err = record(Side::Buy, 5, f64::NAN).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFinitePrice));
    }

    #[test]
    fn signs_quantity_by_side() {
        let buy = record(Side::Buy, 100, 10.0).expect("valid");
        let sell = record(Side::Sell, 40, 12.0).expect("valid");
        assert_eq!(buy.signed_quantity(), 100);
        assert_eq!(sell.signed_quantity(), -40);
        assert_eq!(sell.notional(), 480.0);
    }
}
