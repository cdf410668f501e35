use thiserror::Error;

/// Validation errors exposed by `tradelens-core`.
///
/// Every variant names the offending field and carries the rejected value so
/// callers can point back at the source data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("timestamp must be 'YYYY-MM-DD HH:MM:SS' or ISO-8601 without offset: '{value}'")]
    InvalidTimestamp { value: String },
    #[error("date must be 'YYYY-MM-DD': '{value}'")]
    InvalidDate { value: String },

    #[error("side must be BUY or SELL: '{value}'")]
    InvalidSide { value: String },

    #[error("quantity is not an integer: '{value}'")]
    InvalidQuantity { value: String },
    #[error("quantity must be positive, got {value}")]
    NonPositiveQuantity { value: i64 },

    #[error("price is not a number: '{value}'")]
    InvalidPrice { value: String },
    #[error("price must be positive, got {value}")]
    NonPositivePrice { value: f64 },
    #[error("price must be finite")]
    NonFinitePrice,

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
}
