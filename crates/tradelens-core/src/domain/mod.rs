mod symbol;
mod timestamp;
mod trade;

pub use symbol::Symbol;
pub use timestamp::{TradeDate, TradeTimestamp};
pub use trade::{Side, TradeRecord};
