//! Domain types for LevDash

pub mod period;
pub mod trade;

pub use period::PeriodKey;
pub use trade::{TradeRecord, TradeType};
