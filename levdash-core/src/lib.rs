//! LevDash Core: trade records, the immutable record store, and the query engine.
//!
//! This crate contains:
//! - Domain types (trade records, trade type, period keys)
//! - CSV schema contract and loader
//! - `RecordStore`: loaded once, read-only afterwards
//! - The four-predicate filter used by every dashboard view

pub mod data;
pub mod domain;
pub mod query;

pub use data::{LoadError, RecordStore};
pub use domain::{PeriodKey, TradeRecord, TradeType};
pub use query::{filter, FilterCriteria, QueryError};
