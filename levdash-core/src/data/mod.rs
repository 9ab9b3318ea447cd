//! Data layer: CSV schema contract and the immutable record store.

pub mod schema;
pub mod store;

pub use schema::{parse_entry_time, REQUIRED_COLUMNS};
pub use store::{LoadError, RecordStore};
