//! LevDash Runner: dashboard queries over a loaded record store.
//!
//! This crate builds on `levdash-core` to provide:
//! - Monthly aggregation (one balance candle per calendar month)
//! - BTC, strategy and relative return metrics
//! - Chart series (candles, PnL by direction, BTC price, balance)
//! - `Dashboard`: one criteria in, one snapshot of every view out
//! - CSV / JSON export
//! - TOML configuration and tracing setup shared by the binaries

pub mod config;
pub mod dashboard;
pub mod export;
pub mod logging;
pub mod metrics;
pub mod monthly;
pub mod series;

pub use config::{ConfigError, DashboardConfig};
pub use dashboard::{Dashboard, DashboardSnapshot};
pub use export::ExportFormat;
pub use metrics::{btc_return, format_pct, relative_performance, strategy_return, ReturnSummary};
pub use monthly::{monthly_returns, MonthlyAggregate};
pub use series::{CandleBar, PnlSeries, Point};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn aggregates_are_send_sync() {
        assert_send::<MonthlyAggregate>();
        assert_sync::<MonthlyAggregate>();
        assert_send::<ReturnSummary>();
        assert_sync::<ReturnSummary>();
        assert_send::<CandleBar>();
        assert_sync::<CandleBar>();
    }

    #[test]
    fn snapshot_is_send_sync() {
        assert_send::<DashboardSnapshot<'static>>();
        assert_sync::<DashboardSnapshot<'static>>();
    }

    #[test]
    fn config_is_send_sync() {
        assert_send::<DashboardConfig>();
        assert_sync::<DashboardConfig>();
    }
}
