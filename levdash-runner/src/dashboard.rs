//! Dashboard queries: one request in, one snapshot of every view out.
//!
//! The presentation layer builds a `FilterCriteria`, calls
//! [`Dashboard::query`], and renders the returned [`DashboardSnapshot`].
//! Nothing here is reactive; each call recomputes from the store.

use serde::Serialize;

use levdash_core::{FilterCriteria, RecordStore, TradeRecord};

use crate::metrics::{format_pct, ReturnSummary};
use crate::monthly::{monthly_returns, MonthlyAggregate};
use crate::series::{self, CandleBar, PnlSeries, Point};

/// Query façade over a loaded store.
#[derive(Debug, Clone, Copy)]
pub struct Dashboard<'a> {
    store: &'a RecordStore,
}

impl<'a> Dashboard<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a RecordStore {
        self.store
    }

    /// Initial selection: the preferred exchange and leverage when the data
    /// has them, otherwise the first of each, with the date range spanning
    /// the chosen exchange.
    pub fn default_criteria(
        &self,
        preferred_exchange: Option<&str>,
        preferred_leverage: Option<u32>,
    ) -> Option<FilterCriteria> {
        let exchanges = self.store.exchanges();
        let exchange = preferred_exchange
            .filter(|e| exchanges.contains(e))
            .or_else(|| exchanges.first().copied())?;

        let leverages = self.store.leverages();
        let leverage = preferred_leverage
            .filter(|l| leverages.contains(l))
            .or_else(|| leverages.first().copied())?;

        self.criteria_for_exchange(exchange, leverage)
    }

    /// Criteria for an exchange with the date range reset to its bounds.
    pub fn criteria_for_exchange(&self, exchange: &str, leverage: u32) -> Option<FilterCriteria> {
        let (start, end) = self.store.date_bounds(exchange)?;
        Some(FilterCriteria::new(exchange, leverage, start, end))
    }

    /// Run the filter and derive every view from the result.
    pub fn query(&self, criteria: &FilterCriteria) -> DashboardSnapshot<'a> {
        let records = self.store.query(criteria);
        let monthly = monthly_returns(&records);
        let returns = ReturnSummary::compute(&records);
        if records.is_empty() {
            tracing::info!(
                exchange = %criteria.exchange,
                leverage = criteria.leverage,
                "no data for this selection"
            );
        }

        DashboardSnapshot {
            criteria: criteria.clone(),
            candles: series::candles(&monthly),
            pnl: series::pnl_by_type(&records),
            btc_price: series::btc_price_series(&records),
            balance: series::balance_series(&records),
            monthly,
            returns,
            records,
        }
    }
}

/// Everything the dashboard shows for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub criteria: FilterCriteria,
    /// Matching records, most recent first.
    pub records: Vec<&'a TradeRecord>,
    /// Monthly aggregates in encounter order (newest month first). The
    /// candles below hold the same months oldest first.
    pub monthly: Vec<MonthlyAggregate>,
    /// Every figure is `None` when the selection is empty.
    pub returns: ReturnSummary,
    /// Monthly candles, oldest first.
    pub candles: Vec<CandleBar>,
    pub pnl: PnlSeries,
    pub btc_price: Vec<Point>,
    pub balance: Vec<Point>,
}

impl DashboardSnapshot<'_> {
    /// True when no record matched. Every view is then empty or `None`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn btc_return_label(&self) -> String {
        format_pct(self.returns.btc)
    }

    pub fn strategy_return_label(&self) -> String {
        format_pct(self.returns.strategy)
    }

    pub fn relative_label(&self) -> String {
        format_pct(self.returns.relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use levdash_core::TradeType;

    fn record(exchange: &str, margin: u32, day: u32, entry: f64, exit: f64, btc: f64) -> TradeRecord {
        TradeRecord {
            number: Some(day as u64),
            exchange: exchange.into(),
            margin,
            entry_time: NaiveDate::from_ymd_opt(2019, 1, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            trade_type: TradeType::Long,
            exposure: "1".into(),
            entry_balance: entry,
            exit_balance: exit,
            pnl: exit - entry,
            btc_price: btc,
        }
    }

    fn store() -> RecordStore {
        RecordStore::from_records(vec![
            record("X", 1, 1, 100.0, 110.0, 10_000.0),
            record("X", 1, 2, 110.0, 120.0, 11_000.0),
            record("Y", 3, 5, 1.0, 1.1, 12_000.0),
        ])
    }

    #[test]
    fn two_record_selection() {
        let store = store();
        let dash = Dashboard::new(&store);
        let criteria = FilterCriteria::new(
            "X",
            1,
            NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2019, 1, 2).unwrap(),
        );
        let snap = dash.query(&criteria);
        assert_eq!(snap.record_count(), 2);
        // Most recent first: B is head, A is tail.
        assert_eq!(snap.records[0].number, Some(2));
        assert!((snap.returns.btc.unwrap() - 10.0).abs() < 1e-9);
        assert!(snap.returns.strategy.unwrap().abs() < 1e-9);
        assert_eq!(snap.btc_return_label(), "10.00%");
        assert_eq!(snap.monthly.len(), 1);
        assert_eq!(snap.candles.len(), 1);
        assert_eq!(snap.btc_price[0].value, 10_000.0);
    }

    #[test]
    fn empty_selection_is_explicit_no_data() {
        let store = store();
        let dash = Dashboard::new(&store);
        let criteria = FilterCriteria::new(
            "X",
            25,
            NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2019, 12, 31).unwrap(),
        );
        let snap = dash.query(&criteria);
        assert!(snap.is_empty());
        assert!(snap.returns.is_empty());
        assert_eq!(snap.btc_return_label(), "No data");
        assert!(snap.monthly.is_empty());
        assert!(snap.candles.is_empty());
        assert!(snap.pnl.is_empty());
        assert_eq!(snap.strategy_return_label(), "No data");
        assert_eq!(snap.relative_label(), "No data");
    }

    #[test]
    fn default_prefers_requested_values() {
        let store = store();
        let dash = Dashboard::new(&store);
        let c = dash.default_criteria(Some("Y"), Some(3)).unwrap();
        assert_eq!(c.exchange, "Y");
        assert_eq!(c.leverage, 3);
        assert_eq!(c.start, NaiveDate::from_ymd_opt(2019, 1, 5).unwrap());
    }

    #[test]
    fn default_falls_back_to_first_values() {
        let store = store();
        let dash = Dashboard::new(&store);
        let c = dash.default_criteria(Some("Bitmex"), Some(1)).unwrap();
        assert_eq!(c.exchange, "X");
        assert_eq!(c.leverage, 1);
        assert_eq!(c.end, NaiveDate::from_ymd_opt(2019, 1, 2).unwrap());
    }

    #[test]
    fn unknown_exchange_has_no_bounds() {
        let store = store();
        assert!(Dashboard::new(&store).criteria_for_exchange("Z", 1).is_none());
    }

    #[test]
    fn zero_exit_balance_still_shows_btc_return() {
        let store = RecordStore::from_records(vec![
            record("X", 1, 2, 1.0, 1.0, 4_000.0),
            record("X", 1, 1, 1.0, 0.0, 3_500.0),
        ]);
        let dash = Dashboard::new(&store);
        let criteria = dash.criteria_for_exchange("X", 1).unwrap();
        let snap = dash.query(&criteria);
        assert_eq!(snap.btc_return_label(), "14.29%");
        assert_eq!(snap.strategy_return_label(), "No data");
        assert_eq!(snap.relative_label(), "No data");
    }
}
