//! Return metrics: pure functions over a filtered record sequence.
//!
//! Every metric is a pure function: records in, `Option<f64>` out. `None`
//! means "no data": the sequence was empty or the baseline value was zero.
//!
//! Head is the first element of the sequence and tail the last. The query
//! engine returns records most recent first, so for dashboard queries head
//! is the latest trade and tail the earliest.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use levdash_core::TradeRecord;

/// The three headline return figures for one selection.
///
/// BTC and strategy returns are computed independently, so a zero balance
/// baseline hides only the strategy figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnSummary {
    /// BTC price return, in percent.
    pub btc: Option<f64>,
    /// Strategy balance return, in percent.
    pub strategy: Option<f64>,
    /// `strategy - btc`, present only when both are.
    pub relative: Option<f64>,
}

impl ReturnSummary {
    pub fn compute<R: Borrow<TradeRecord>>(records: &[R]) -> Self {
        let btc = btc_return(records);
        let strategy = strategy_return(records);
        let relative = match (strategy, btc) {
            (Some(s), Some(b)) => Some(s - b),
            _ => None,
        };
        Self {
            btc,
            strategy,
            relative,
        }
    }

    /// True when no figure could be computed.
    pub fn is_empty(&self) -> bool {
        self.btc.is_none() && self.strategy.is_none()
    }
}

// ─── Individual metric functions ────────────────────────────────────

/// Percentage change from `baseline` to `endpoint`: `endpoint / baseline * 100 - 100`.
pub fn pct_change(endpoint: f64, baseline: f64) -> Option<f64> {
    if baseline == 0.0 || !baseline.is_finite() || !endpoint.is_finite() {
        return None;
    }
    Some(endpoint * 100.0 / baseline - 100.0)
}

fn head_tail<R: Borrow<TradeRecord>>(records: &[R]) -> Option<(&TradeRecord, &TradeRecord)> {
    Some((records.first()?.borrow(), records.last()?.borrow()))
}

/// BTC price return: head price against tail price.
pub fn btc_return<R: Borrow<TradeRecord>>(records: &[R]) -> Option<f64> {
    let (head, tail) = head_tail(records)?;
    pct_change(head.btc_price, tail.btc_price)
}

/// Strategy return: head entry balance against tail exit balance.
pub fn strategy_return<R: Borrow<TradeRecord>>(records: &[R]) -> Option<f64> {
    let (head, tail) = head_tail(records)?;
    pct_change(head.entry_balance, tail.exit_balance)
}

/// Strategy return minus BTC return.
pub fn relative_performance<R: Borrow<TradeRecord>>(records: &[R]) -> Option<f64> {
    ReturnSummary::compute(records).relative
}

/// Format a percentage the way the indicator cards show it.
pub fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => "No data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use levdash_core::TradeType;

    fn record(day: u32, entry: f64, exit: f64, btc: f64) -> TradeRecord {
        TradeRecord {
            number: None,
            exchange: "X".into(),
            margin: 1,
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

    #[test]
    fn pct_change_basics() {
        assert_eq!(pct_change(110.0, 100.0), Some(10.0));
        assert_eq!(pct_change(50.0, 100.0), Some(-50.0));
        assert_eq!(pct_change(1.0, 0.0), None);
        assert_eq!(pct_change(f64::NAN, 1.0), None);
    }

    #[test]
    fn load_ordered_pair_uses_first_as_head() {
        // A is day 1, B is day 2, passed in load order.
        let a = record(1, 100.0, 110.0, 10_000.0);
        let b = record(2, 110.0, 120.0, 11_000.0);
        let records = vec![a, b];

        let btc = btc_return(&records).unwrap();
        let strat = strategy_return(&records).unwrap();
        assert!((btc - (-9.0909)).abs() < 1e-3);
        assert!((strat - (-16.6667)).abs() < 1e-3);
    }

    #[test]
    fn most_recent_first_pair() {
        let a = record(1, 100.0, 110.0, 10_000.0);
        let b = record(2, 110.0, 120.0, 11_000.0);
        let records = vec![&b, &a];

        let summary = ReturnSummary::compute(&records);
        assert!((summary.btc.unwrap() - 10.0).abs() < 1e-9);
        assert!(summary.strategy.unwrap().abs() < 1e-9);
    }

    #[test]
    fn relative_is_exact_difference() {
        let records = vec![
            record(3, 1.07, 1.09, 3_600.0),
            record(2, 1.02, 1.07, 3_900.0),
            record(1, 1.00, 1.02, 3_700.0),
        ];
        let summary = ReturnSummary::compute(&records);
        let (btc, strategy) = (summary.btc.unwrap(), summary.strategy.unwrap());
        assert_eq!(summary.relative, Some(strategy - btc));
        assert_eq!(relative_performance(&records), summary.relative);
    }

    #[test]
    fn single_record_uses_same_row_for_head_and_tail() {
        let records = vec![record(1, 1.0, 1.25, 4_000.0)];
        assert_eq!(btc_return(&records), Some(0.0));
        assert_eq!(strategy_return(&records), Some(-20.0));
    }

    #[test]
    fn empty_is_no_data() {
        let records: Vec<TradeRecord> = Vec::new();
        assert_eq!(btc_return(&records), None);
        assert_eq!(strategy_return(&records), None);
        assert_eq!(relative_performance(&records), None);
        assert!(ReturnSummary::compute(&records).is_empty());
    }

    #[test]
    fn zero_baseline_is_no_data() {
        let records = vec![record(2, 1.0, 1.0, 4_000.0), record(1, 1.0, 0.0, 0.0)];
        assert_eq!(btc_return(&records), None);
        assert_eq!(strategy_return(&records), None);
    }

    #[test]
    fn zero_exit_balance_keeps_btc_return() {
        let records = vec![record(2, 1.0, 1.0, 4_000.0), record(1, 1.0, 0.0, 3_500.0)];
        let summary = ReturnSummary::compute(&records);
        assert_eq!(summary.btc, btc_return(&records));
        assert!((summary.btc.unwrap() - 14.2857).abs() < 1e-3);
        assert_eq!(summary.strategy, None);
        assert_eq!(summary.relative, None);
        assert!(!summary.is_empty());
    }

    #[test]
    fn formatting() {
        assert_eq!(format_pct(Some(12.3456)), "12.35%");
        assert_eq!(format_pct(Some(-0.004)), "-0.00%");
        assert_eq!(format_pct(None), "No data");
    }
}
