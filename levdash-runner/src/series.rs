//! Chart series derived from a filtered selection.
//!
//! All series are returned in chronological order (oldest first) so the
//! presentation layer can plot them left to right without re-sorting.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use levdash_core::{PeriodKey, TradeRecord};

use crate::monthly::MonthlyAggregate;

/// One monthly candle: opens at the entry balance, closes at the exit balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleBar {
    pub period: PeriodKey,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandleBar {
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// A timestamped value for line and bar charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub time: NaiveDateTime,
    pub value: f64,
}

/// PnL per trade, split by trade direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PnlSeries {
    pub long: Vec<Point>,
    pub short: Vec<Point>,
}

impl PnlSeries {
    pub fn is_empty(&self) -> bool {
        self.long.is_empty() && self.short.is_empty()
    }

    /// Summed PnL of long trades. An empty side totals `+0.0`.
    pub fn total_long(&self) -> f64 {
        total(&self.long)
    }

    pub fn total_short(&self) -> f64 {
        total(&self.short)
    }
}

// Starts from +0.0; `Iterator::sum` over no floats yields -0.0.
fn total(points: &[Point]) -> f64 {
    points.iter().fold(0.0, |acc, p| acc + p.value)
}

/// Candles from monthly aggregates, sorted by period.
///
/// High and low are the larger and smaller of the two balances, so a down
/// month still has `high >= low`.
pub fn candles(monthly: &[MonthlyAggregate]) -> Vec<CandleBar> {
    let mut bars: Vec<CandleBar> = monthly
        .iter()
        .map(|m| CandleBar {
            period: m.period,
            open: m.entry_balance,
            close: m.exit_balance,
            high: m.entry_balance.max(m.exit_balance),
            low: m.entry_balance.min(m.exit_balance),
        })
        .collect();
    bars.sort_by_key(|b| b.period);
    bars
}

fn chronological<R, F>(records: &[R], value: F) -> Vec<Point>
where
    R: Borrow<TradeRecord>,
    F: Fn(&TradeRecord) -> f64,
{
    let mut points: Vec<Point> = records
        .iter()
        .map(|r| {
            let r = r.borrow();
            Point {
                time: r.entry_time,
                value: value(r),
            }
        })
        .collect();
    points.sort_by_key(|p| p.time);
    points
}

/// PnL (incl fees) per trade, long and short separated.
pub fn pnl_by_type<R: Borrow<TradeRecord>>(records: &[R]) -> PnlSeries {
    let (long, short): (Vec<&TradeRecord>, Vec<&TradeRecord>) = records
        .iter()
        .map(|r| r.borrow())
        .partition(|r| r.is_long());
    PnlSeries {
        long: chronological(&long, |r| r.pnl),
        short: chronological(&short, |r| r.pnl),
    }
}

/// BTC reference price at each trade's entry.
pub fn btc_price_series<R: Borrow<TradeRecord>>(records: &[R]) -> Vec<Point> {
    chronological(records, |r| r.btc_price)
}

/// Account balance after each trade.
pub fn balance_series<R: Borrow<TradeRecord>>(records: &[R]) -> Vec<Point> {
    chronological(records, |r| r.exit_balance)
}
