//! Monthly aggregation: one candle-style summary per calendar month.
//!
//! Records are grouped by period key in the order periods are first
//! encountered. Within a group the first record supplies the exit balance
//! and the last record supplies the entry balance. For a most-recent-first
//! sequence that means "balance at the end of the month" against "balance
//! at the start of the month".

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;

use levdash_core::{PeriodKey, TradeRecord};

use crate::metrics::pct_change;

/// Per-month balance summary. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub period: PeriodKey,
    /// Entry balance of the last record in the period.
    pub entry_balance: f64,
    /// Exit balance of the first record in the period.
    pub exit_balance: f64,
    /// `exit / entry * 100 - 100`; `None` when the entry balance is zero.
    pub return_pct: Option<f64>,
    /// Number of trades in the period.
    pub trade_count: usize,
}

impl MonthlyAggregate {
    pub fn is_up(&self) -> bool {
        self.exit_balance >= self.entry_balance
    }
}

struct Bucket {
    period: PeriodKey,
    first: usize,
    last: usize,
    count: usize,
}

/// Aggregate a sequence by month. Empty input gives an empty vector.
pub fn monthly_returns<R: Borrow<TradeRecord>>(records: &[R]) -> Vec<MonthlyAggregate> {
    let mut index: HashMap<PeriodKey, usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();

    for (i, r) in records.iter().enumerate() {
        let period = r.borrow().period();
        match index.get(&period) {
            Some(&b) => {
                buckets[b].last = i;
                buckets[b].count += 1;
            }
            None => {
                index.insert(period, buckets.len());
                buckets.push(Bucket {
                    period,
                    first: i,
                    last: i,
                    count: 1,
                });
            }
        }
    }

    buckets
        .into_iter()
        .map(|b| {
            let exit_balance = records[b.first].borrow().exit_balance;
            let entry_balance = records[b.last].borrow().entry_balance;
            MonthlyAggregate {
                period: b.period,
                entry_balance,
                exit_balance,
                return_pct: pct_change(exit_balance, entry_balance),
                trade_count: b.count,
            }
        })
        .collect()
}
