//! TradeRecord: one row of the backtest export.

use super::period::PeriodKey;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a leveraged trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    #[serde(alias = "long", alias = "LONG")]
    Long,
    #[serde(alias = "short", alias = "SHORT")]
    Short,
}

impl TradeType {
    pub fn label(self) -> &'static str {
        match self {
            TradeType::Long => "Long",
            TradeType::Short => "Short",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single historical trade with the account balances around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Row number from the export, when the file carries one.
    pub number: Option<u64>,
    pub exchange: String,
    /// Leverage multiplier.
    pub margin: u32,
    pub entry_time: NaiveDateTime,
    pub trade_type: TradeType,
    /// Raw exposure cell, displayed as-is.
    pub exposure: String,
    pub entry_balance: f64,
    pub exit_balance: f64,
    /// Realized PnL including fees.
    pub pnl: f64,
    /// BTC reference price at entry.
    pub btc_price: f64,
}

impl TradeRecord {
    /// Calendar month of the entry timestamp.
    pub fn period(&self) -> PeriodKey {
        PeriodKey::from_datetime(self.entry_time)
    }

    pub fn entry_date(&self) -> NaiveDate {
        self.entry_time.date()
    }

    pub fn is_long(&self) -> bool {
        self.trade_type == TradeType::Long
    }
}
