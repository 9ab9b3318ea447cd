//! Query engine: the four-predicate filter over trade records.
//!
//! A record matches when its exchange equals the requested one (case
//! sensitive), its margin equals the requested leverage, and its entry date
//! lies inside `[start, end]`. Both bounds are whole calendar days.
//!
//! Results are returned most recent first. The sort is stable, so records
//! with identical timestamps keep their load order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use thiserror::Error;

use crate::domain::TradeRecord;

/// Caller errors from coercing raw filter input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("leverage '{0}' is not an integer")]
    InvalidLeverage(String),

    #[error("date '{0}' is not a valid YYYY-MM-DD date")]
    InvalidDate(String),
}

/// Filter parameters for one query. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub exchange: String,
    pub leverage: u32,
    /// Inclusive.
    pub start: NaiveDate,
    /// Inclusive, whole day.
    pub end: NaiveDate,
}

impl FilterCriteria {
    pub fn new(exchange: impl Into<String>, leverage: u32, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            exchange: exchange.into(),
            leverage,
            start,
            end,
        }
    }

    /// Build criteria from raw text input, coercing leverage and dates.
    pub fn parse(exchange: &str, leverage: &str, start: &str, end: &str) -> Result<Self, QueryError> {
        Ok(Self::new(
            exchange,
            parse_leverage(leverage)?,
            parse_date(start)?,
            parse_date(end)?,
        ))
    }

    /// True when the record satisfies all four predicates.
    pub fn matches(&self, record: &TradeRecord) -> bool {
        let date = record.entry_date();
        record.exchange == self.exchange
            && record.margin == self.leverage
            && date >= self.start
            && date <= self.end
    }
}

/// Coerce leverage text to an integer. Surrounding whitespace is allowed.
pub fn parse_leverage(raw: &str) -> Result<u32, QueryError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| QueryError::InvalidLeverage(raw.to_string()))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, QueryError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| QueryError::InvalidDate(raw.to_string()))
}

/// Select matching records, most recent first.
///
/// Accepts anything that yields record references, so an already-filtered
/// result can be filtered again.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a TradeRecord>
where
    I: IntoIterator<Item = &'a TradeRecord>,
{
    let mut matched: Vec<&TradeRecord> = records
        .into_iter()
        .filter(|r| criteria.matches(r))
        .collect();
    sort_most_recent_first(&mut matched);
    matched
}

/// Sort a sequence of records most recent first (stable).
pub fn sort_most_recent_first<R: Borrow<TradeRecord>>(records: &mut [R]) {
    records.sort_by(|a, b| b.borrow().entry_time.cmp(&a.borrow().entry_time));
}
