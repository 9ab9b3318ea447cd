//! CSV schema contract for the trade export.
//!
//! Defines the column names the loader requires and the accepted
//! `Entry time` layouts. Extra columns in the file are ignored.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::domain::{TradeRecord, TradeType};

pub const COL_NUMBER: &str = "Number";
pub const COL_EXCHANGE: &str = "Exchange";
pub const COL_MARGIN: &str = "Margin";
pub const COL_ENTRY_TIME: &str = "Entry time";
pub const COL_TRADE_TYPE: &str = "Trade type";
pub const COL_EXPOSURE: &str = "Exposure";
pub const COL_ENTRY_BALANCE: &str = "Entry balance";
pub const COL_EXIT_BALANCE: &str = "Exit balance";
pub const COL_PNL: &str = "Pnl (incl fees)";
pub const COL_BTC_PRICE: &str = "BTC Price";

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_EXCHANGE,
    COL_MARGIN,
    COL_ENTRY_TIME,
    COL_TRADE_TYPE,
    COL_EXPOSURE,
    COL_ENTRY_BALANCE,
    COL_EXIT_BALANCE,
    COL_PNL,
    COL_BTC_PRICE,
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parse an `Entry time` cell.
///
/// Offsets (RFC 3339) are normalized to UTC. A bare date is taken as midnight.
pub fn parse_entry_time(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(ts);
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.naive_utc());
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            if let Some(ts) = date.and_hms_opt(0, 0, 0) {
                return Ok(ts);
            }
        }
    }
    Err(format!("unrecognized entry time '{raw}'"))
}

fn deserialize_entry_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_entry_time(&raw).map_err(serde::de::Error::custom)
}

/// One raw CSV row, keyed by the export's column headers.
#[derive(Debug, Deserialize)]
pub(crate) struct CsvRow {
    #[serde(rename = "Number", default, deserialize_with = "csv::invalid_option")]
    number: Option<u64>,
    #[serde(rename = "Exchange")]
    exchange: String,
    #[serde(rename = "Margin")]
    margin: u32,
    #[serde(rename = "Entry time", deserialize_with = "deserialize_entry_time")]
    entry_time: NaiveDateTime,
    #[serde(rename = "Trade type")]
    trade_type: TradeType,
    #[serde(rename = "Exposure")]
    exposure: String,
    #[serde(rename = "Entry balance")]
    entry_balance: f64,
    #[serde(rename = "Exit balance")]
    exit_balance: f64,
    #[serde(rename = "Pnl (incl fees)")]
    pnl: f64,
    #[serde(rename = "BTC Price")]
    btc_price: f64,
}

impl From<CsvRow> for TradeRecord {
    fn from(row: CsvRow) -> Self {
        TradeRecord {
            number: row.number,
            exchange: row.exchange,
            margin: row.margin,
            entry_time: row.entry_time,
            trade_type: row.trade_type,
            exposure: row.exposure,
            entry_balance: row.entry_balance,
            exit_balance: row.exit_balance,
            pnl: row.pnl,
            btc_price: row.btc_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_space_separated_datetime() {
        let ts = parse_entry_time("2019-04-02 16:00:00").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2019, 4, 2).unwrap());
        assert_eq!(ts.hour(), 16);
    }

    #[test]
    fn parses_iso_and_fractional() {
        assert!(parse_entry_time("2019-04-02T16:00:00").is_ok());
        assert!(parse_entry_time("2019-04-02 16:00:00.250").is_ok());
        assert!(parse_entry_time("2019-04-02 16:00").is_ok());
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let ts = parse_entry_time("2019-04-02T18:00:00+02:00").unwrap();
        assert_eq!(ts.hour(), 16);
    }

    #[test]
    fn bare_date_is_midnight() {
        let ts = parse_entry_time(" 2019-04-02 ").unwrap();
        assert_eq!(ts.hour(), 0);
        assert_eq!(ts.minute(), 0);
    }

    #[test]
    fn us_style_dates() {
        let ts = parse_entry_time("04/02/2019 16:00").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2019, 4, 2).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_entry_time("yesterday").unwrap_err();
        assert!(err.contains("yesterday"));
    }
}
