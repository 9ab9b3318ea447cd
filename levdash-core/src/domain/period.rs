//! PeriodKey: the calendar month a trade was opened in.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Year-month bucket derived from an entry timestamp.
///
/// Ordering is chronological (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PeriodKey {
    year: i32,
    month: u32,
}

impl PeriodKey {
    /// Build a key from an explicit year and month. Returns `None` for a month outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Truncate a timestamp to its month.
    pub fn from_datetime(ts: NaiveDateTime) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn truncates_to_month() {
        let a = PeriodKey::from_datetime(ts(2019, 3, 1, 0));
        let b = PeriodKey::from_datetime(ts(2019, 3, 31, 23));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "2019-03");
    }

    #[test]
    fn orders_chronologically() {
        let dec = PeriodKey::new(2018, 12).unwrap();
        let jan = PeriodKey::new(2019, 1).unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(PeriodKey::new(2019, 0).is_none());
        assert!(PeriodKey::new(2019, 13).is_none());
    }
}
