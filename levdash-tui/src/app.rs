//! Application state: single-owner, main-thread only.
//!
//! The store is loaded once in `main` and borrowed for the whole session.
//! Every filter change rebuilds the snapshot through `Dashboard::query`.

use chrono::{Months, NaiveDate};

use levdash_core::{FilterCriteria, RecordStore};
use levdash_runner::{Dashboard, DashboardSnapshot};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Overview,
    Trades,
    Series,
    Help,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Overview, Panel::Trades, Panel::Series, Panel::Help];

    pub fn index(self) -> usize {
        match self {
            Panel::Overview => 0,
            Panel::Trades => 1,
            Panel::Series => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Overview => "Overview",
            Panel::Trades => "Trades",
            Panel::Series => "Series",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Panel {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Top-level application state.
pub struct AppState<'a> {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Selection
    dashboard: Dashboard<'a>,
    pub exchanges: Vec<&'a str>,
    pub leverages: Vec<u32>,
    pub criteria: FilterCriteria,
    pub snapshot: DashboardSnapshot<'a>,

    /// First visible row of the trade table.
    pub table_scroll: usize,
    pub status_message: Option<(String, StatusLevel)>,
}

impl<'a> AppState<'a> {
    /// Build the initial state. `None` when the store has no records to
    /// select from.
    pub fn new(
        store: &'a RecordStore,
        preferred_exchange: Option<&str>,
        preferred_leverage: Option<u32>,
    ) -> Option<Self> {
        let dashboard = Dashboard::new(store);
        let criteria = dashboard.default_criteria(preferred_exchange, preferred_leverage)?;
        let snapshot = dashboard.query(&criteria);
        let mut app = Self {
            active_panel: Panel::Overview,
            running: true,
            dashboard,
            exchanges: store.exchanges(),
            leverages: store.leverages(),
            criteria,
            snapshot,
            table_scroll: 0,
            status_message: None,
        };
        app.announce();
        Some(app)
    }

    pub fn store(&self) -> &'a RecordStore {
        self.dashboard.store()
    }

    /// Re-run the query for the current criteria.
    pub fn refresh(&mut self) {
        self.snapshot = self.dashboard.query(&self.criteria);
        self.table_scroll = self.table_scroll.min(self.max_scroll());
        self.announce();
    }

    fn announce(&mut self) {
        if self.snapshot.is_empty() {
            self.set_warning("No data for this selection");
        } else {
            let msg = format!(
                "{} trades | {} {}x | {} to {}",
                self.snapshot.record_count(),
                self.criteria.exchange,
                self.criteria.leverage,
                self.criteria.start,
                self.criteria.end,
            );
            self.set_status(msg);
        }
    }

    /// Move to the next (or previous) exchange. The date range resets to
    /// the new exchange's bounds.
    pub fn cycle_exchange(&mut self, forward: bool) {
        let Some(next) = cycle(&self.exchanges, &self.criteria.exchange.as_str(), forward) else {
            return;
        };
        if let Some(criteria) = self.dashboard.criteria_for_exchange(next, self.criteria.leverage) {
            tracing::debug!(exchange = next, "exchange changed");
            self.criteria = criteria;
            self.table_scroll = 0;
            self.refresh();
        }
    }

    pub fn cycle_leverage(&mut self, forward: bool) {
        let Some(next) = cycle(&self.leverages, &self.criteria.leverage, forward) else {
            return;
        };
        tracing::debug!(leverage = next, "leverage changed");
        self.criteria.leverage = next;
        self.table_scroll = 0;
        self.refresh();
    }

    /// Shift the start date by one month, clamped to the exchange bounds.
    pub fn shift_start(&mut self, forward: bool) {
        let Some(shifted) = shift_month(self.criteria.start, forward) else {
            return;
        };
        let shifted = match self.bounds() {
            Some((lo, _)) => shifted.max(lo),
            None => shifted,
        };
        if shifted > self.criteria.end {
            self.set_warning("Start date cannot pass the end date");
            return;
        }
        self.criteria.start = shifted;
        self.refresh();
    }

    /// Shift the end date by one month, clamped to the exchange bounds.
    pub fn shift_end(&mut self, forward: bool) {
        let Some(shifted) = shift_month(self.criteria.end, forward) else {
            return;
        };
        let shifted = match self.bounds() {
            Some((_, hi)) => shifted.min(hi),
            None => shifted,
        };
        if shifted < self.criteria.start {
            self.set_warning("End date cannot pass the start date");
            return;
        }
        self.criteria.end = shifted;
        self.refresh();
    }

    /// Reset the date range to the current exchange's bounds.
    pub fn reset_dates(&mut self) {
        if let Some((start, end)) = self.bounds() {
            self.criteria.start = start;
            self.criteria.end = end;
            self.refresh();
        }
    }

    fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.store().date_bounds(&self.criteria.exchange)
    }

    fn max_scroll(&self) -> usize {
        self.snapshot.record_count().saturating_sub(1)
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.table_scroll = (self.table_scroll + rows).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.table_scroll = self.table_scroll.saturating_sub(rows);
    }

    pub fn scroll_to_end(&mut self) {
        self.table_scroll = self.max_scroll();
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

/// The element after (or before) `current`, wrapping. Falls back to the
/// first element when `current` is not in the list.
fn cycle<T: PartialEq + Copy>(items: &[T], current: &T, forward: bool) -> Option<T> {
    let len = items.len();
    if len == 0 {
        return None;
    }
    let idx = match items.iter().position(|i| i == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };
    items.get(idx).copied()
}

fn shift_month(date: NaiveDate, forward: bool) -> Option<NaiveDate> {
    if forward {
        date.checked_add_months(Months::new(1))
    } else {
        date.checked_sub_months(Months::new(1))
    }
}
