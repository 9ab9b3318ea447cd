//! LevDash TUI: terminal dashboard over a leveraged-trading backtest export
//!
//! Provides interactive exploration of one exchange/leverage selection:
//! - Headline returns (BTC, strategy, relative)
//! - Monthly balance candles and returns table
//! - Trade table with a long/short PnL chart
//! - BTC price and balance lines

pub mod app;
pub mod input;
pub mod panels;
pub mod theme;
pub mod ui;

pub use app::{AppState, Panel};
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
