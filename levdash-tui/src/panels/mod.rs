//! Dashboard widgets
//!
//! - CandleChart: monthly balance candles
//! - MonthlyTable: monthly returns
//! - TradeTape: filtered record table
//! - PnlBars: per-trade PnL, long vs short
//! - LineChart: BTC price and balance over time

pub mod candle_chart;
pub mod line_chart;
pub mod monthly_table;
pub mod pnl_bars;
pub mod trade_tape;

pub use candle_chart::CandleChartPanel;
pub use line_chart::LineChartPanel;
pub use monthly_table::MonthlyTablePanel;
pub use pnl_bars::PnlBarsPanel;
pub use trade_tape::TradeTapePanel;
