//! Test helpers for building stores and reading rendered buffers

use chrono::NaiveDate;
use ratatui::buffer::Buffer;

use levdash_core::{RecordStore, TradeRecord, TradeType};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[allow(clippy::too_many_arguments)]
pub fn record(
    number: u64,
    exchange: &str,
    margin: u32,
    (y, m, d): (i32, u32, u32),
    trade_type: TradeType,
    entry: f64,
    exit: f64,
    btc: f64,
) -> TradeRecord {
    TradeRecord {
        number: Some(number),
        exchange: exchange.to_string(),
        margin,
        entry_time: date(y, m, d).and_hms_opt(8, 0, 0).unwrap(),
        trade_type,
        exposure: if trade_type == TradeType::Long { "1.0" } else { "-1.0" }.to_string(),
        entry_balance: entry,
        exit_balance: exit,
        pnl: exit - entry,
        btc_price: btc,
    }
}

/// Eight trades over three exchanges/leverages, newest first.
pub fn sample_store() -> RecordStore {
    use TradeType::{Long, Short};
    RecordStore::from_records(vec![
        record(1, "Bitmex", 1, (2019, 3, 20), Long, 1.06, 1.08, 4000.0),
        record(2, "Bitmex", 1, (2019, 2, 20), Short, 1.03, 1.06, 3900.0),
        record(3, "Bitmex", 1, (2019, 1, 20), Long, 1.04, 1.03, 3600.0),
        record(4, "Bitmex", 1, (2019, 1, 5), Short, 1.00, 1.04, 3800.0),
        record(5, "Bitmex", 5, (2019, 2, 10), Long, 1.10, 1.25, 3650.0),
        record(6, "Bitmex", 5, (2019, 1, 10), Short, 1.00, 1.10, 3700.0),
        record(7, "Deribit", 1, (2019, 2, 28), Long, 0.51, 0.52, 3800.0),
        record(8, "Deribit", 1, (2019, 2, 1), Short, 0.50, 0.51, 3450.0),
    ])
}

/// Concatenate every cell symbol, row by row.
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut content = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell((x, y)) {
                content.push_str(cell.symbol());
            }
        }
        content.push('\n');
    }
    content
}

/// Draw the whole UI into an off-screen terminal and return its text.
pub fn draw_to_text(app: &crate::app::AppState<'_>, width: u16, height: u16) -> String {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| crate::ui::draw(f, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}
