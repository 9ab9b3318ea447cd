//! Drive a dashboard session over the sample export: key presses in,
//! rendered frames out.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use levdash_core::RecordStore;
use levdash_tui::{input, ui, AppState, Panel};

fn fixture_store() -> RecordStore {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("levdash-core/tests/fixtures/sample_trades.csv");
    RecordStore::load(&path).unwrap()
}

fn press(app: &mut AppState<'_>, c: char) {
    input::handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
}

fn frame_text(app: &AppState<'_>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buf = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn opening_view_matches_bitmex_1x() {
    let store = fixture_store();
    let app = AppState::new(&store, Some("Bitmex"), Some(1)).unwrap();
    let text = frame_text(&app);
    assert!(text.contains("-37.63%"));
    assert!(text.contains("9.19%"));
    assert!(text.contains("Monthly (4)"));
    assert!(text.contains("8 trades | Bitmex 1x"));
}

#[test]
fn switching_to_deribit_and_back() {
    let store = fixture_store();
    let mut app = AppState::new(&store, Some("Bitmex"), Some(1)).unwrap();

    press(&mut app, 'e');
    assert_eq!(app.criteria.exchange, "Deribit");
    assert_eq!(app.snapshot.record_count(), 3);
    assert!(frame_text(&app).contains("3 trades | Deribit 1x"));

    press(&mut app, 'l');
    assert!(app.snapshot.is_empty());
    assert!(frame_text(&app).contains("No data for this selection"));

    press(&mut app, 'E');
    press(&mut app, 'L');
    assert_eq!(app.criteria.exchange, "Bitmex");
    assert_eq!(app.criteria.leverage, 1);
    assert_eq!(app.snapshot.record_count(), 8);
}

#[test]
fn trades_panel_scrolls_through_fixture() {
    let store = fixture_store();
    let mut app = AppState::new(&store, Some("Bitmex"), Some(5)).unwrap();
    press(&mut app, '2');
    assert_eq!(app.active_panel, Panel::Trades);
    assert!(frame_text(&app).contains("Trades (4)"));

    for _ in 0..10 {
        press(&mut app, 'j');
    }
    assert_eq!(app.table_scroll, 3);
    assert!(frame_text(&app).contains("row 4"));
}
