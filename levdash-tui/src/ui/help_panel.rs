//! Panel 4 (Help): keyboard shortcuts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState<'_>) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Navigation");
    key(&mut lines, "1-4", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q / Esc", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Filters (any panel)");
    key(&mut lines, "e / E", "Next / previous exchange (resets dates)");
    key(&mut lines, "l / L", "Next / previous leverage");
    key(&mut lines, "[ / ]", "Start date back / forward one month");
    key(&mut lines, "{ / }", "End date back / forward one month");
    key(&mut lines, "r", "Reset dates to the exchange's range");
    lines.push(Line::from(""));

    section(&mut lines, "Trades panel");
    key(&mut lines, "j / k", "Scroll table down / up");
    key(&mut lines, "PgDn / PgUp", "Scroll ten rows");
    key(&mut lines, "g / G", "Jump to newest / oldest trade");
    lines.push(Line::from(""));

    section(&mut lines, "Dataset");
    let store = app.store();
    let source = store
        .source()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(in memory)".to_string());
    key(&mut lines, "file", &source);
    key(&mut lines, "records", &store.len().to_string());
    key(&mut lines, "blake3", store.dataset_hash());

    f.render_widget(Paragraph::new(lines), area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
