//! Panel 3 (Series): BTC price and account balance over time.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::AppState;
use crate::panels::LineChartPanel;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState<'_>) {
    if app.snapshot.is_empty() {
        super::render_no_data(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let theme = Theme::default();
    f.render_widget(
        LineChartPanel::new(&app.snapshot.btc_price, "BTC price", theme.warning, &theme).precision(0),
        chunks[0],
    );
    f.render_widget(
        LineChartPanel::new(&app.snapshot.balance, "Balance", theme.accent, &theme).precision(4),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use crate::app::{AppState, Panel};
    use crate::test_helpers::{draw_to_text, sample_store};

    #[test]
    fn shows_both_series() {
        let store = sample_store();
        let mut app = AppState::new(&store, Some("Bitmex"), Some(1)).unwrap();
        app.active_panel = Panel::Series;
        let content = draw_to_text(&app, 120, 40);
        assert!(content.contains("BTC price | 4 points | last 4000"));
        assert!(content.contains("Balance | 4 points | last 1.0800"));
    }
}
