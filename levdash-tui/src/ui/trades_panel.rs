//! Panel 2 (Trades): record table over the PnL bar chart.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::AppState;
use crate::panels::{PnlBarsPanel, TradeTapePanel};
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState<'_>) {
    if app.snapshot.is_empty() {
        super::render_no_data(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let theme = Theme::default();
    f.render_widget(
        TradeTapePanel::new(&app.snapshot.records, app.table_scroll, &theme),
        chunks[0],
    );
    f.render_widget(PnlBarsPanel::new(&app.snapshot.pnl, &theme), chunks[1]);
}

#[cfg(test)]
mod tests {
    use crate::app::{AppState, Panel};
    use crate::test_helpers::{draw_to_text, sample_store};

    #[test]
    fn table_follows_scroll() {
        let store = sample_store();
        let mut app = AppState::new(&store, Some("Bitmex"), Some(1)).unwrap();
        app.active_panel = Panel::Trades;
        let content = draw_to_text(&app, 120, 40);
        assert!(content.contains("Trades (4)"));
        assert!(content.contains("2019-03-20 08:00"));

        app.scroll_down(1);
        let content = draw_to_text(&app, 120, 40);
        assert!(!content.contains("2019-03-20 08:00"));
        assert!(content.contains("row 2"));
        assert!(content.contains("PnL (incl fees)"));
    }
}
