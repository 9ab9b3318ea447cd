//! Top-level UI layout: four-panel frame with status bar.

pub mod help_panel;
pub mod overview_panel;
pub mod series_panel;
pub mod status_bar;
pub mod trades_panel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState<'_>) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    draw_panel(f, chunks[0], app);
    status_bar::render(f, chunks[1], app);
}

/// Draw the active panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState<'_>) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Overview => overview_panel::render(f, inner, app),
        Panel::Trades => trades_panel::render(f, inner, app),
        Panel::Series => series_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}

/// Shown in place of charts when the selection matched nothing.
pub(crate) fn render_no_data(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("No data for this selection", theme::warning())),
        Line::from(""),
        Line::from(Span::styled(
            "Change exchange (e/E), leverage (l/L) or reset the dates (r).",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
