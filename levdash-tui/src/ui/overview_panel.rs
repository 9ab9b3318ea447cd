//! Panel 1 (Overview): filter bar, return cards, monthly candles and table.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use levdash_runner::format_pct;

use crate::app::AppState;
use crate::panels::{CandleChartPanel, MonthlyTablePanel};
use crate::theme::{self, Theme};

pub fn render(f: &mut Frame, area: Rect, app: &AppState<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(5),
        ])
        .split(area);

    render_filters(f, chunks[0], app);
    render_cards(f, chunks[1], app);

    if app.snapshot.is_empty() {
        super::render_no_data(f, chunks[2]);
        return;
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);

    let theme = Theme::default();
    f.render_widget(
        CandleChartPanel::new(&app.snapshot.candles, "Monthly balance", &theme),
        body[0],
    );
    f.render_widget(MonthlyTablePanel::new(&app.snapshot.monthly, &theme), body[1]);
}

fn render_filters(f: &mut Frame, area: Rect, app: &AppState<'_>) {
    let c = &app.criteria;
    let line = Line::from(vec![
        Span::styled("Exchange ", theme::muted()),
        Span::styled(c.exchange.clone(), theme::accent_bold()),
        Span::styled(" (e/E)   ", theme::muted()),
        Span::styled("Leverage ", theme::muted()),
        Span::styled(format!("{}x", c.leverage), theme::accent_bold()),
        Span::styled(" (l/L)   ", theme::muted()),
        Span::styled("From ", theme::muted()),
        Span::styled(c.start.to_string(), theme::accent()),
        Span::styled(" ([/])  ", theme::muted()),
        Span::styled("To ", theme::muted()),
        Span::styled(c.end.to_string(), theme::accent()),
        Span::styled(" ({/})", theme::muted()),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Filters ");
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_cards(f: &mut Frame, area: Rect, app: &AppState<'_>) {
    let theme = Theme::default();
    let returns = app.snapshot.returns;
    let cards = [
        ("BTC price return", returns.btc),
        ("Strategy return", returns.strategy),
        ("Relative performance", returns.relative),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for ((title, value), col) in cards.into_iter().zip(columns.iter()) {
        let style = Style::default()
            .fg(theme.return_color(value))
            .add_modifier(Modifier::BOLD);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted())
            .title(format!(" {title} "));
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(format_pct(value), style))).block(block),
            *col,
        );
    }
}
