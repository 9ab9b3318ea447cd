//! Monthly returns table - one row per calendar month, newest first

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use levdash_runner::{format_pct, MonthlyAggregate};

use crate::theme::Theme;

pub struct MonthlyTablePanel<'a> {
    monthly: &'a [MonthlyAggregate],
    theme: &'a Theme,
}

impl<'a> MonthlyTablePanel<'a> {
    pub fn new(monthly: &'a [MonthlyAggregate], theme: &'a Theme) -> Self {
        Self { monthly, theme }
    }
}

impl Widget for MonthlyTablePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" Monthly ({}) ", self.monthly.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        let header = Row::new(["Month", "Entry", "Exit", "Return", "Trades"].map(|h| {
            Cell::from(h).style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        }));

        let rows = self.monthly.iter().map(|m| {
            Row::new(vec![
                Cell::from(m.period.to_string()),
                Cell::from(format!("{:.4}", m.entry_balance)),
                Cell::from(format!("{:.4}", m.exit_balance)),
                Cell::from(format_pct(m.return_pct))
                    .style(Style::default().fg(self.theme.return_color(m.return_pct))),
                Cell::from(m.trade_count.to_string()),
            ])
            .style(Style::default().fg(self.theme.text_primary))
        });

        let widths = [
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Min(6),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}
