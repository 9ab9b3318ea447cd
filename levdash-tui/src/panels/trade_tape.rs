//! Trade table - the filtered records, most recent first
//!
//! Columns: Number, Entry time, Trade type, Exposure, Entry balance,
//! Exit balance, Pnl (incl fees). Rows start at the scroll offset.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use levdash_core::TradeRecord;

use crate::theme::Theme;

/// Trade table widget
pub struct TradeTapePanel<'a> {
    records: &'a [&'a TradeRecord],
    offset: usize,
    theme: &'a Theme,
}

impl<'a> TradeTapePanel<'a> {
    pub fn new(records: &'a [&'a TradeRecord], offset: usize, theme: &'a Theme) -> Self {
        Self {
            records,
            offset,
            theme,
        }
    }

    fn format_pnl(pnl: f64) -> String {
        format!("{:+.4}", pnl)
    }
}

impl Widget for TradeTapePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.records.is_empty() {
            " Trades [No Data] ".to_string()
        } else {
            format!(
                " Trades ({}) | row {} ",
                self.records.len(),
                self.offset.min(self.records.len() - 1) + 1
            )
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        let header_cells = [
            "No.",
            "Entry time",
            "Type",
            "Exposure",
            "Entry bal",
            "Exit bal",
            "Pnl (fees)",
        ]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        });
        let header = Row::new(header_cells).height(1);

        let rows = self.records.iter().skip(self.offset).map(|r| {
            let label = r.trade_type.label();
            let cells = vec![
                Cell::from(r.number.map(|n| n.to_string()).unwrap_or_else(|| "-".into())),
                Cell::from(r.entry_time.format("%Y-%m-%d %H:%M").to_string()),
                Cell::from(label).style(Style::default().fg(self.theme.trade_type_color(label))),
                Cell::from(r.exposure.clone()),
                Cell::from(format!("{:.4}", r.entry_balance)),
                Cell::from(format!("{:.4}", r.exit_balance)),
                Cell::from(Self::format_pnl(r.pnl))
                    .style(Style::default().fg(self.theme.pnl_color(r.pnl))),
            ];
            Row::new(cells)
                .style(Style::default().fg(self.theme.text_primary))
                .height(1)
        });

        let widths = [
            Constraint::Length(6),
            Constraint::Length(17),
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Min(10),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}
