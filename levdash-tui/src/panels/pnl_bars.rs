//! PnL bar chart - one bar per trade, long and short in separate colors

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use levdash_runner::{PnlSeries, Point};

use super::line_chart::{time_bounds, time_x};
use crate::theme::Theme;

/// PnL bar chart widget
pub struct PnlBarsPanel<'a> {
    pnl: &'a PnlSeries,
    theme: &'a Theme,
}

impl<'a> PnlBarsPanel<'a> {
    pub fn new(pnl: &'a PnlSeries, theme: &'a Theme) -> Self {
        Self { pnl, theme }
    }
}

fn bars(points: &[Point]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (time_x(p.time), p.value)).collect()
}

impl Widget for PnlBarsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.pnl.is_empty() {
            Block::default()
                .title(" PnL (incl fees) [No Data] ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.muted))
                .style(Style::default().bg(self.theme.background))
                .render(area, buf);
            return;
        }

        let long = bars(&self.pnl.long);
        let short = bars(&self.pnl.short);

        // Bars grow from zero, so zero is always inside the Y range.
        let (min_y, max_y) = long
            .iter()
            .chain(short.iter())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
        let pad = ((max_y - min_y) * 0.05).max(1e-6);
        let y_bounds = [min_y - pad, max_y + pad];
        let x_bounds = time_bounds(self.pnl.long.iter().chain(self.pnl.short.iter()));

        let muted = Style::default().fg(self.theme.muted);
        let datasets = vec![
            Dataset::default()
                .name(format!("Long {}", self.pnl.long.len()))
                .marker(symbols::Marker::HalfBlock)
                .style(Style::default().fg(self.theme.positive))
                .graph_type(GraphType::Bar)
                .data(&long),
            Dataset::default()
                .name(format!("Short {}", self.pnl.short.len()))
                .marker(symbols::Marker::HalfBlock)
                .style(Style::default().fg(self.theme.negative))
                .graph_type(GraphType::Bar)
                .data(&short),
        ];

        let block = Block::default()
            .title(format!(
                " PnL (incl fees) | long {:+.4} short {:+.4} ",
                self.pnl.total_long(),
                self.pnl.total_short(),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        Chart::new(datasets)
            .block(block)
            .x_axis(Axis::default().style(muted).bounds(x_bounds))
            .y_axis(
                Axis::default()
                    .style(muted)
                    .bounds(y_bounds)
                    .labels(vec![
                        Span::styled(format!("{:.4}", y_bounds[0]), muted),
                        Span::styled("0", muted),
                        Span::styled(format!("{:.4}", y_bounds[1]), muted),
                    ]),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_text, sample_store};
    use levdash_runner::series::pnl_by_type;

    fn render_to_text(pnl: &PnlSeries) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 16);
        let mut buf = Buffer::empty(area);
        PnlBarsPanel::new(pnl, &theme).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_totals_in_title() {
        let store = sample_store();
        let records: Vec<_> = store.records().iter().take(4).collect();
        let pnl = pnl_by_type(&records);
        let content = render_to_text(&pnl);
        // Long: 0.02 - 0.01, short: 0.03 + 0.04.
        assert!(content.contains("long +0.0100"));
        assert!(content.contains("short +0.0700"));
    }

    #[test]
    fn test_empty_series() {
        let content = render_to_text(&PnlSeries::default());
        assert!(content.contains("No Data"));
    }

    #[test]
    fn test_only_short_trades() {
        let store = sample_store();
        let records: Vec<_> = store.records().iter().skip(7).collect();
        let pnl = pnl_by_type(&records);
        assert!(pnl.long.is_empty());
        let content = render_to_text(&pnl);
        assert!(content.contains("long +0.0000"));
        assert!(content.contains("short +0.0100"));
    }
}
