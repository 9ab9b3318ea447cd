//! Time-series line chart (BTC price, account balance)

use chrono::NaiveDateTime;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use levdash_runner::Point;

use crate::theme::Theme;

/// X coordinate for a timestamp: seconds since the epoch.
pub fn time_x(t: NaiveDateTime) -> f64 {
    t.and_utc().timestamp() as f64
}

/// `[min, max]` of the X coordinates, widened when they coincide.
pub fn time_bounds<'p>(points: impl Iterator<Item = &'p Point>) -> [f64; 2] {
    let (lo, hi) = points.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        let x = time_x(p.time);
        (lo.min(x), hi.max(x))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    if hi - lo < 1.0 {
        // One day either side.
        [lo - 86_400.0, hi + 86_400.0]
    } else {
        [lo, hi]
    }
}

/// Line chart widget over a chronological series
pub struct LineChartPanel<'a> {
    points: &'a [Point],
    title: &'a str,
    color: Color,
    /// Decimals on the Y labels.
    precision: usize,
    theme: &'a Theme,
}

impl<'a> LineChartPanel<'a> {
    pub fn new(points: &'a [Point], title: &'a str, color: Color, theme: &'a Theme) -> Self {
        Self {
            points,
            title,
            color,
            precision: 2,
            theme,
        }
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

impl Widget for LineChartPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            Block::default()
                .title(format!(" {} [No Data] ", self.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.muted))
                .style(Style::default().bg(self.theme.background))
                .render(area, buf);
            return;
        };

        let data: Vec<(f64, f64)> = self
            .points
            .iter()
            .map(|p| (time_x(p.time), p.value))
            .collect();

        let min_y = self.points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
        let max_y = self
            .points
            .iter()
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max);
        let padding = if max_y > min_y {
            (max_y - min_y) * 0.05
        } else {
            max_y.abs().max(1.0) * 0.01
        };
        let y_bounds = [min_y - padding, max_y + padding];
        let x_bounds = time_bounds(self.points.iter());

        let muted = Style::default().fg(self.theme.muted);
        let prec = self.precision;
        let dataset = Dataset::default()
            .name(self.title)
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(self.color))
            .graph_type(GraphType::Line)
            .data(&data);

        let block = Block::default()
            .title(format!(
                " {} | {} points | last {:.prec$} ",
                self.title,
                self.points.len(),
                last.value,
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .style(muted)
                    .bounds(x_bounds)
                    .labels(vec![
                        Span::styled(first.time.format("%Y-%m-%d").to_string(), muted),
                        Span::styled(last.time.format("%Y-%m-%d").to_string(), muted),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .style(muted)
                    .bounds(y_bounds)
                    .labels(vec![
                        Span::styled(format!("{:.prec$}", y_bounds[0]), muted),
                        Span::styled(format!("{:.prec$}", y_bounds[1]), muted),
                    ]),
            )
            .render(area, buf);
    }
}
