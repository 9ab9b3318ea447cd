//! Monthly candle chart - one candle per calendar month
//!
//! Renders with direct buffer writes:
//! - Each month gets an equal-width slot (1 to 5 columns)
//! - Body: block char, green when the month closed above its open
//! - Wicks: only drawn when high/low extend past the body
//! - X axis: first and last month labels

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use levdash_runner::CandleBar;

use crate::theme::Theme;

/// Monthly candle chart widget
pub struct CandleChartPanel<'a> {
    bars: &'a [CandleBar],
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> CandleChartPanel<'a> {
    pub fn new(bars: &'a [CandleBar], title: &'a str, theme: &'a Theme) -> Self {
        Self { bars, title, theme }
    }

    /// Map a balance to a Y position in the plot area (0 = top)
    fn value_to_y(value: f64, y_min: f64, y_max: f64, plot_height: u16) -> u16 {
        if (y_max - y_min).abs() < 1e-12 || plot_height == 0 {
            return 0;
        }
        let frac = (value - y_min) / (y_max - y_min);
        let y = plot_height.saturating_sub(1) as f64 * (1.0 - frac);
        y.round().max(0.0).min(plot_height.saturating_sub(1) as f64) as u16
    }
}

impl Widget for CandleChartPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.bars.is_empty() {
            let block = Block::default()
                .title(format!(" {} [No Data] ", self.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.muted))
                .style(Style::default().bg(self.theme.background));
            block.render(area, buf);
            return;
        }

        let y_min = self.bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        let y_max = self
            .bars
            .iter()
            .map(|b| b.high)
            .fold(f64::NEG_INFINITY, f64::max);

        let range = y_max - y_min;
        let pad = if range > 0.0 { range * 0.05 } else { y_max.abs().max(1.0) * 0.01 };
        let y_lower = y_min - pad;
        let y_upper = y_max + pad;

        let up_count = self.bars.iter().filter(|b| b.is_up()).count();
        let down_count = self.bars.len() - up_count;

        let block = Block::default()
            .title(format!(
                " {} | {} months | {} up {} down ",
                self.title,
                self.bars.len(),
                up_count,
                down_count,
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        let inner = block.inner(area);
        block.render(area, buf);

        // Left margin for Y labels, bottom row for month labels.
        let label_width: u16 = 9;
        let plot_left = inner.x + label_width;
        let plot_top = inner.y;
        let plot_width = inner.width.saturating_sub(label_width);
        let plot_height = inner.height.saturating_sub(1);

        if plot_width == 0 || plot_height == 0 {
            return;
        }

        let label_style = Style::default().fg(self.theme.muted);
        let y_labels = [y_upper, (y_upper + y_lower) / 2.0, y_lower];
        let y_positions = [0u16, plot_height / 2, plot_height.saturating_sub(1)];
        for (value, y_pos) in y_labels.iter().zip(y_positions.iter()) {
            buf.set_string(inner.x, plot_top + y_pos, format!("{:>8.4}", value), label_style);
        }

        // Keep the most recent months when they do not all fit.
        let visible = self.bars.len().min(plot_width as usize);
        let shown = &self.bars[self.bars.len() - visible..];
        let slot = (plot_width as usize / visible).clamp(1, 5) as u16;
        let body_width = slot.saturating_sub(1).max(1);

        for (i, bar) in shown.iter().enumerate() {
            let x0 = plot_left + i as u16 * slot;
            let color = if bar.is_up() {
                self.theme.positive
            } else {
                self.theme.negative
            };
            let style = Style::default().fg(color);

            let high_y = Self::value_to_y(bar.high, y_lower, y_upper, plot_height);
            let low_y = Self::value_to_y(bar.low, y_lower, y_upper, plot_height);
            let body_top = Self::value_to_y(bar.open.max(bar.close), y_lower, y_upper, plot_height);
            let body_bot = Self::value_to_y(bar.open.min(bar.close), y_lower, y_upper, plot_height);

            let wick_x = x0 + body_width / 2;
            for y in high_y..body_top {
                buf.set_string(wick_x, plot_top + y, "│", style);
            }
            let body_char = if bar.is_up() { "█" } else { "▓" };
            for y in body_top..=body_bot {
                for dx in 0..body_width {
                    buf.set_string(x0 + dx, plot_top + y, body_char, style);
                }
            }
            for y in (body_bot + 1)..=low_y {
                buf.set_string(wick_x, plot_top + y, "│", style);
            }
        }

        // Month labels under the first and last candle.
        let axis_y = plot_top + plot_height;
        if let (Some(first), Some(last)) = (shown.first(), shown.last()) {
            buf.set_string(plot_left, axis_y, first.period.to_string(), label_style);
            if shown.len() > 1 {
                let last_label = last.period.to_string();
                let x = (plot_left + plot_width).saturating_sub(last_label.len() as u16);
                if x > plot_left + 8 {
                    buf.set_string(x, axis_y, last_label, label_style);
                }
            }
        }
    }
}
