//! Parrot/neon theme tokens for the LevDash TUI
//!
//! # Color Palette
//! - **Background**: Deep charcoal (base layer)
//! - **Accent**: Electric cyan (focus, filter values, headings)
//! - **Positive**: Neon green (gains, up months, long trades)
//! - **Negative**: Hot pink (losses, down months, short trades)
//! - **Warning**: Neon orange (empty selections, refused actions)
//! - **Neutral**: Cool purple (relative performance, secondary series)
//! - **Muted**: Steel blue (axis labels, hints)
//!
//! Widgets take a [`Theme`] by reference; the layout code uses the free
//! style helpers at the bottom of this file.

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);

/// Parrot/neon theme for the dashboard widgets
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    /// Gains, up candles, long trades
    pub positive: Color,
    /// Losses, down candles, short trades
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: BACKGROUND,
            accent: ACCENT,
            positive: POSITIVE,
            negative: NEGATIVE,
            warning: WARNING,
            neutral: NEUTRAL,
            muted: MUTED,
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Color for a signed value (PnL, return %). Zero counts as a gain.
    pub fn pnl_color(&self, value: f64) -> Color {
        if value >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    /// Color for an optional return; absent values are muted.
    pub fn return_color(&self, value: Option<f64>) -> Color {
        match value {
            Some(v) => self.pnl_color(v),
            None => self.muted,
        }
    }

    /// Color for a trade direction label.
    pub fn trade_type_color(&self, label: &str) -> Color {
        match label {
            "Long" => self.positive,
            "Short" => self.negative,
            _ => self.text_secondary,
        }
    }
}

// ─── Style helpers ──────────────────────────────────────────────────

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
