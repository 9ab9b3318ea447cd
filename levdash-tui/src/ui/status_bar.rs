//! Bottom status bar: panel hints, dataset fingerprint, last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState<'_>) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " 1:Overview 2:Trades 3:Series 4:Help",
        theme::muted(),
    ));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("data {}", app.store().short_hash()),
        theme::neutral(),
    ));
    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
