//! Dashboard footer with key hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

const GRID_HINTS: [(&str, &str); 4] = [
    ("q", "quit"),
    ("arrows", "select"),
    ("enter", "details"),
    ("l", "logs"),
];

const DETAIL_HINTS: [(&str, &str); 2] = [("esc", "close"), ("q", "quit")];

/// Render the footer. Hints depend on whether the detail view is open.
pub fn render_footer(frame: &mut Frame, area: Rect, detail_open: bool, theme: &ColorTheme) {
    let hints: &[(&str, &str)] = if detail_open {
        &DETAIL_HINTS
    } else {
        &GRID_HINTS
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, label)) in hints.iter().enumerate() {
        spans.push(Span::styled(*key, theme.selected_style()));
        let sep = if i + 1 < hints.len() { " | " } else { "" };
        spans.push(Span::raw(format!(": {label}{sep}")));
    }

    let block = Block::default().borders(Borders::TOP);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
