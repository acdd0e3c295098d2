//! Dashboard header panel.

use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header: server, device count and last successful refresh.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    base_url: &str,
    device_count: usize,
    last_refresh: Option<DateTime<Local>>,
    theme: &ColorTheme,
) {
    let (refreshed, style) = match last_refresh {
        Some(at) => (at.format("%H:%M:%S").to_string(), theme.success_style()),
        None => ("waiting".to_string(), theme.muted_style()),
    };
    let text = vec![Line::from(vec![
        Span::styled("GymPi", theme.header_style()),
        Span::raw(format!(" | {base_url} | Devices: {device_count} | ")),
        Span::styled(format!("Updated: {refreshed}"), style),
    ])];

    let block = Block::default().borders(Borders::BOTTOM);
    frame.render_widget(Paragraph::new(text).block(block), area);
}
