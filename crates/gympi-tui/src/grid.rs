//! Device card grid.
//!
//! [`CardGrid`] is the container for device cards. Every refresh throws the
//! old cards away and builds new ones from the incoming summaries, so
//! rendering the same list twice yields the same grid.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use gympi_core::constants::BPM_SUFFIX;
use gympi_core::model::DeviceSummary;

use crate::styles::ColorTheme;

/// Width of one card cell in terminal columns.
pub const CARD_WIDTH: u16 = 30;

/// Height of one card cell in terminal rows.
pub const CARD_HEIGHT: u16 = 7;

/// Control attached to a card; triggering it asks for that device's details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationControl {
    target: String,
}

impl ActivationControl {
    /// Device id this control requests details for.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Display fragment for one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCard {
    pub device_id: String,
    pub total_workouts: String,
    pub total_exercises: String,
    /// Summary average as served, e.g. `"130 BPM"`.
    pub average_heart_rate: String,
    pub control: ActivationControl,
}

impl DeviceCard {
    /// Map one summary record to its card.
    #[must_use]
    pub fn from_summary(device: &DeviceSummary) -> Self {
        Self {
            device_id: device.device_id.clone(),
            total_workouts: device.stats.total_workouts.to_string(),
            total_exercises: device.stats.total_exercises.to_string(),
            average_heart_rate: format!("{} {BPM_SUFFIX}", device.stats.average_heart_rate),
            control: ActivationControl {
                target: device.device_id.clone(),
            },
        }
    }
}

/// Container holding the current device cards.
#[derive(Debug, Clone, Default)]
pub struct CardGrid {
    cards: Vec<DeviceCard>,
}

impl CardGrid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the grid contents with one card per device, in input order.
    pub fn render_device_grid(&mut self, devices: &[DeviceSummary]) {
        self.cards.clear();
        self.cards.extend(devices.iter().map(DeviceCard::from_summary));
    }

    #[must_use]
    pub fn cards(&self) -> &[DeviceCard] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Number of card columns that fit in `width`.
#[must_use]
pub fn columns_for_width(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

/// Draw the card grid, keeping the selected card's row on screen.
#[allow(clippy::cast_possible_truncation)]
pub fn draw_card_grid(
    frame: &mut Frame,
    area: Rect,
    grid: &CardGrid,
    selected: usize,
    theme: &ColorTheme,
) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Devices ({}) ", grid.len()))
        .border_style(theme.border_style());
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    if grid.is_empty() {
        let empty = Paragraph::new(Line::styled("No devices reported yet.", theme.muted_style()));
        frame.render_widget(empty, inner);
        return;
    }

    let columns = columns_for_width(inner.width);
    let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let card_width = (inner.width / columns as u16).max(1);

    for (i, card) in grid.cards().iter().enumerate() {
        let row = i / columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let col = (i % columns) as u16;
        let y = inner.y + ((row - first_row) as u16) * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(inner.y + inner.height - y);
        let cell = Rect {
            x: inner.x + col * card_width,
            y,
            width: card_width,
            height,
        };
        draw_card(frame, cell, card, i == selected, theme);
    }
}

fn draw_card(frame: &mut Frame, area: Rect, card: &DeviceCard, selected: bool, theme: &ColorTheme) {
    let border = if selected {
        theme.selected_style()
    } else {
        theme.border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Device {} ", card.device_id))
        .border_style(border);

    let label = theme.muted_style();
    let text = vec![
        Line::from(vec![
            Span::styled("Workouts:  ", label),
            Span::raw(card.total_workouts.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Exercises: ", label),
            Span::raw(card.total_exercises.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Avg HR:    ", label),
            Span::styled(card.average_heart_rate.as_str(), theme.accent_style()),
        ]),
        Line::from(Span::styled(
            "[Enter] Details",
            if selected {
                theme.selected_style()
            } else {
                Style::default()
            },
        )),
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}
