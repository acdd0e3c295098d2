//! Workout history table for the detail surface.

use chrono::{Local, TimeZone};
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use gympi_core::constants::BPM_SUFFIX;
use gympi_core::metrics::average_heart_rate;
use gympi_core::model::{Timestamp, WorkoutRecord};

use crate::styles::ColorTheme;

/// Heading written above the history rows.
pub const HISTORY_HEADING: &str = "Workout History";

/// Column titles of the history table.
pub const HISTORY_COLUMNS: [&str; 4] = ["Date", "Workout", "Exercises", "Avg HR"];

/// Format a timestamp as a calendar date in the given zone.
#[must_use]
pub fn format_date_in<Tz: TimeZone>(ts: &Timestamp, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.as_utc().with_timezone(tz).format("%Y-%m-%d").to_string()
}

/// Format a timestamp as a calendar date in the viewer's local zone.
#[must_use]
pub fn format_local_date(ts: &Timestamp) -> String {
    format_date_in(ts, &Local)
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub date: String,
    pub workout_name: String,
    pub completed_exercises: String,
    /// Rounded average over the workout's samples.
    pub average_heart_rate: i64,
}

impl HistoryRow {
    /// Map one workout to its row, dating it in `tz`.
    #[must_use]
    pub fn from_workout_in<Tz: TimeZone>(workout: &WorkoutRecord, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            date: format_date_in(&workout.timestamp, tz),
            workout_name: workout.workout_name.clone(),
            completed_exercises: workout.completed_exercises.to_string(),
            average_heart_rate: average_heart_rate(Some(workout.heart_rate_data.as_slice())),
        }
    }

    /// Heart-rate column text, e.g. `"120 BPM"`.
    #[must_use]
    pub fn heart_rate_label(&self) -> String {
        format!("{} {BPM_SUFFIX}", self.average_heart_rate)
    }
}

/// Container for the history heading and rows.
#[derive(Debug, Clone, Default)]
pub struct HistoryTable {
    heading: Option<&'static str>,
    rows: Vec<HistoryRow>,
}

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the table, write the heading, and add one row per workout in
    /// input order, dated in the local zone.
    pub fn render_history_table(&mut self, history: &[WorkoutRecord]) {
        self.render_history_table_in(history, &Local);
    }

    /// Same as [`render_history_table`](Self::render_history_table) with an
    /// explicit zone.
    pub fn render_history_table_in<Tz: TimeZone>(&mut self, history: &[WorkoutRecord], tz: &Tz)
    where
        Tz::Offset: std::fmt::Display,
    {
        self.rows.clear();
        self.heading = Some(HISTORY_HEADING);
        self.rows
            .extend(history.iter().map(|w| HistoryRow::from_workout_in(w, tz)));
    }

    #[must_use]
    pub fn heading(&self) -> Option<&str> {
        self.heading
    }

    #[must_use]
    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }
}

/// Draw the history table.
pub fn draw_history_table(frame: &mut Frame, area: Rect, table: &HistoryTable, theme: &ColorTheme) {
    let header = Row::new(HISTORY_COLUMNS.iter().map(|c| Cell::from(*c))).style(theme.header_style());

    let rows = table.rows().iter().map(|r| {
        Row::new(vec![
            Cell::from(r.date.clone()),
            Cell::from(r.workout_name.clone()),
            Cell::from(r.completed_exercises.clone()),
            Cell::from(r.heart_rate_label()).style(theme.accent_style()),
        ])
    });

    let widths = [
        Constraint::Length(12),
        Constraint::Min(12),
        Constraint::Length(10),
        Constraint::Length(10),
    ];

    let title = format!(" {} ", table.heading().unwrap_or(HISTORY_HEADING));
    let widget = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.border_style()),
    );
    frame.render_widget(widget, area);
}
