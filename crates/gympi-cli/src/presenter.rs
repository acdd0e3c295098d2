//! Text presenter for one-shot mode.

use std::io::{self, Write};

use console::style;

use gympi_core::model::DeviceStats;
use gympi_tui::grid::CardGrid;
use gympi_tui::history::{HistoryTable, HISTORY_HEADING};

use crate::output::{format_device_rows, format_history_rows};
use crate::ui::is_color_disabled;

/// Writes the device grid or a device's history as text.
pub struct TextPresenter {
    styled: bool,
}

impl TextPresenter {
    #[must_use]
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    /// Presenter for stdout, honoring `NO_COLOR`.
    #[must_use]
    pub fn for_stdout() -> Self {
        Self::new(!is_color_disabled() && console::colors_enabled())
    }

    fn heading(&self, text: &str) -> String {
        if self.styled {
            style(text).bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn header_row(&self, row: &str) -> String {
        if self.styled {
            style(row).bold().to_string()
        } else {
            row.to_string()
        }
    }

    /// Write one line per device card.
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    pub fn write_devices(&self, out: &mut dyn Write, grid: &CardGrid) -> io::Result<()> {
        writeln!(out, "{}", self.heading(&format!("Devices ({})", grid.len())))?;
        let mut rows = format_device_rows(grid.cards()).into_iter();
        if let Some(header) = rows.next() {
            writeln!(out, "{}", self.header_row(&header))?;
        }
        for row in rows {
            writeln!(out, "{row}")?;
        }
        Ok(())
    }

    /// Write the history summary line followed by the history table.
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    pub fn write_history(
        &self,
        out: &mut dyn Write,
        device_id: &str,
        stats: &DeviceStats,
        table: &HistoryTable,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.heading(&format!("Device {device_id}")))?;
        writeln!(
            out,
            "Workouts: {}  Exercises: {}  Avg HR: {:.1} BPM",
            stats.total_workouts, stats.total_exercises, stats.average_heart_rate
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            self.heading(table.heading().unwrap_or(HISTORY_HEADING))
        )?;
        let mut rows = format_history_rows(table.rows()).into_iter();
        if let Some(header) = rows.next() {
            writeln!(out, "{}", self.header_row(&header))?;
        }
        for row in rows {
            writeln!(out, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gympi_core::metrics::summarize_history;
    use gympi_core::model::{DeviceSummary, HeartRateSample, Timestamp, WorkoutRecord};

    fn render_devices(devices: &[DeviceSummary]) -> String {
        let mut grid = CardGrid::new();
        grid.render_device_grid(devices);
        let mut buf = Vec::new();
        TextPresenter::new(false).write_devices(&mut buf, &grid).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn devices_plain_text() {
        let text = render_devices(&[DeviceSummary {
            device_id: "D1".into(),
            stats: DeviceStats {
                total_workouts: 5,
                total_exercises: 20,
                average_heart_rate: 130.0,
            },
        }]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Devices (1)");
        assert!(lines[1].starts_with("Device"));
        assert!(lines[2].starts_with("D1"));
        assert!(lines[2].ends_with("130 BPM"));
    }

    #[test]
    fn no_devices() {
        let text = render_devices(&[]);
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("Devices (0)"));
    }

    #[test]
    fn history_plain_text() {
        let history = vec![WorkoutRecord {
            id: Some(7),
            timestamp: Timestamp::parse("2024-03-01T18:30:00Z").unwrap(),
            workout_name: "Leg Day".into(),
            completed_exercises: 3,
            heart_rate_data: [100.0, 120.0, 140.0]
                .into_iter()
                .map(HeartRateSample::new)
                .collect(),
        }];
        let mut table = HistoryTable::new();
        table.render_history_table_in(&history, &Utc);

        let mut buf = Vec::new();
        TextPresenter::new(false)
            .write_history(&mut buf, "D1", &summarize_history(&history), &table)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Device D1\n"));
        assert!(text.contains("Workouts: 1  Exercises: 3  Avg HR: 120.0 BPM"));
        assert!(text.contains("Workout History"));
        assert!(text.contains("2024-03-01  Leg Day"));
        assert!(text.trim_end().ends_with("120 BPM"));
    }
}
