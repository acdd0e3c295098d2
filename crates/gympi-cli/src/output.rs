//! Plain-text layout of dashboard fragments.

use gympi_tui::grid::DeviceCard;
use gympi_tui::history::{HistoryRow, HISTORY_COLUMNS};

/// Column titles of the device listing.
pub const DEVICE_COLUMNS: [&str; 4] = ["Device", "Workouts", "Exercises", "Avg HR"];

/// Lay out the device cards as aligned text rows, header first.
#[must_use]
pub fn format_device_rows(cards: &[DeviceCard]) -> Vec<String> {
    let cells: Vec<[&str; 4]> = cards
        .iter()
        .map(|c| {
            [
                c.device_id.as_str(),
                c.total_workouts.as_str(),
                c.total_exercises.as_str(),
                c.average_heart_rate.as_str(),
            ]
        })
        .collect();
    align(DEVICE_COLUMNS, &cells)
}

/// Lay out the history rows as aligned text rows, header first.
#[must_use]
pub fn format_history_rows(rows: &[HistoryRow]) -> Vec<String> {
    let labels: Vec<String> = rows.iter().map(HistoryRow::heart_rate_label).collect();
    let cells: Vec<[&str; 4]> = rows
        .iter()
        .zip(&labels)
        .map(|(r, hr)| {
            [
                r.date.as_str(),
                r.workout_name.as_str(),
                r.completed_exercises.as_str(),
                hr.as_str(),
            ]
        })
        .collect();
    align(HISTORY_COLUMNS, &cells)
}

fn align(header: [&str; 4], rows: &[[&str; 4]]) -> Vec<String> {
    let mut widths = header.map(str::len);
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    std::iter::once(&header)
        .chain(rows)
        .map(|row| {
            let line: Vec<String> = row
                .iter()
                .zip(widths)
                .map(|(cell, w)| format!("{cell:<w$}"))
                .collect();
            line.join("  ").trim_end().to_string()
        })
        .collect()
}
