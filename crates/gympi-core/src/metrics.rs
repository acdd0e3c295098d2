//! Derived heart-rate metrics.

use crate::model::{DeviceStats, HeartRateSample, WorkoutRecord};

/// Average heart rate of a sample series, rounded to the nearest integer.
///
/// Returns `0` for an absent or empty series. Ties round half-up
/// (`floor(mean + 0.5)`), so `120.5` becomes `121` and `-0.5` becomes `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn average_heart_rate(samples: Option<&[HeartRateSample]>) -> i64 {
    let Some(samples) = samples.filter(|s| !s.is_empty()) else {
        return 0;
    };
    let sum: f64 = samples.iter().map(|s| s.value).sum();
    let mean = sum / samples.len() as f64;
    if !mean.is_finite() {
        return 0;
    }
    (mean + 0.5).floor() as i64
}

/// Aggregate statistics over a device's full workout history.
///
/// The heart-rate average spans every sample of every workout and is
/// rounded to one decimal place; it is `0.0` when no samples exist.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize_history(history: &[WorkoutRecord]) -> DeviceStats {
    let total_exercises = history
        .iter()
        .map(|w| w.completed_exercises)
        .fold(0u64, u64::saturating_add);

    let (sum, count) = history
        .iter()
        .flat_map(|w| w.heart_rate_data.iter())
        .fold((0.0f64, 0usize), |(sum, n), s| (sum + s.value, n + 1));

    let mean = if count == 0 { 0.0 } else { sum / count as f64 };
    let average_heart_rate = if mean.is_finite() {
        (mean * 10.0).round() / 10.0
    } else {
        0.0
    };

    DeviceStats {
        total_workouts: history.len() as u64,
        total_exercises,
        average_heart_rate,
    }
}
