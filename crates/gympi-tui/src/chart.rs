//! Heart-rate line chart for the latest workout.
//!
//! [`ChartBuilder`] owns at most one [`HeartRateChart`]. Building a new chart
//! always releases the previous one first.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;
use tracing::trace;

use gympi_core::constants::SUGGESTED_MAX_BPM;
use gympi_core::model::WorkoutRecord;

use crate::styles::ColorTheme;

/// Fixed visual configuration of the heart-rate chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// Y axis starts at zero instead of the smallest sample.
    pub begin_at_zero: bool,
    /// Y axis extends at least this far; data above it grows the axis.
    pub suggested_max: f64,
    /// Chart follows the size of the area it is drawn into.
    pub responsive: bool,
    /// Keep a 2:1 plot shape instead of filling the area.
    pub maintain_aspect_ratio: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            begin_at_zero: true,
            suggested_max: SUGGESTED_MAX_BPM,
            responsive: true,
            maintain_aspect_ratio: false,
        }
    }
}

impl ChartConfig {
    /// The portion of `area` the plot occupies.
    #[must_use]
    pub fn plot_area(&self, area: Rect) -> Rect {
        let area = if self.responsive {
            area
        } else {
            Rect {
                width: area.width.min(60),
                height: area.height.min(15),
                ..area
            }
        };
        if !self.maintain_aspect_ratio {
            return area;
        }
        // Terminal cells are about twice as tall as wide.
        let height = area.height.min(area.width / 4).max(1);
        Rect { height, ..area }
    }
}

/// One live chart: the sample series of a single workout.
#[derive(Debug)]
pub struct HeartRateChart {
    id: u64,
    workout_name: String,
    labels: Vec<usize>,
    values: Vec<f64>,
    config: ChartConfig,
    live: Arc<AtomicUsize>,
}

impl HeartRateChart {
    /// Builder-assigned serial number.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn workout_name(&self) -> &str {
        &self.workout_name
    }

    /// X labels: 0-based sample positions.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Raw sample values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// (x, y) pairs for plotting.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.labels
            .iter()
            .zip(&self.values)
            .map(|(&x, &y)| (x as f64, y))
            .collect()
    }

    /// X axis range; never empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn x_bounds(&self) -> [f64; 2] {
        let last = self.labels.last().copied().unwrap_or(0).max(1);
        [0.0, last as f64]
    }

    /// Y axis range after applying the fixed configuration.
    #[must_use]
    pub fn y_bounds(&self) -> [f64; 2] {
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let lower = if self.config.begin_at_zero || !min.is_finite() {
            0.0_f64.min(min)
        } else {
            min
        };
        let upper = if max.is_finite() {
            max.max(self.config.suggested_max)
        } else {
            self.config.suggested_max
        };
        [lower, upper]
    }

    /// Destroy this chart.
    pub fn release(self) {
        trace!(chart = self.id, "chart released");
    }
}

impl Drop for HeartRateChart {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Owner of the single chart slot.
#[derive(Debug, Default)]
pub struct ChartBuilder {
    config: ChartConfig,
    current: Option<HeartRateChart>,
    next_id: u64,
    live: Arc<AtomicUsize>,
}

impl ChartBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Release the current chart, then chart `history[0]`'s samples.
    ///
    /// An empty history leaves the slot empty.
    pub fn render_heart_rate_chart(&mut self, history: &[WorkoutRecord]) {
        self.release();

        let Some(latest) = history.first() else {
            return;
        };

        self.next_id += 1;
        self.live.fetch_add(1, Ordering::SeqCst);
        let chart = HeartRateChart {
            id: self.next_id,
            workout_name: latest.workout_name.clone(),
            labels: (0..latest.heart_rate_data.len()).collect(),
            values: latest.heart_rate_data.iter().map(|s| s.value).collect(),
            config: self.config,
            live: Arc::clone(&self.live),
        };
        trace!(chart = chart.id, samples = chart.values.len(), "chart created");
        self.current = Some(chart);
    }

    /// Release the current chart, if any.
    pub fn release(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.release();
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&HeartRateChart> {
        self.current.as_ref()
    }

    /// Number of chart instances created by this builder and not yet dropped.
    #[must_use]
    pub fn live_instances(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

/// Draw the chart, or a placeholder when there is none.
pub fn draw_heart_rate_chart(
    frame: &mut Frame,
    area: Rect,
    chart: Option<&HeartRateChart>,
    theme: &ColorTheme,
) {
    let Some(chart) = chart else {
        let placeholder = Paragraph::new(Line::styled("No workouts recorded.", theme.muted_style()))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Heart Rate ")
                    .border_style(theme.border_style()),
            );
        frame.render_widget(placeholder, area);
        return;
    };

    let points = chart.points();
    let datasets = vec![Dataset::default()
        .name("Heart rate")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme.accent_style())
        .data(&points)];

    let [x_min, x_max] = chart.x_bounds();
    let [y_min, y_max] = chart.y_bounds();
    let axis_style = theme.muted_style();

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" Heart Rate: {} ", chart.workout_name()),
                    theme.header_style(),
                ))
                .border_style(theme.border_style()),
        )
        .x_axis(
            Axis::default()
                .bounds([x_min, x_max])
                .labels(axis_labels(x_min, x_max))
                .style(axis_style),
        )
        .y_axis(
            Axis::default()
                .title("BPM")
                .bounds([y_min, y_max])
                .labels(axis_labels(y_min, y_max))
                .style(Style::default().fg(theme.muted)),
        );

    frame.render_widget(widget, chart.config().plot_area(area));
}

fn axis_labels(min: f64, max: f64) -> Vec<Span<'static>> {
    let mid = (min + max) / 2.0;
    vec![
        Span::raw(format!("{min:.0}")),
        Span::raw(format!("{mid:.0}")),
        Span::raw(format!("{max:.0}")),
    ]
}
