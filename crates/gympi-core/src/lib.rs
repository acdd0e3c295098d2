//! # gympi-core
//!
//! Data model and pure logic for the GymPi dashboard: device summaries,
//! workout history, heart-rate aggregation, and the fetch error taxonomy.

pub mod api;
pub mod constants;
pub mod error;
pub mod metrics;
pub mod model;
pub mod reporter;

// Re-exports
pub use api::DashboardApi;
pub use constants::{exit_codes, DEFAULT_POLL_INTERVAL, SUGGESTED_MAX_BPM};
pub use error::{DashboardError, ErrorKind};
pub use metrics::{average_heart_rate, summarize_history};
pub use model::{DeviceStats, DeviceSummary, HeartRateSample, Timestamp, WorkoutRecord};
pub use reporter::{ErrorReporter, FetchContext, NullErrorReporter, TracingErrorReporter};
