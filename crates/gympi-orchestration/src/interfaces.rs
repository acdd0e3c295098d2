//! Orchestration interfaces.

use gympi_core::model::{DeviceSummary, WorkoutRecord};

/// Receiver of successfully fetched payloads.
///
/// The sink owns rendering: it replaces the card grid on `devices_loaded`
/// and fills the detail surface on `history_loaded`. Failures never reach it.
pub trait DashboardSink: Send + Sync {
    /// A fresh device list replaced the previous one.
    fn devices_loaded(&self, devices: Vec<DeviceSummary>);

    /// A device's history arrived; the detail surface should be shown.
    fn history_loaded(&self, device_id: &str, history: Vec<WorkoutRecord>);
}

/// Sink that discards everything.
pub struct NullDashboardSink;

impl DashboardSink for NullDashboardSink {
    fn devices_loaded(&self, _devices: Vec<DeviceSummary>) {}
    fn history_loaded(&self, _device_id: &str, _history: Vec<WorkoutRecord>) {}
}
