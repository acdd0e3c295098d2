//! Remote service contract consumed by the fetch flows.

use async_trait::async_trait;

use crate::error::DashboardError;
use crate::model::{DeviceSummary, WorkoutRecord};

/// Source of device summaries and workout history.
///
/// Implementations perform one request per call with no retry; the polling
/// schedule is the retry policy.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Fetch the current device summary list.
    async fn fetch_devices(&self) -> Result<Vec<DeviceSummary>, DashboardError>;

    /// Fetch one device's workout history, newest first.
    async fn fetch_history(&self, device_id: &str) -> Result<Vec<WorkoutRecord>, DashboardError>;
}
