//! In-process fakes shared by the flow tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use gympi_core::api::DashboardApi;
use gympi_core::error::DashboardError;
use gympi_core::model::{DeviceStats, DeviceSummary, HeartRateSample, Timestamp, WorkoutRecord};
use gympi_core::reporter::{ErrorReporter, FetchContext};

use crate::interfaces::DashboardSink;

type DevicesResult = Result<Vec<DeviceSummary>, DashboardError>;
type HistoryResult = Result<Vec<WorkoutRecord>, DashboardError>;

pub(crate) fn device(id: &str, avg: f64) -> DeviceSummary {
    DeviceSummary {
        device_id: id.to_string(),
        stats: DeviceStats {
            total_workouts: 1,
            total_exercises: 4,
            average_heart_rate: avg,
        },
    }
}

pub(crate) fn workout(name: &str, values: &[f64]) -> WorkoutRecord {
    WorkoutRecord {
        id: None,
        timestamp: Timestamp::from_millis(1_700_000_000_000).unwrap(),
        workout_name: name.to_string(),
        completed_exercises: 3,
        heart_rate_data: values.iter().copied().map(HeartRateSample::new).collect(),
    }
}

/// Scripted API. Queued device results are served in order; once the queue
/// is empty the `repeat` list (if any) is served forever.
#[derive(Default)]
pub(crate) struct FakeApi {
    devices: Mutex<VecDeque<DevicesResult>>,
    repeat: Option<Vec<DeviceSummary>>,
    history: Mutex<HashMap<String, (Duration, HistoryResult)>>,
    delay: Duration,
    device_calls: AtomicUsize,
}

impl FakeApi {
    pub(crate) fn with_devices(results: Vec<DevicesResult>) -> Self {
        Self {
            devices: Mutex::new(results.into()),
            ..Self::default()
        }
    }

    pub(crate) fn repeating_devices(devices: Vec<DeviceSummary>) -> Self {
        Self {
            repeat: Some(devices),
            ..Self::default()
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn with_history(self, device_id: &str, delay: Duration, result: HistoryResult) -> Self {
        self.history
            .lock()
            .insert(device_id.to_string(), (delay, result));
        self
    }

    pub(crate) fn device_calls(&self) -> usize {
        self.device_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn fetch_devices(&self) -> DevicesResult {
        self.device_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.devices.lock().pop_front();
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match next {
            Some(result) => result,
            None => Ok(self.repeat.clone().unwrap_or_default()),
        }
    }

    async fn fetch_history(&self, device_id: &str) -> HistoryResult {
        let entry = self.history.lock().get(device_id).cloned();
        let Some((delay, result)) = entry else {
            return Err(DashboardError::Status {
                url: format!("http://test/workout/history/{device_id}"),
                status: 404,
            });
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result
    }
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    devices: Mutex<Vec<Vec<DeviceSummary>>>,
    histories: Mutex<Vec<(String, Vec<WorkoutRecord>)>>,
}

impl RecordingSink {
    pub(crate) fn device_lists(&self) -> Vec<Vec<DeviceSummary>> {
        self.devices.lock().clone()
    }

    pub(crate) fn histories(&self) -> Vec<(String, Vec<WorkoutRecord>)> {
        self.histories.lock().clone()
    }
}

impl DashboardSink for RecordingSink {
    fn devices_loaded(&self, devices: Vec<DeviceSummary>) {
        self.devices.lock().push(devices);
    }

    fn history_loaded(&self, device_id: &str, history: Vec<WorkoutRecord>) {
        self.histories.lock().push((device_id.to_string(), history));
    }
}

#[derive(Default)]
pub(crate) struct RecordingReporter {
    reports: Mutex<Vec<(FetchContext, DashboardError)>>,
}

impl RecordingReporter {
    pub(crate) fn reports(&self) -> Vec<(FetchContext, DashboardError)> {
        self.reports.lock().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, context: &FetchContext, error: &DashboardError) {
        self.reports.lock().push((context.clone(), error.clone()));
    }
}
