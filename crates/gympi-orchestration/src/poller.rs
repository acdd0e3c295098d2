//! Periodic device-list refresh.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use gympi_core::api::DashboardApi;
use gympi_core::reporter::{ErrorReporter, FetchContext};

use crate::handle::{FlowHandle, PollerHandle};
use crate::interfaces::DashboardSink;

/// Smallest accepted refresh interval.
const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Run one refresh: fetch the device list and hand it to the sink.
///
/// On failure the error goes to `reporter` and the sink is not touched, so
/// the previously rendered grid stays on screen. Returns whether the sink
/// received a new list.
pub async fn refresh_devices(
    api: &dyn DashboardApi,
    sink: &dyn DashboardSink,
    reporter: &dyn ErrorReporter,
) -> bool {
    match api.fetch_devices().await {
        Ok(devices) => {
            debug!(count = devices.len(), "device list refreshed");
            sink.devices_loaded(devices);
            true
        }
        Err(err) => {
            reporter.report(&FetchContext::Devices, &err);
            false
        }
    }
}

/// Start the periodic refresh on the current tokio runtime.
///
/// The first refresh fires immediately, then one per `interval`. Every tick
/// runs its fetch as a separate task, so a fetch slower than the interval
/// overlaps with the next one. Nothing is deduplicated.
pub fn spawn_device_poller(
    api: Arc<dyn DashboardApi>,
    sink: Arc<dyn DashboardSink>,
    reporter: Arc<dyn ErrorReporter>,
    interval: Duration,
) -> PollerHandle {
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let period = interval.max(MIN_INTERVAL);

    let task = tokio::spawn(async move {
        info!(interval = ?period, "device poller started");
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                () = token.cancelled() => break,
                _ = ticker.tick() => {
                    let api = Arc::clone(&api);
                    let sink = Arc::clone(&sink);
                    let reporter = Arc::clone(&reporter);
                    let token = token.clone();
                    tokio::spawn(async move {
                        tokio::select! {
                            () = token.cancelled() => {}
                            _ = refresh_devices(api.as_ref(), sink.as_ref(), reporter.as_ref()) => {}
                        }
                    });
                }
            }
        }
        info!("device poller stopped");
    });

    FlowHandle::new(cancel, task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{device, FakeApi, RecordingReporter, RecordingSink};
    use gympi_core::error::DashboardError;

    fn unavailable() -> DashboardError {
        DashboardError::Status {
            url: "http://test/api/devices".into(),
            status: 503,
        }
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn refresh_success_reaches_sink() {
        let api = FakeApi::with_devices(vec![Ok(vec![device("D1", 130.0)])]);
        let sink = RecordingSink::default();
        let reporter = RecordingReporter::default();

        assert!(refresh_devices(&api, &sink, &reporter).await);
        assert_eq!(sink.device_lists().len(), 1);
        assert_eq!(sink.device_lists()[0][0].device_id, "D1");
        assert!(reporter.reports().is_empty());
    }

    #[tokio::test]
    async fn refresh_failure_is_reported_not_rendered() {
        let api = FakeApi::with_devices(vec![Err(unavailable())]);
        let sink = RecordingSink::default();
        let reporter = RecordingReporter::default();

        assert!(!refresh_devices(&api, &sink, &reporter).await);
        assert!(sink.device_lists().is_empty());
        let reports = reporter.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, FetchContext::Devices);
    }

    #[tokio::test(start_paused = true)]
    async fn poller_fires_immediately_then_every_interval() {
        let api = Arc::new(FakeApi::repeating_devices(vec![device("D1", 120.0)]));
        let sink = Arc::new(RecordingSink::default());
        let reporter = Arc::new(RecordingReporter::default());

        let handle = spawn_device_poller(
            api.clone(),
            sink.clone(),
            reporter.clone(),
            Duration::from_secs(30),
        );

        settle().await;
        assert_eq!(api.device_calls(), 1);

        tokio::time::sleep(Duration::from_secs(65)).await;
        settle().await;
        assert_eq!(api.device_calls(), 3);
        assert_eq!(sink.device_lists().len(), 3);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn failed_tick_keeps_polling() {
        let api = Arc::new(FakeApi::with_devices(vec![
            Err(unavailable()),
            Ok(vec![device("D2", 99.0)]),
        ]));
        let sink = Arc::new(RecordingSink::default());
        let reporter = Arc::new(RecordingReporter::default());

        let handle = spawn_device_poller(
            api.clone(),
            sink.clone(),
            reporter.clone(),
            Duration::from_secs(30),
        );

        tokio::time::sleep(Duration::from_secs(31)).await;
        settle().await;
        assert_eq!(reporter.reports().len(), 1);
        assert_eq!(sink.device_lists().len(), 1);
        assert_eq!(sink.device_lists()[0][0].device_id, "D2");

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn slow_fetches_overlap() {
        let api = Arc::new(
            FakeApi::repeating_devices(vec![device("D1", 120.0)])
                .with_delay(Duration::from_secs(45)),
        );
        let sink = Arc::new(RecordingSink::default());
        let reporter = Arc::new(RecordingReporter::default());

        let handle = spawn_device_poller(
            api.clone(),
            sink.clone(),
            reporter.clone(),
            Duration::from_secs(30),
        );

        tokio::time::sleep(Duration::from_secs(65)).await;
        settle().await;
        // Ticks at 0s, 30s and 60s all started; only the first has resolved.
        assert_eq!(api.device_calls(), 3);
        assert_eq!(sink.device_lists().len(), 1);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_the_timer() {
        let api = Arc::new(FakeApi::repeating_devices(Vec::new()));
        let sink = Arc::new(RecordingSink::default());
        let reporter = Arc::new(RecordingReporter::default());

        let handle = spawn_device_poller(
            api.clone(),
            sink.clone(),
            reporter.clone(),
            Duration::from_secs(30),
        );
        settle().await;
        handle.shutdown().await;

        let calls = api.device_calls();
        tokio::time::sleep(Duration::from_secs(120)).await;
        settle().await;
        assert_eq!(api.device_calls(), calls);
    }
}
