//! On-demand workout history fetch for the detail view.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use gympi_core::api::DashboardApi;
use gympi_core::reporter::{ErrorReporter, FetchContext};

use crate::handle::{DetailHandle, FlowHandle};
use crate::interfaces::DashboardSink;

/// Fetch one device's history and hand it to the sink.
///
/// On failure the error goes to `reporter` and the sink is not touched, so
/// the detail surface stays hidden. Returns whether the sink was called.
pub async fn load_device_details(
    api: &dyn DashboardApi,
    sink: &dyn DashboardSink,
    reporter: &dyn ErrorReporter,
    device_id: &str,
) -> bool {
    match api.fetch_history(device_id).await {
        Ok(history) => {
            debug!(device_id, workouts = history.len(), "history loaded");
            sink.history_loaded(device_id, history);
            true
        }
        Err(err) => {
            reporter.report(
                &FetchContext::History {
                    device_id: device_id.to_string(),
                },
                &err,
            );
            false
        }
    }
}

/// Sending half used by the UI to ask for a device's detail view.
#[derive(Debug, Clone)]
pub struct DetailRequester {
    tx: UnboundedSender<String>,
}

impl DetailRequester {
    /// Queue a detail request. Returns `false` once the listener is gone.
    pub fn request(&self, device_id: &str) -> bool {
        self.tx.send(device_id.to_string()).is_ok()
    }
}

/// Create the request channel between the UI and the detail listener.
#[must_use]
pub fn detail_channel() -> (DetailRequester, UnboundedReceiver<String>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DetailRequester { tx }, rx)
}

/// Start serving detail requests on the current tokio runtime.
///
/// Every request gets its own one-shot fetch task. Requests are neither
/// cancelled nor coalesced: when several overlap, whichever response
/// resolves last is what the sink shows.
pub fn spawn_detail_listener(
    api: Arc<dyn DashboardApi>,
    sink: Arc<dyn DashboardSink>,
    reporter: Arc<dyn ErrorReporter>,
    mut requests: UnboundedReceiver<String>,
) -> DetailHandle {
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    let task = tokio::spawn(async move {
        loop {
            let device_id = tokio::select! {
                () = token.cancelled() => break,
                next = requests.recv() => match next {
                    Some(id) => id,
                    None => break,
                },
            };

            let api = Arc::clone(&api);
            let sink = Arc::clone(&sink);
            let reporter = Arc::clone(&reporter);
            let token = token.clone();
            tokio::spawn(async move {
                tokio::select! {
                    () = token.cancelled() => {}
                    _ = load_device_details(api.as_ref(), sink.as_ref(), reporter.as_ref(), &device_id) => {}
                }
            });
        }
        info!("detail listener stopped");
    });

    FlowHandle::new(cancel, task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::testing::{workout, FakeApi, RecordingReporter, RecordingSink};

    #[tokio::test]
    async fn success_reaches_sink() {
        let api = FakeApi::default().with_history(
            "D1",
            Duration::ZERO,
            Ok(vec![workout("Leg Day", &[100.0, 120.0, 140.0])]),
        );
        let sink = RecordingSink::default();
        let reporter = RecordingReporter::default();

        assert!(load_device_details(&api, &sink, &reporter, "D1").await);
        let histories = sink.histories();
        assert_eq!(histories.len(), 1);
        assert_eq!(histories[0].0, "D1");
        assert_eq!(histories[0].1[0].workout_name, "Leg Day");
    }

    #[tokio::test]
    async fn failure_is_reported_with_device() {
        let api = FakeApi::default();
        let sink = RecordingSink::default();
        let reporter = RecordingReporter::default();

        assert!(!load_device_details(&api, &sink, &reporter, "missing").await);
        assert!(sink.histories().is_empty());
        let reports = reporter.reports();
        assert_eq!(
            reports[0].0,
            FetchContext::History {
                device_id: "missing".into()
            }
        );
    }

    #[tokio::test]
    async fn empty_history_is_not_an_error() {
        let api = FakeApi::default().with_history("D1", Duration::ZERO, Ok(Vec::new()));
        let sink = RecordingSink::default();
        let reporter = RecordingReporter::default();

        assert!(load_device_details(&api, &sink, &reporter, "D1").await);
        assert!(sink.histories()[0].1.is_empty());
        assert!(reporter.reports().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_requests_last_response_wins() {
        let api = Arc::new(
            FakeApi::default()
                .with_history("slow", Duration::from_secs(10), Ok(vec![workout("A", &[90.0])]))
                .with_history("fast", Duration::from_secs(1), Ok(vec![workout("B", &[95.0])])),
        );
        let sink = Arc::new(RecordingSink::default());
        let reporter = Arc::new(RecordingReporter::default());
        let (requester, rx) = detail_channel();

        let handle = spawn_detail_listener(api, sink.clone(), reporter, rx);
        assert!(requester.request("slow"));
        assert!(requester.request("fast"));

        tokio::time::sleep(Duration::from_secs(11)).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        let order: Vec<String> = sink.histories().into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec!["fast".to_string(), "slow".to_string()]);

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn listener_exits_when_requesters_dropped() {
        let (requester, rx) = detail_channel();
        let handle = spawn_detail_listener(
            Arc::new(FakeApi::default()),
            Arc::new(RecordingSink::default()),
            Arc::new(RecordingReporter::default()),
            rx,
        );
        drop(requester);
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn request_fails_after_listener_gone() {
        let (requester, rx) = detail_channel();
        drop(rx);
        assert!(!requester.request("D1"));
    }
}
