//! Teardown handle for background flows.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to a spawned flow. Dropping it cancels the flow.
pub struct FlowHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

/// Handle of the periodic device refresh.
pub type PollerHandle = FlowHandle;

/// Handle of the detail request listener.
pub type DetailHandle = FlowHandle;

impl FlowHandle {
    pub(crate) fn new(cancel: CancellationToken, task: JoinHandle<()>) -> Self {
        Self {
            cancel,
            task: Some(task),
        }
    }

    /// Request cancellation without waiting.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the flow's driving task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Cancel the flow and wait for its driving task to exit.
    ///
    /// In-flight fetches spawned by the flow observe the same token and are
    /// abandoned.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for FlowHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
