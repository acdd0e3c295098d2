//! Bridge between the fetch flows and TUI messages.

use crossbeam_channel::Sender;

use gympi_core::error::DashboardError;
use gympi_core::model::{DeviceSummary, WorkoutRecord};
use gympi_core::reporter::{ErrorReporter, FetchContext, TracingErrorReporter};
use gympi_orchestration::interfaces::DashboardSink;

use crate::messages::TuiMessage;

/// Sink and reporter that forward everything to the TUI channel.
///
/// Sends never block; once the UI has gone away results are dropped.
#[derive(Debug, Clone)]
pub struct TuiBridge {
    tx: Sender<TuiMessage>,
}

impl TuiBridge {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }

    /// Append a line to the activity panel.
    pub fn log(&self, line: impl Into<String>) {
        let _ = self.tx.try_send(TuiMessage::Log(line.into()));
    }

    /// Ask the UI to leave its event loop.
    pub fn quit(&self) {
        let _ = self.tx.try_send(TuiMessage::Quit);
    }
}

impl DashboardSink for TuiBridge {
    fn devices_loaded(&self, devices: Vec<DeviceSummary>) {
        let _ = self.tx.try_send(TuiMessage::DevicesLoaded(devices));
    }

    fn history_loaded(&self, device_id: &str, history: Vec<WorkoutRecord>) {
        let _ = self.tx.try_send(TuiMessage::HistoryLoaded {
            device_id: device_id.to_string(),
            history,
        });
    }
}

impl ErrorReporter for TuiBridge {
    fn report(&self, context: &FetchContext, error: &DashboardError) {
        TracingErrorReporter.report(context, error);
        let _ = self.tx.try_send(TuiMessage::FetchFailed {
            context: context.clone(),
            error: error.clone(),
        });
    }
}
