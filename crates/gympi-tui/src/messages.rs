//! TUI message types (Elm Messages).

use gympi_core::error::DashboardError;
use gympi_core::model::{DeviceSummary, WorkoutRecord};
use gympi_core::reporter::FetchContext;

use crate::keymap::KeyAction;

/// Messages that drive the dashboard update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// A device refresh succeeded.
    DevicesLoaded(Vec<DeviceSummary>),
    /// A detail fetch succeeded.
    HistoryLoaded {
        device_id: String,
        history: Vec<WorkoutRecord>,
    },
    /// A fetch failed; the view is left as it was.
    FetchFailed {
        context: FetchContext,
        error: DashboardError,
    },
    /// Free-form activity line.
    Log(String),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press forwarded from the event loop.
    KeyPress(KeyAction),
    /// The fetch side is gone; leave the event loop.
    Quit,
}
