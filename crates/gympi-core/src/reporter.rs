//! Error reporting sink for suppressed fetch failures.

use std::fmt;

use crate::error::DashboardError;

/// Which flow a failure came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchContext {
    /// Periodic device-list refresh.
    Devices,
    /// On-demand history fetch for one device.
    History { device_id: String },
}

impl fmt::Display for FetchContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Devices => f.write_str("device refresh"),
            Self::History { device_id } => write!(f, "history for {device_id}"),
        }
    }
}

/// Receives failures that are caught at a flow boundary.
///
/// Reporting never fails and never reaches the end user directly.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, context: &FetchContext, error: &DashboardError);
}

/// Reporter that emits a structured `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: &FetchContext, error: &DashboardError) {
        tracing::warn!(
            context = %context,
            kind = ?error.kind(),
            error = %error,
            "fetch failed"
        );
    }
}

/// Reporter that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullErrorReporter;

impl ErrorReporter for NullErrorReporter {
    fn report(&self, _context: &FetchContext, _error: &DashboardError) {}
}
