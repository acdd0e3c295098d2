//! Constants for polling, endpoints, and chart configuration.

use std::time::Duration;

/// Interval between two device-list refreshes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Default base URL of the telemetry service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the device summary listing.
pub const DEVICES_PATH: &str = "/api/devices";

/// Path prefix of the per-device workout history. The device id is appended
/// as one path segment.
pub const HISTORY_PATH_PREFIX: &str = "/workout/history";

/// Suggested upper bound of the heart-rate axis, in BPM.
pub const SUGGESTED_MAX_BPM: f64 = 200.0;

/// Unit suffix shown next to every heart-rate figure.
pub const BPM_SUFFIX: &str = "BPM";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Network or transport failure.
    pub const ERROR_TRANSPORT: i32 = 2;
    /// Service answered with a non-success status.
    pub const ERROR_STATUS: i32 = 3;
    /// Malformed payload or invalid configuration.
    pub const ERROR_INVALID: i32 = 4;
}
