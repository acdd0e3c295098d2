//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use gympi_core::constants::{DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL};
use gympi_core::error::DashboardError;

/// GymPi dashboard: live workout and heart-rate telemetry per device.
#[derive(Parser, Debug)]
#[command(name = "gympi", version, about)]
pub struct AppConfig {
    /// Base URL of the GymPi API.
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "GYMPI_URL")]
    pub url: String,

    /// Device refresh interval (e.g. "30s", "1m", "500ms") [default: 30s].
    #[arg(long, env = "GYMPI_INTERVAL")]
    pub interval: Option<String>,

    /// Per-request timeout; none by default.
    #[arg(long)]
    pub request_timeout: Option<String>,

    /// Print the device list once and exit.
    #[arg(long)]
    pub once: bool,

    /// With --once, print this device's workout history instead.
    #[arg(long, requires = "once")]
    pub device: Option<String>,

    /// Log file used while the dashboard is on screen.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Refresh interval.
    pub fn poll_interval(&self) -> Result<Duration, DashboardError> {
        let Some(interval) = self.interval.as_deref() else {
            return Ok(DEFAULT_POLL_INTERVAL);
        };
        parse_duration(interval)
            .filter(|d| !d.is_zero())
            .ok_or_else(|| DashboardError::Config(format!("invalid interval: {interval:?}")))
    }

    /// Optional request timeout.
    pub fn request_timeout(&self) -> Result<Option<Duration>, DashboardError> {
        self.request_timeout
            .as_deref()
            .map(|s| {
                parse_duration(s)
                    .ok_or_else(|| DashboardError::Config(format!("invalid request timeout: {s:?}")))
            })
            .transpose()
    }

    /// Whether logs go to stderr rather than a file.
    #[must_use]
    pub fn logs_to_stderr(&self) -> bool {
        self.once || self.completion.is_some()
    }

    /// Where TUI-mode logs are written.
    #[must_use]
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("gympi.log"))
    }
}

/// Parse a duration string like "5m", "1h", "30s", "250ms".
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
