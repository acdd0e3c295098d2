//! Version information.

/// Crate version.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version string written to the log at startup.
#[must_use]
pub fn full_version() -> String {
    format!("gympi {}", version())
}
