//! Exit codes for top-level errors.

use gympi_core::constants::exit_codes;
use gympi_core::error::DashboardError;

/// Exit code for a fetch or configuration error.
#[must_use]
pub fn handle_error(err: &DashboardError) -> i32 {
    err.exit_code()
}

/// Exit code for any error reaching `main`.
///
/// Dashboard errors keep their own code; everything else is generic.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<DashboardError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
