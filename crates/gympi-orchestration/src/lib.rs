//! # gympi-orchestration
//!
//! The two fetch flows of the dashboard: the periodic device refresh and the
//! on-demand history fetch, plus the sink they hand results to.

pub mod details;
pub mod handle;
pub mod interfaces;
pub mod poller;

#[cfg(test)]
mod testing;

pub use details::{detail_channel, load_device_details, spawn_detail_listener, DetailRequester};
pub use handle::{DetailHandle, FlowHandle, PollerHandle};
pub use interfaces::{DashboardSink, NullDashboardSink};
pub use poller::{refresh_devices, spawn_device_poller};
