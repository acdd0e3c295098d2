//! # gympi-client
//!
//! HTTP access to the GymPi cloud API (`/api/devices`, `/workout/history/{id}`).

pub mod http;

pub use http::HttpDashboardApi;
