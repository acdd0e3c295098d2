//! # gympi-tui
//!
//! Terminal dashboard for GymPi devices using ratatui with Elm architecture.

pub mod bridge;
pub mod chart;
pub mod footer;
pub mod grid;
pub mod header;
pub mod history;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod styles;

pub use bridge::TuiBridge;
pub use chart::{ChartBuilder, ChartConfig, HeartRateChart};
pub use grid::{ActivationControl, CardGrid, DeviceCard};
pub use history::{HistoryRow, HistoryTable};
pub use logs::LogScrollState;
pub use messages::TuiMessage;
pub use model::{DashboardApp, DetailView};
