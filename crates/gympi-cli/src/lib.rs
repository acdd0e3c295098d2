//! # gympi-cli
//!
//! One-shot text output of the device grid and workout history, a fetch
//! spinner, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::TextPresenter;
