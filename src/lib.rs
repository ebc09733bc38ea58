//! multicheck library - multi-select checkbox group for the terminal
//!
//! The `multi_check` module holds the widget: a pure column partitioner, a
//! pure selection reconciler, and ratatui rendering on top of them. The
//! remaining modules back the `multicheck` binary.

pub mod app;
pub mod config;
pub mod error;
pub mod multi_check;
pub mod options_reader;

#[cfg(test)]
pub mod test_utils;
pub mod theme;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use multi_check::{CheckOption, ColumnLayout, MultiCheckState, SelectionState};
