//! Multi-select checkbox group with a "Select All" aggregate
//!
//! The column partitioner (`column_layout`) and the selection reconciler
//! (`selection`) are pure and carry all of the widget's logic.
//! `MultiCheckState` owns the props and the selection, the render and
//! events modules adapt it to ratatui and crossterm.

mod check_option;
mod check_regions;
mod column_layout;
pub mod multi_check_events;
pub mod multi_check_render;
mod multi_check_state;
mod selection;

pub use check_option::{CheckOption, DEFAULT_LABEL, SELECT_ALL_LABEL, SELECT_ALL_VALUE};
pub use check_regions::CheckRegions;
pub use column_layout::{ColumnLayout, ColumnOrder, partition, partition_with};
pub use multi_check_render::render_multi_check;
pub use multi_check_state::{ChangeObserver, CheckCursor, MultiCheckState};
pub use selection::{Reconciled, SelectionState, reconcile};
