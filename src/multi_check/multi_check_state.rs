//! Multi-check component state
//!
//! Holds the caller's props, the selection and the keyboard cursor. The
//! column layout is derived from the props on every call to `layout()`.

use std::fmt;

use super::check_option::{CheckOption, DEFAULT_LABEL, SELECT_ALL_VALUE};
use super::column_layout::{ColumnLayout, ColumnOrder, partition_with};
use super::selection::{SelectionState, reconcile};

/// Callback receiving the selected options after each user toggle
pub type ChangeObserver = Box<dyn FnMut(&[CheckOption])>;

/// Position of the keyboard cursor in the column layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckCursor {
    pub column: usize,
    pub row: usize,
}

pub struct MultiCheckState {
    label: Option<String>,
    options: Vec<CheckOption>,
    columns: usize,
    column_order: ColumnOrder,
    selection: SelectionState,
    on_change: Option<ChangeObserver>,
    cursor: CheckCursor,
}

impl fmt::Debug for MultiCheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiCheckState")
            .field("label", &self.label)
            .field("options", &self.options)
            .field("columns", &self.columns)
            .field("column_order", &self.column_order)
            .field("selection", &self.selection)
            .field("on_change", &self.on_change.is_some())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl MultiCheckState {
    /// Single column, default label, nothing selected, no observer
    pub fn new(options: Vec<CheckOption>) -> Self {
        Self {
            label: None,
            options,
            columns: 1,
            column_order: ColumnOrder::default(),
            selection: SelectionState::new(),
            on_change: None,
            cursor: CheckCursor::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Start with the given values selected
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = SelectionState::from_values(values);
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.set_columns(columns);
        self
    }

    pub fn with_column_order(mut self, order: ColumnOrder) -> Self {
        self.set_column_order(order);
        self
    }

    pub fn with_on_change<F>(mut self, on_change: F) -> Self
    where
        F: FnMut(&[CheckOption]) + 'static,
    {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL)
    }

    pub fn options(&self) -> &[CheckOption] {
        &self.options
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn column_order(&self) -> ColumnOrder {
        self.column_order
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn cursor(&self) -> CheckCursor {
        self.cursor
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
        self.clamp_cursor();
    }

    pub fn set_column_order(&mut self, order: ColumnOrder) {
        self.column_order = order;
        self.clamp_cursor();
    }

    pub fn layout(&self) -> ColumnLayout {
        partition_with(&self.options, self.columns, self.column_order)
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.selection.is_checked(value, &self.options)
    }

    pub fn is_all_checked(&self) -> bool {
        self.is_checked(SELECT_ALL_VALUE)
    }

    pub fn selected_options(&self) -> Vec<CheckOption> {
        self.selection.selected_options(&self.options)
    }

    /// Apply a toggle and notify the observer once
    pub fn toggle(&mut self, value: &str, now_checked: bool) -> Vec<CheckOption> {
        let result = reconcile(&self.selection, value, now_checked, &self.options);
        self.selection = result.selection;

        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&result.selected);
        }

        result.selected
    }

    /// Flip the checkbox for `value`, as a click on it would
    pub fn click(&mut self, value: &str) -> Vec<CheckOption> {
        let now_checked = !self.is_checked(value);
        self.toggle(value, now_checked)
    }

    pub fn focused_option(&self) -> Option<CheckOption> {
        self.layout()
            .get(self.cursor.column, self.cursor.row)
            .cloned()
    }

    /// Flip the checkbox under the cursor; `None` when the cursor is on nothing
    pub fn toggle_focused(&mut self) -> Option<Vec<CheckOption>> {
        let option = self.focused_option()?;
        Some(self.click(&option.value))
    }

    /// Move the cursor onto the checkbox holding `value`
    pub fn focus_value(&mut self, value: &str) {
        let layout = self.layout();
        for (column, entries) in layout.columns.iter().enumerate() {
            if let Some(row) = entries.iter().position(|o| o.value == value) {
                self.cursor = CheckCursor { column, row };
                return;
            }
        }
    }

    pub fn move_down(&mut self) {
        let len = self.layout().column_len(self.cursor.column);
        if self.cursor.row + 1 < len {
            self.cursor.row += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor.row = self.cursor.row.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let layout = self.layout();
        let next = self.cursor.column + 1;
        // Empty trailing columns can't hold the cursor
        if layout.column_len(next) > 0 {
            self.cursor.column = next;
            self.cursor.row = self.cursor.row.min(layout.column_len(next) - 1);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
            let len = self.layout().column_len(self.cursor.column);
            self.cursor.row = self.cursor.row.min(len.saturating_sub(1));
        }
    }

    fn clamp_cursor(&mut self) {
        let layout = self.layout();
        let last_filled = layout
            .columns
            .iter()
            .rposition(|entries| !entries.is_empty())
            .unwrap_or(0);
        self.cursor.column = self.cursor.column.min(last_filled);
        let len = layout.column_len(self.cursor.column);
        self.cursor.row = self.cursor.row.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "multi_check_state_tests.rs"]
mod multi_check_state_tests;
