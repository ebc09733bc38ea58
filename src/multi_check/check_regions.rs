//! Rendered regions of the checkbox group
//!
//! Recorded during each render pass so checkboxes and columns can be found by
//! label or by screen position afterwards.

use ratatui::layout::Rect;

/// Where the label, each column slot and each checkbox were drawn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckRegions {
    pub label: Option<Rect>,
    pub columns: Vec<Rect>,
    /// (checkbox label, one-line rect); only rows that fit are recorded
    pub checkboxes: Vec<(String, Rect)>,
}

fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

impl CheckRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self) -> Option<Rect> {
        self.label
    }

    /// Column slots in column order, empty columns included
    pub fn columns(&self) -> &[Rect] {
        &self.columns
    }

    /// Rect of the checkbox rendered for `label`
    pub fn checkbox(&self, label: &str) -> Option<Rect> {
        self.checkboxes
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, rect)| *rect)
    }

    /// Label of the checkbox under the given screen position
    pub fn checkbox_at(&self, x: u16, y: u16) -> Option<&str> {
        self.checkboxes
            .iter()
            .find(|(_, rect)| contains(rect, x, y))
            .map(|(label, _)| label.as_str())
    }

    /// Index of the column slot under the given screen position
    pub fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        self.columns.iter().position(|rect| contains(rect, x, y))
    }
}

#[cfg(test)]
#[path = "check_regions_tests.rs"]
mod check_regions_tests;
