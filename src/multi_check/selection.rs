//! Selection state and the toggle reconciler
//!
//! The selection is the single source of truth for every checkbox. Whether the
//! aggregate is checked is always recomputed from it, never tracked as a flag.

use super::check_option::{CheckOption, SELECT_ALL_VALUE};

/// Ordered set of selected option values
///
/// Insertion order is kept but carries no meaning; only membership does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    values: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the initial selection from caller-provided values
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::new();
        for value in values {
            state.insert(value.into());
        }
        state
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn insert(&mut self, value: String) {
        if !self.contains(&value) {
            self.values.push(value);
        }
    }

    pub fn remove(&mut self, value: &str) {
        self.values.retain(|v| v != value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Real options whose values are selected, in `options` order
    pub fn selected_options(&self, options: &[CheckOption]) -> Vec<CheckOption> {
        options
            .iter()
            .filter(|option| self.contains(&option.value))
            .cloned()
            .collect()
    }

    /// Whether the aggregate counts as checked
    ///
    /// Compares counts rather than sets, which relies on `options` holding no
    /// duplicate values. An empty option list is vacuously all-selected.
    pub fn is_all_selected(&self, options: &[CheckOption]) -> bool {
        self.selected_options(options).len() == options.len()
    }

    /// Checked state of any checkbox, the aggregate included
    pub fn is_checked(&self, value: &str, options: &[CheckOption]) -> bool {
        if value == SELECT_ALL_VALUE {
            self.is_all_selected(options)
        } else {
            self.contains(value)
        }
    }
}

/// Outcome of a single toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub selection: SelectionState,
    /// Selected real options in `options` order, never the aggregate
    pub selected: Vec<CheckOption>,
}

/// Compute the selection that results from toggling `toggled_value`
///
/// Toggling the aggregate selects every option or clears the selection.
/// Toggling a regular option adds or removes it. Afterwards the aggregate value
/// is present in the selection exactly when every option is selected.
pub fn reconcile(
    current: &SelectionState,
    toggled_value: &str,
    now_checked: bool,
    options: &[CheckOption],
) -> Reconciled {
    let mut selection = if toggled_value == SELECT_ALL_VALUE {
        if now_checked {
            SelectionState::from_values(options.iter().map(|o| o.value.clone()))
        } else {
            SelectionState::new()
        }
    } else {
        let mut next = current.clone();
        if now_checked {
            next.insert(toggled_value.to_string());
        } else {
            next.remove(toggled_value);
        }
        next
    };

    let selected = selection.selected_options(options);
    if selected.len() == options.len() {
        selection.insert(SELECT_ALL_VALUE.to_string());
    } else {
        selection.remove(SELECT_ALL_VALUE);
    }

    #[cfg(debug_assertions)]
    log::debug!(
        "Toggled {:?} -> {}: {}/{} selected",
        toggled_value,
        now_checked,
        selected.len(),
        options.len()
    );

    Reconciled {
        selection,
        selected,
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
