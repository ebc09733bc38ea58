//! Column partitioning for the checkbox group
//!
//! The aggregate is prepended to the caller's options and every entry is
//! assigned a column by `index % columns`. The aggregate therefore always sits
//! at the top of column 0.

use serde::Deserialize;

use super::check_option::CheckOption;

/// How entries are arranged once the per-column assignment is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnOrder {
    /// Column `k` holds global indices `k, k + columns, k + 2 * columns, ...`
    #[default]
    RoundRobin,
    /// Same column sizes as `RoundRobin`, filled with contiguous runs so that
    /// entries read top to bottom, then left to right
    TopToBottom,
}

/// Options (plus the aggregate) split into display columns
///
/// `columns[i]` is the i-th column top to bottom. Trailing columns are empty
/// when there are more columns than entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnLayout {
    pub columns: Vec<Vec<CheckOption>>,
}

impl ColumnLayout {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of entries across all columns, aggregate included
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&CheckOption> {
        self.columns.get(column).and_then(|entries| entries.get(row))
    }

    /// Rows in the given column, 0 for a column that doesn't exist
    pub fn column_len(&self, column: usize) -> usize {
        self.columns.get(column).map_or(0, Vec::len)
    }

    /// Entries in column order, then row order
    pub fn iter(&self) -> impl Iterator<Item = &CheckOption> {
        self.columns.iter().flatten()
    }
}

/// Partition options into `columns` round-robin columns
pub fn partition(options: &[CheckOption], columns: usize) -> ColumnLayout {
    partition_with(options, columns, ColumnOrder::RoundRobin)
}

/// Partition options into `columns` columns using the given order
///
/// `columns` is expected in `1..=9`; 0 is treated as 1.
pub fn partition_with(
    options: &[CheckOption],
    columns: usize,
    order: ColumnOrder,
) -> ColumnLayout {
    let columns = columns.max(1);
    let full: Vec<CheckOption> = std::iter::once(CheckOption::select_all())
        .chain(options.iter().cloned())
        .collect();

    let mut slots: Vec<Vec<CheckOption>> = vec![Vec::new(); columns];
    match order {
        ColumnOrder::RoundRobin => {
            for (index, option) in full.into_iter().enumerate() {
                slots[index % columns].push(option);
            }
        }
        ColumnOrder::TopToBottom => {
            let total = full.len();
            let mut entries = full.into_iter();
            for (column, slot) in slots.iter_mut().enumerate() {
                // Size of column k under the modulo assignment
                let size = total / columns + usize::from(column < total % columns);
                slot.extend(entries.by_ref().take(size));
            }
        }
    }

    ColumnLayout { columns: slots }
}

#[cfg(test)]
#[path = "column_layout_tests.rs"]
mod column_layout_tests;
