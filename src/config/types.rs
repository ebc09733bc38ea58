// Configuration type definitions

use serde::Deserialize;

use crate::multi_check::ColumnOrder;

/// Column count bounds accepted by the checkbox group
pub const MIN_COLUMNS: usize = 1;
pub const MAX_COLUMNS: usize = 9;

/// How the confirmed selection is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of `{label, value}` objects
    #[default]
    Json,
    /// One value per line
    Values,
}

/// Display configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub label: Option<String>,
}

/// Layout configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default)]
    pub order: ColumnOrder,
}

fn default_columns() -> usize {
    MIN_COLUMNS
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            columns: default_columns(),
            order: ColumnOrder::RoundRobin,
        }
    }
}

impl LayoutConfig {
    pub fn columns_in_range(&self) -> bool {
        (MIN_COLUMNS..=MAX_COLUMNS).contains(&self.columns)
    }
}

/// Output configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
