use std::sync::mpsc::{self, Receiver};

use crate::config::{Config, OutputFormat};
use crate::multi_check::{CheckOption, CheckRegions, ColumnOrder, MultiCheckState};

/// Resolved startup settings (config file overridden by CLI flags)
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub label: Option<String>,
    pub values: Option<Vec<String>>,
    pub columns: usize,
    pub order: ColumnOrder,
    pub output_format: OutputFormat,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            label: config.display.label.clone(),
            values: None,
            columns: config.layout.columns,
            order: config.layout.order,
            output_format: config.output.format,
        }
    }
}

pub struct App {
    pub multi_check: MultiCheckState,
    pub regions: CheckRegions,
    pub output_format: OutputFormat,
    pub confirmed: bool,
    pub should_quit: bool,
    pub warning: Option<String>,
    pub selected_count: usize,
    changes: Receiver<Vec<CheckOption>>,
}

impl App {
    pub fn new(options: Vec<CheckOption>, settings: Settings) -> Self {
        let (change_tx, change_rx) = mpsc::channel();

        let mut multi_check = MultiCheckState::new(options)
            .with_columns(settings.columns)
            .with_column_order(settings.order)
            .with_on_change(move |selected| {
                // Receiver only goes away together with the app
                let _ = change_tx.send(selected.to_vec());
            });
        if let Some(label) = settings.label {
            multi_check = multi_check.with_label(label);
        }
        if let Some(values) = settings.values {
            multi_check = multi_check.with_values(values);
        }

        let selected_count = multi_check.selected_options().len();

        Self {
            multi_check,
            regions: CheckRegions::new(),
            output_format: settings.output_format,
            confirmed: false,
            should_quit: false,
            warning: None,
            selected_count,
            changes: change_rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn show_warning(&mut self, warning: &str) {
        self.warning = Some(warning.to_string());
    }

    /// Drain selections reported by the change observer
    pub fn poll_changes(&mut self) {
        for selected in self.changes.try_iter() {
            #[cfg(debug_assertions)]
            log::debug!(
                "Selection changed: [{}]",
                selected
                    .iter()
                    .map(|o| o.value.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            self.selected_count = selected.len();
        }
    }

    /// Text to print after the terminal is restored, `None` unless confirmed
    pub fn output(&self) -> serde_json::Result<Option<String>> {
        if !self.confirmed {
            return Ok(None);
        }

        let selected = self.multi_check.selected_options();
        let text = match self.output_format {
            OutputFormat::Json => serde_json::to_string_pretty(&selected)?,
            OutputFormat::Values => selected
                .iter()
                .map(|o| o.value.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        };
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{mock_options, test_app};

    #[test]
    fn test_app_initialization() {
        let app = test_app();

        assert!(!app.should_quit());
        assert!(!app.confirmed);
        assert_eq!(app.selected_count, 0);
        assert_eq!(app.multi_check.label(), "MultiCheck");
        assert_eq!(app.multi_check.columns(), 1);
    }

    #[test]
    fn test_settings_applied() {
        let settings = Settings {
            label: Some("Fruits".to_string()),
            values: Some(vec!["mockValue0".to_string(), "mockValue2".to_string()]),
            columns: 2,
            order: ColumnOrder::TopToBottom,
            output_format: OutputFormat::Values,
        };
        let app = App::new(mock_options(), settings);

        assert_eq!(app.multi_check.label(), "Fruits");
        assert_eq!(app.multi_check.columns(), 2);
        assert_eq!(app.multi_check.column_order(), ColumnOrder::TopToBottom);
        assert_eq!(app.selected_count, 2);
        assert_eq!(app.output_format, OutputFormat::Values);
    }

    #[test]
    fn test_settings_from_config() {
        let config: Config =
            toml::from_str("[display]\nlabel = \"Fruits\"\n[layout]\ncolumns = 4\n").unwrap();
        let settings = Settings::from_config(&config);

        assert_eq!(settings.label.as_deref(), Some("Fruits"));
        assert_eq!(settings.columns, 4);
        assert!(settings.values.is_none());
    }

    #[test]
    fn test_poll_changes_tracks_last_selection() {
        let mut app = test_app();
        app.multi_check.click("mockValue0");
        app.multi_check.click("mockValue1");
        assert_eq!(app.selected_count, 0);

        app.poll_changes();
        assert_eq!(app.selected_count, 2);
    }

    #[test]
    fn test_output_none_unless_confirmed() {
        let mut app = test_app();
        app.multi_check.click("mockValue0");

        assert_eq!(app.output().unwrap(), None);
    }

    #[test]
    fn test_output_json() {
        let mut app = test_app();
        app.multi_check.click("mockValue1");
        app.confirmed = true;

        let output = app.output().unwrap().unwrap();
        let parsed: Vec<CheckOption> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, vec![CheckOption::new("mockLabel1", "mockValue1")]);
    }

    #[test]
    fn test_output_values() {
        let mut app = test_app();
        app.output_format = OutputFormat::Values;
        app.multi_check.click("000");
        app.confirmed = true;

        assert_eq!(
            app.output().unwrap().as_deref(),
            Some("mockValue0\nmockValue1\nmockValue2")
        );
    }
}
