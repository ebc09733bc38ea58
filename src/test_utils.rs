//! Shared test utilities for multicheck
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::{App, Settings};
    use crate::multi_check::CheckOption;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Three options, labels and values numbered from 0
    pub fn mock_options() -> Vec<CheckOption> {
        vec![
            CheckOption::new("mockLabel0", "mockValue0"),
            CheckOption::new("mockLabel1", "mockValue1"),
            CheckOption::new("mockLabel2", "mockValue2"),
        ]
    }

    /// Helper to create App over `mock_options` with default settings
    pub fn test_app() -> App {
        App::new(
            mock_options(),
            Settings {
                columns: 1,
                ..Settings::default()
            },
        )
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
