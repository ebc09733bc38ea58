// Configuration module for multicheck
// This module handles loading and parsing configuration from ~/.config/multicheck/config.toml

mod types;

pub use types::{Config, MAX_COLUMNS, MIN_COLUMNS, OutputFormat};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/multicheck/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from the given path, falling back to defaults
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    let mut config = match toml::from_str::<Config>(&contents) {
        Ok(config) => config,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e.message())),
            };
        }
    };

    // Out of range column counts keep the rest of the config
    if !config.layout.columns_in_range() {
        let warning = format!(
            "Invalid config: layout.columns must be {}-{}, got {}",
            MIN_COLUMNS, MAX_COLUMNS, config.layout.columns
        );
        config.layout.columns = MIN_COLUMNS;
        return ConfigResult {
            config,
            warning: Some(warning),
        };
    }

    ConfigResult {
        config,
        warning: None,
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/multicheck/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("multicheck")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
