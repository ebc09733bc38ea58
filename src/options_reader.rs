use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::MultiCheckError;
use crate::multi_check::CheckOption;

/// Read checkbox options from stdin or a file
pub struct OptionsReader;

impl OptionsReader {
    /// Read an option list from a file path, or stdin when `path` is None
    ///
    /// # Returns
    /// * `Ok(Vec<CheckOption>)` - Options in input order
    /// * `Err(MultiCheckError)` - If the input is not JSON, is JSON of the wrong
    ///   shape, or an IO error occurs
    pub fn read_options(path: Option<&Path>) -> Result<Vec<CheckOption>, MultiCheckError> {
        let json_str = match path {
            Some(file_path) => {
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        Self::parse_options(&json_str)
    }

    /// Parse an option list from a JSON string
    pub fn parse_options(json_str: &str) -> Result<Vec<CheckOption>, MultiCheckError> {
        // Syntax first so malformed input and wrong shapes report differently
        let value = serde_json::from_str::<Value>(json_str)
            .map_err(|e| MultiCheckError::InvalidJson(e.to_string()))?;

        let options = serde_json::from_value::<Vec<CheckOption>>(value)
            .map_err(|e| MultiCheckError::InvalidOptions(e.to_string()))?;

        #[cfg(debug_assertions)]
        log::debug!("Parsed {} options", options.len());

        Ok(options)
    }
}
