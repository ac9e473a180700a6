use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    /// `None` sends log lines to stderr.
    pub file: Option<String>,
    pub use_prefix: bool,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(file) = &self.file {
            if file.trim().is_empty() {
                return Err("log file path must not be empty".to_string());
            }
        }
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: Some("tictactoe.log".to_string()),
            use_prefix: false,
        }
    }
}
