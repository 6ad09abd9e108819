use crate::{DEFAULT_LOG_COLORED, LogLevel};

use serde::Deserialize;

/// Diagnostics go to stderr unless `file` is set; stdout is reserved for the report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub colored: bool,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}
