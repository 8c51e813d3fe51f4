use crate::LogLevel;

use serde::Deserialize;

/// Logging settings for the harness binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (off, error, warn, info, debug, trace)
    pub level: LogLevel,
    /// Enable colored output (ignored when logging to a file)
    pub colored: bool,
    /// Optional log file path. None = stdout
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            file: None,
        }
    }
}
