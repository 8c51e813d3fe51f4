use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Pagination defaults mirror the manual check this harness replaces
pub const DEFAULT_USER_ID: u64 = 1;
pub const DEFAULT_PAGE: u32 = 1;

// Page size constraints
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 500;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// Request timeout constraints (seconds)
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Settings for the one-shot messages API probe.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpProbeConfig {
    /// User whose message list is fetched
    pub user_id: u64,
    /// Page number (1-based)
    pub page: u32,
    /// Page size
    pub size: u32,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for HttpProbeConfig {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID,
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl HttpProbeConfig {
    /// Validate all fields are within acceptable ranges.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.page < 1 {
            return Err(ConfigError::http(format!(
                "http.page must be at least 1, got {}",
                self.page
            )));
        }

        if self.size < MIN_PAGE_SIZE || self.size > MAX_PAGE_SIZE {
            return Err(ConfigError::http(format!(
                "http.size must be {}-{}, got {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE, self.size
            )));
        }

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::http(format!(
                "http.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }
}
