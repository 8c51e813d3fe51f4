use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_TOKEN: &str = "test-token";

// Listen window constraints (seconds)
pub const MIN_LISTEN_WINDOW_SECS: u64 = 1;
pub const MAX_LISTEN_WINDOW_SECS: u64 = 300;
pub const DEFAULT_LISTEN_WINDOW_SECS: u64 = 5;

// Connect timeout constraints (seconds)
pub const MIN_CONNECT_TIMEOUT_SECS: u64 = 1;
pub const MAX_CONNECT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

// Close grace constraints (seconds)
pub const MIN_CLOSE_GRACE_SECS: u64 = 1;
pub const MAX_CLOSE_GRACE_SECS: u64 = 60;
pub const DEFAULT_CLOSE_GRACE_SECS: u64 = 1;

/// Settings for the websocket push-channel probe.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RealtimeProbeConfig {
    /// Token sent in the first auth frame
    pub token: String,
    /// How long to observe inbound frames before requesting close, in
    /// seconds, measured from connection open
    pub listen_window_secs: u64,
    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
    /// How long to wait for the close acknowledgment in seconds
    pub close_grace_secs: u64,
}

impl Default for RealtimeProbeConfig {
    fn default() -> Self {
        Self {
            token: DEFAULT_TOKEN.to_string(),
            listen_window_secs: DEFAULT_LISTEN_WINDOW_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            close_grace_secs: DEFAULT_CLOSE_GRACE_SECS,
        }
    }
}

impl RealtimeProbeConfig {
    /// Validate all fields are within acceptable ranges.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token.is_empty() {
            return Err(ConfigError::realtime("realtime.token must not be empty"));
        }

        if self.listen_window_secs < MIN_LISTEN_WINDOW_SECS
            || self.listen_window_secs > MAX_LISTEN_WINDOW_SECS
        {
            return Err(ConfigError::realtime(format!(
                "realtime.listen_window_secs must be {}-{}, got {}",
                MIN_LISTEN_WINDOW_SECS, MAX_LISTEN_WINDOW_SECS, self.listen_window_secs
            )));
        }

        if self.connect_timeout_secs < MIN_CONNECT_TIMEOUT_SECS
            || self.connect_timeout_secs > MAX_CONNECT_TIMEOUT_SECS
        {
            return Err(ConfigError::realtime(format!(
                "realtime.connect_timeout_secs must be {}-{}, got {}",
                MIN_CONNECT_TIMEOUT_SECS, MAX_CONNECT_TIMEOUT_SECS, self.connect_timeout_secs
            )));
        }

        if self.close_grace_secs < MIN_CLOSE_GRACE_SECS
            || self.close_grace_secs > MAX_CLOSE_GRACE_SECS
        {
            return Err(ConfigError::realtime(format!(
                "realtime.close_grace_secs must be {}-{}, got {}",
                MIN_CLOSE_GRACE_SECS, MAX_CLOSE_GRACE_SECS, self.close_grace_secs
            )));
        }

        Ok(())
    }
}
