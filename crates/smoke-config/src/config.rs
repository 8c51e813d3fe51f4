use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_CONFIG_FILE, HttpProbeConfig,
    LoggingConfig, RealtimeProbeConfig, RunnerConfig,
};

use std::path::Path;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the service under test; both probes derive their
    /// endpoints from it
    pub base_url: String,
    pub http: HttpProbeConfig,
    pub realtime: RealtimeProbeConfig,
    pub logging: LoggingConfig,
    pub runner: RunnerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http: HttpProbeConfig::default(),
            realtime: RealtimeProbeConfig::default(),
            logging: LoggingConfig::default(),
            runner: RunnerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Explicit path if given (must exist), else `smoke.toml` in the
    ///    working directory if present, else defaults
    /// 2. Apply SMOKE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load(path: Option<&Path>) -> ConfigErrorResult<Self> {
        let mut config = match path {
            Some(path) => Self::load_toml(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_toml(default_path)?
                } else {
                    Config::default()
                }
            }
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse a TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // The realtime probe maps http -> ws / https -> wss, so the base
        // URL must carry an explicit http(s) scheme
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::config(format!(
                "base_url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }

        self.http.validate()?;
        self.realtime.validate()?;

        Ok(())
    }

    /// Log configuration summary (NEVER logs the token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  target: {}", self.base_url);
        info!(
            "  http: user_id={}, page={}, size={}, timeout={}s",
            self.http.user_id, self.http.page, self.http.size, self.http.request_timeout_secs
        );
        info!(
            "  realtime: window={}s, connect_timeout={}s, grace={}s",
            self.realtime.listen_window_secs,
            self.realtime.connect_timeout_secs,
            self.realtime.close_grace_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  runner: {}",
            if self.runner.strict {
                "strict (probe failures fail the process)"
            } else {
                "lenient (always exit 0)"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        Self::apply_env_string("SMOKE_BASE_URL", &mut self.base_url);

        // HTTP probe
        Self::apply_env_parse("SMOKE_HTTP_USER_ID", &mut self.http.user_id);
        Self::apply_env_parse("SMOKE_HTTP_PAGE", &mut self.http.page);
        Self::apply_env_parse("SMOKE_HTTP_PAGE_SIZE", &mut self.http.size);
        Self::apply_env_parse(
            "SMOKE_HTTP_REQUEST_TIMEOUT_SECS",
            &mut self.http.request_timeout_secs,
        );

        // Realtime probe
        Self::apply_env_string("SMOKE_REALTIME_TOKEN", &mut self.realtime.token);
        Self::apply_env_parse(
            "SMOKE_REALTIME_LISTEN_WINDOW_SECS",
            &mut self.realtime.listen_window_secs,
        );
        Self::apply_env_parse(
            "SMOKE_REALTIME_CONNECT_TIMEOUT_SECS",
            &mut self.realtime.connect_timeout_secs,
        );
        Self::apply_env_parse(
            "SMOKE_REALTIME_CLOSE_GRACE_SECS",
            &mut self.realtime.close_grace_secs,
        );

        // Logging
        Self::apply_env_parse("SMOKE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SMOKE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SMOKE_LOG_FILE", &mut self.logging.file);

        // Runner
        Self::apply_env_bool("SMOKE_STRICT", &mut self.runner.strict);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
