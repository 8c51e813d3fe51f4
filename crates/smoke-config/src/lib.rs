mod config;
mod error;
mod http_probe_config;
mod log_level;
mod logging_config;
mod realtime_probe_config;
mod runner_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use http_probe_config::HttpProbeConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use realtime_probe_config::RealtimeProbeConfig;
pub use runner_config::RunnerConfig;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_CONFIG_FILE: &str = "smoke.toml";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
