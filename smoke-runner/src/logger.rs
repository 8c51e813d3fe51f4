use crate::error::{Result as RunnerErrorResult, RunnerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::debug;
use smoke_config::LogLevel;

/// Initialize the fern logger.
///
/// A one-shot diagnostic run needs exactly one sink: stdout by default, so
/// the lifecycle log reads inline with the results document, or a file when
/// the operator wants to keep a transcript. Colors only apply on the stdout
/// path.
pub fn initialize(
    level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> RunnerErrorResult<()> {
    let colors = ColoredLevelConfig::new()
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let use_colors = colored && log_file.is_none();

    let dispatch = Dispatch::new().level(level.0).format(move |out, message, record| {
        let timestamp = humantime::format_rfc3339_seconds(SystemTime::now());
        if use_colors {
            out.finish(format_args!(
                "[{} {}] {}",
                timestamp,
                colors.color(record.level()),
                message
            ))
        } else {
            out.finish(format_args!("[{} {}] {}", timestamp, record.level(), message))
        }
    });

    let dispatch = match log_file {
        Some(ref path) => {
            let file = fern::log_file(path).map_err(|e| RunnerError::Logger {
                message: format!("cannot open log file {}: {}", path.display(), e),
            })?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| RunnerError::Logger {
        message: format!("logger already initialized: {}", e),
    })?;

    // reqwest and hyper speak tracing; route them into the same sink
    tracing_log::LogTracer::init().ok();

    let sink = log_file
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    debug!("logger ready: level={:?}, sink={}", level.0, sink);

    Ok(())
}
