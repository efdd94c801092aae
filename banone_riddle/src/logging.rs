// Logger bootstrap for the `banone` binary.
//
// Log lines go to stderr so that riddles on stdout stay pipeable. Messages
// use the `event=<name> key=value` shape throughout the workspace.

use flexi_logger::{Logger, LoggerHandle, WriteMode};

use crate::error::{Result, RiddleError};

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Lower-case and validate a level name.
pub fn normalize_level(level: &str) -> Result<&'static str> {
    let wanted = level.trim().to_ascii_lowercase();
    LEVELS
        .into_iter()
        .find(|&l| l == wanted)
        .ok_or_else(|| RiddleError::Logging(format!("unsupported log level `{level}`")))
}

/// Start the logger. Keep the returned handle alive for the whole run.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let level = normalize_level(level)?;
    let handle = Logger::try_with_str(level)
        .map_err(|err| RiddleError::Logging(format!("invalid log level `{level}`: {err}")))?
        .log_to_stderr()
        .write_mode(WriteMode::Direct)
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| RiddleError::Logging(format!("failed to start logger: {err}")))?;

    log::debug!(
        "event=app_start version={} level={}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(handle)
}
