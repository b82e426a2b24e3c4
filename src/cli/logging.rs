//! Opt-in file logging
//!
//! The host treats any output as noise, so nothing is logged unless
//! `PEON_PING_DEBUG` is set. Logs then go to `peon-ping.log` in the engine
//! directory, never to the terminal.

use std::env;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Environment variable enabling debug logging
pub const DEBUG_ENV_VAR: &str = "PEON_PING_DEBUG";

/// Log file name inside the engine directory
pub const LOG_FILE_NAME: &str = "peon-ping.log";

/// True for `1`, `true` or `yes` (any case)
pub fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

/// Install the file subscriber when debug logging is requested.
///
/// # Returns
/// Whether logging was enabled
pub fn init(dir: &Path) -> bool {
    let enabled = env::var(DEBUG_ENV_VAR)
        .map(|value| is_truthy(&value))
        .unwrap_or(false);
    if !enabled {
        return false;
    }

    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
    {
        Ok(appender) => appender,
        Err(_) => return false,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .is_ok()
}
