//! Logging configuration
//!
//! Runtime preferences are installed once at startup; compile-time limits
//! from the build profile bound what they may request.

use super::events::LogLevel;
use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Install the preferences for the rest of the process
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    check_preferences(&preferences)?;

    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized".to_string())
}

/// Installed preferences, or the environment defaults when none were installed
fn preferences() -> &'static LoggingPreferences {
    static FALLBACK: OnceLock<LoggingPreferences> = OnceLock::new();

    RUNTIME_PREFERENCES
        .get()
        .unwrap_or_else(|| FALLBACK.get_or_init(LoggingPreferences::default))
}

fn check_preferences(preferences: &LoggingPreferences) -> Result<(), String> {
    if preferences.use_structured_logging && !preferences.enable_console_logging {
        return Err("Structured logging requires console logging to be enabled".to_string());
    }
    Ok(())
}

/// Requested level, raised to the security floor when stricter
pub fn get_min_log_level() -> LogLevel {
    preferences().min_log_level.max(get_security_log_level())
}

pub fn use_structured_logging() -> bool {
    preferences().use_structured_logging
}

pub fn use_console_logging() -> bool {
    preferences().enable_console_logging
}

/// Events at or above this level are never filtered out
pub fn get_security_log_level() -> LogLevel {
    match SECURITY_MIN_LOG_LEVEL {
        0 => LogLevel::Error,
        1 => LogLevel::Warning,
        _ => LogLevel::Info,
    }
}

pub fn get_error_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Truncate a message to `MAX_LOG_MESSAGE_LENGTH` bytes on a char boundary
pub fn clamp_message(message: &str) -> &str {
    if message.len() <= MAX_LOG_MESSAGE_LENGTH {
        return message;
    }
    let end = (0..=MAX_LOG_MESSAGE_LENGTH)
        .rev()
        .find(|&i| message.is_char_boundary(i))
        .unwrap_or(0);
    &message[..end]
}

pub fn validate_config() -> Result<(), String> {
    if !(100..=100_000).contains(&LOG_BUFFER_SIZE) {
        return Err(format!(
            "Log buffer size {} outside 100..=100000",
            LOG_BUFFER_SIZE
        ));
    }

    if MAX_LOG_MESSAGE_LENGTH == 0 {
        return Err("Max log message length must be positive".to_string());
    }

    match RUNTIME_PREFERENCES.get() {
        Some(preferences) => check_preferences(preferences),
        None => Ok(()),
    }
}
