//! Global logging for the lexer
//!
//! A single process-wide `LoggingService` set once at startup. Library code
//! logs through the macros, which silently do nothing when the global logger
//! was never initialized.

pub mod codes;
pub mod config;
pub mod events;
#[macro_use]
pub mod macros;
pub mod service;

use crate::utils::Location;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleFormat, ConsoleLogger, LogSummary, Logger, LoggingService, MemoryLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Codes that must have registry metadata before logging starts
const REQUIRED_CODES: [Code; 6] = [
    codes::system::INTERNAL_ERROR,
    codes::file_processing::FILE_NOT_FOUND,
    codes::output::OUTPUT_UNAVAILABLE,
    codes::lexical::CLASSIFICATION_MISS,
    codes::lexical::RECOVERY_LIMIT_EXCEEDED,
    codes::success::TOKENIZATION_COMPLETE,
];

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from the runtime preferences
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    for code in REQUIRED_CODES {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!("Missing metadata for code: {}", code));
        }
    }

    let logging_service = Arc::new(LoggingService::with_config());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// MACRO SUPPORT
// ============================================================================

/// Attach location and context to an event and hand it to the global logger
pub fn dispatch(mut event: LogEvent, location: Option<Location>, context: Vec<(&str, String)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    if let Some(location) = location {
        event = event.with_location(location);
    }

    for (key, value) in &context {
        event = event.with_context(key, value);
    }

    let clamped = config::clamp_message(&event.message);
    if clamped.len() < event.message.len() {
        event.message = clamped.to_string();
    }

    logger.log_event(event);
}

/// Error logging that falls back to stderr when logging is uninitialized
pub fn safe_log_error(code: Code, message: &str) {
    match try_get_global_logger() {
        Some(logger) => logger.log_error(code, message),
        None => eprintln!("[ERROR] {} - {}", code, message),
    }
}
