//! Runtime preferences read from `TOYLEX_*` environment variables
//!
//! Unset or unparsable variables fall back to the defaults below. Hard limits
//! are compile-time constants and cannot be raised from here.

use crate::logging::LogLevel;
use crate::tokens::RenderStyle;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Environment variable names
pub mod env_vars {
    pub const ENABLE_PERFORMANCE_LOGGING: &str = "TOYLEX_ENABLE_PERFORMANCE_LOGGING";

    pub const LEXICAL_RENDER_STYLE: &str = "TOYLEX_LEXICAL_RENDER_STYLE";
    pub const LEXICAL_INTERACTIVE_RECOVERY: &str = "TOYLEX_LEXICAL_INTERACTIVE_RECOVERY";
    pub const LEXICAL_DETAILED_METRICS: &str = "TOYLEX_LEXICAL_DETAILED_METRICS";

    pub const LOGGING_USE_STRUCTURED: &str = "TOYLEX_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "TOYLEX_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "TOYLEX_LOGGING_MIN_LEVEL";
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn env_with<T>(name: &str, parse: impl FnOnce(&str) -> Option<T>, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| parse(value.trim()))
        .unwrap_or(default)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileProcessorPreferences {
    /// Log read throughput after each file
    pub enable_performance_logging: bool,
}

impl Default for FileProcessorPreferences {
    fn default() -> Self {
        Self {
            enable_performance_logging: env_or(env_vars::ENABLE_PERFORMANCE_LOGGING, true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// How keyword and symbol tokens are written to the output
    pub render_style: RenderStyle,

    /// Prompt for a replacement when a rejected lexeme has a close match
    pub interactive_recovery: bool,

    /// Log per-line token counts at debug level
    pub collect_detailed_metrics: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            render_style: env_with(
                env_vars::LEXICAL_RENDER_STYLE,
                parse_render_style,
                RenderStyle::Canonical,
            ),
            interactive_recovery: env_or(env_vars::LEXICAL_INTERACTIVE_RECOVERY, true),
            collect_detailed_metrics: env_or(env_vars::LEXICAL_DETAILED_METRICS, false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// JSON lines instead of plain text; needs console logging
    pub use_structured_logging: bool,

    /// Off by default so stderr stays quiet around the recovery prompt
    pub enable_console_logging: bool,

    /// Never stricter than the compile-time security floor
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_or(env_vars::LOGGING_USE_STRUCTURED, false),
            enable_console_logging: env_or(env_vars::LOGGING_ENABLE_CONSOLE, false),
            min_log_level: env_with(env_vars::LOGGING_MIN_LEVEL, LogLevel::parse, LogLevel::Info),
        }
    }
}

fn parse_render_style(style: &str) -> Option<RenderStyle> {
    match style.to_ascii_lowercase().as_str() {
        "canonical" | "bare" => Some(RenderStyle::Canonical),
        "echo" | "lexeme" => Some(RenderStyle::Echo),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub file_processor: FileProcessorPreferences,
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
}
