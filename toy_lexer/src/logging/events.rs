//! Log events emitted by the lexer

use super::codes::{self, Code};
use crate::utils::Location;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Accepts names in any case or the numeric rank
    pub fn parse(level: &str) -> Option<Self> {
        match level.to_ascii_lowercase().as_str() {
            "error" | "0" => Some(LogLevel::Error),
            "warning" | "warn" | "1" => Some(LogLevel::Warning),
            "info" | "2" => Some(LogLevel::Info),
            "debug" | "3" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

const UNCODED_INFO: Code = Code::new("I000");
const UNCODED_DEBUG: Code = Code::new("D000");

/// A single log record
///
/// Context lives in a `BTreeMap` so rendered keys come out sorted.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    pub location: Option<Location>,
    pub context: BTreeMap<String, String>,
}

impl LogEvent {
    fn at(level: LogLevel, code: Code, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            code,
            message: message.to_string(),
            location: None,
            context: BTreeMap::new(),
        }
    }

    pub fn error(code: Code, message: &str) -> Self {
        Self::at(LogLevel::Error, code, message)
    }

    pub fn warning_with_code(code: Code, message: &str) -> Self {
        Self::at(LogLevel::Warning, code, message)
    }

    /// Info-level event carrying a success code
    pub fn success(code: Code, message: &str) -> Self {
        Self::at(LogLevel::Info, code, message)
    }

    pub fn info(message: &str) -> Self {
        Self::at(LogLevel::Info, UNCODED_INFO, message)
    }

    pub fn debug(message: &str) -> Self {
        Self::at(LogLevel::Debug, UNCODED_DEBUG, message)
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.code.as_str())
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.code.as_str())
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.code.as_str()).as_str()
    }

    /// `[LEVEL] CODE - message at line:column`
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// [`format`](Self::format) followed by registry metadata and context,
    /// one indented item per line
    pub fn format_detailed(&self) -> String {
        let code = self.code.as_str();
        let mut out = self.to_string();

        // Writing into a String cannot fail
        let _ = write!(out, "\n  Category: {}\n  Severity: {}", self.category(), self.severity());
        if self.is_error() {
            let _ = write!(
                out,
                "\n  Recoverable: {}\n  Requires halt: {}",
                codes::is_recoverable(code),
                self.requires_halt()
            );
        }
        if let Some(meta) = codes::get_error_metadata(code) {
            let _ = write!(out, "\n  Description: {}", meta.description);
            let _ = write!(out, "\n  Recommended action: {}", meta.recommended_action);
        }
        if !self.context.is_empty() {
            out.push_str("\n  Context:");
            for (key, value) in &self.context {
                let _ = write!(out, "\n    {}: {}", key, value);
            }
        }

        out
    }

    /// Single-line JSON object for structured logging
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        let code = self.code.as_str();
        let mut json = serde_json::json!({
            "timestamp": self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            "level": self.level.as_str(),
            "code": code,
            "message": self.message,
            "category": self.category(),
            "severity": self.severity(),
        });

        if self.is_error() {
            json["recoverable"] = codes::is_recoverable(code).into();
            json["requires_halt"] = self.requires_halt().into();
        }
        if let Some(location) = self.location {
            json["line"] = location.line.into();
            json["column"] = location.column.into();
        }
        if !self.context.is_empty() {
            json["context"] = serde_json::to_value(&self.context)?;
        }

        serde_json::to_string(&json)
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} - {}", self.level.as_str(), self.code, self.message)?;
        if let Some(location) = self.location {
            write!(f, " at {}", location)?;
        }
        Ok(())
    }
}
