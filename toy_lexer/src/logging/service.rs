//! Log sinks and the level-filtering service
//!
//! Every sink writes to stderr: stdout belongs to the interactive recovery
//! prompt.

use super::codes::Code;
use super::config;
use super::events::{LogEvent, LogLevel};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Level-filtering front for a single sink
pub struct LoggingService {
    sink: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(sink: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { sink, min_level }
    }

    /// Build a service from the runtime logging preferences
    pub fn with_config() -> Self {
        Self::new(Arc::new(configured_sinks()), config::get_min_log_level())
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.sink.log(&event);
        }
    }

    pub fn log_error(&self, code: Code, message: &str) {
        self.log_event(LogEvent::error(code, message));
    }

    pub fn log_warning(&self, code: Code, message: &str) {
        self.log_event(LogEvent::warning_with_code(code, message));
    }

    pub fn log_success(&self, code: Code, message: &str) {
        self.log_event(LogEvent::success(code, message));
    }

    pub fn log_info(&self, message: &str) {
        self.log_event(LogEvent::info(message));
    }

    pub fn log_debug(&self, message: &str) {
        self.log_event(LogEvent::debug(message));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleFormat {
    /// `[LEVEL] CODE - message`, with registry details under errors
    Plain,
    /// One JSON object per line
    Json,
}

/// Writes events to stderr in the chosen format
pub struct ConsoleLogger {
    min_level: LogLevel,
    format: ConsoleFormat,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            min_level,
            format: ConsoleFormat::Plain,
        }
    }

    pub fn json(min_level: LogLevel) -> Self {
        Self {
            min_level,
            format: ConsoleFormat::Json,
        }
    }

    pub fn format(&self) -> ConsoleFormat {
        self.format
    }

    fn render(&self, event: &LogEvent) -> String {
        match (self.format, event.level) {
            (ConsoleFormat::Json, _) => event.format_json().unwrap_or_else(|_| event.format()),
            (ConsoleFormat::Plain, LogLevel::Error) => event.format_detailed(),
            (ConsoleFormat::Plain, _) => event.format(),
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            eprintln!("{}", self.render(event));
        }
    }
}

/// Bounded in-memory sink, oldest events dropped first
pub struct MemoryLogger {
    events: Mutex<VecDeque<LogEvent>>,
    capacity: usize,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::with_capacity(config::get_error_buffer_size())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn contains(&self, level: LogLevel, code: Code) -> bool {
        self.lock().iter().any(|e| e.level == level && e.code == code)
    }

    pub fn with_code(&self, code: Code) -> Vec<LogEvent> {
        self.lock().iter().filter(|e| e.code == code).cloned().collect()
    }

    /// Events whose location falls on the given source line
    pub fn on_line(&self, line: usize) -> Vec<LogEvent> {
        self.lock()
            .iter()
            .filter(|e| e.location.is_some_and(|loc| loc.line == line))
            .cloned()
            .collect()
    }

    /// The `lexeme` context of every event logged under `code`, in order
    pub fn lexemes(&self, code: Code) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|e| e.code == code)
            .filter_map(|e| e.context.get("lexeme").cloned())
            .collect()
    }

    pub fn summary(&self) -> LogSummary {
        self.lock().iter().fold(LogSummary::default(), |mut summary, event| {
            summary.total += 1;
            match event.level {
                LogLevel::Error => {
                    summary.errors += 1;
                    if event.requires_halt() {
                        summary.halting += 1;
                    }
                }
                LogLevel::Warning => summary.warnings += 1,
                LogLevel::Info | LogLevel::Debug => {}
            }
            summary
        })
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        let mut events = self.lock();
        while events.len() >= self.capacity {
            events.pop_front();
        }
        events.push_back(event.clone());
    }
}

/// Counts over the events held by a [`MemoryLogger`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSummary {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub halting: usize,
}

impl LogSummary {
    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}

/// Fans each event out to every attached sink
pub struct MultiLogger {
    sinks: Vec<Arc<dyn Logger>>,
    min_level: LogLevel,
}

impl MultiLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            sinks: Vec::new(),
            min_level,
        }
    }

    pub fn with(mut self, sink: Arc<dyn Logger>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn with_memory(self) -> (Self, Arc<MemoryLogger>) {
        let memory = Arc::new(MemoryLogger::new());
        (self.with(memory.clone()), memory)
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Logger for MultiLogger {
    fn log(&self, event: &LogEvent) {
        if event.level > self.min_level {
            return;
        }
        for sink in &self.sinks {
            sink.log(event);
        }
    }
}

/// Sinks selected by the runtime preferences; none when console logging is off
fn configured_sinks() -> MultiLogger {
    let min_level = config::get_min_log_level();
    let multi = MultiLogger::new(min_level);

    if !config::use_console_logging() {
        return multi;
    }

    let console = if config::use_structured_logging() {
        ConsoleLogger::json(min_level)
    } else {
        ConsoleLogger::new(min_level)
    };
    multi.with(Arc::new(console))
}
