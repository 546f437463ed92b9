use crate::file_processor::FileMetadata;
use crate::lexical::LexicalMetrics;
use std::path::PathBuf;
use std::time::Duration;

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub file_metadata: FileMetadata,
    pub lexical_metrics: LexicalMetrics,
    pub identifier_count: usize,
    pub lines_written: usize,
    pub output_path: PathBuf,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn token_count(&self) -> usize {
        self.lexical_metrics.token_count()
    }

    pub fn error_token_count(&self) -> usize {
        self.lexical_metrics.error_tokens
    }

    /// One-line report for the terminal
    pub fn summary(&self) -> String {
        format!(
            "{} lines, {} tokens ({} errors), {} identifiers -> {}",
            self.lines_written,
            self.token_count(),
            self.error_token_count(),
            self.identifier_count,
            self.output_path.display()
        )
    }

    pub fn log_success(&self, file_path: &str) {
        let seconds = self.processing_duration.as_secs_f64();
        let tokens_per_sec = if seconds > 0.0 {
            self.token_count() as f64 / seconds
        } else {
            0.0
        };

        log_success!(
            crate::logging::codes::success::OUTPUT_WRITTEN,
            "Token stream written",
            "file" => file_path,
            "output" => self.output_path.display(),
            "lines" => self.lines_written,
            "tokens" => self.token_count(),
            "error_tokens" => self.error_token_count(),
            "identifiers" => self.identifier_count,
            "recoveries" => self.lexical_metrics.accepted_recoveries,
            "duration_ms" => format!("{:.2}", seconds * 1000.0),
            "tokens_per_sec" => format!("{:.0}", tokens_per_sec)
        );
    }
}
