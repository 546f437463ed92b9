use crate::file_processor::FileProcessorError;
use crate::logging::codes;

/// Failures that stop a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Cannot create output file {path}: {message}")]
    OutputUnavailable { path: String, message: String },

    #[error("Failed writing output: {message}")]
    OutputWrite { message: String },

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            PipelineError::FileProcessing(error) => error.error_code(),
            PipelineError::OutputUnavailable { .. } => codes::output::OUTPUT_UNAVAILABLE,
            PipelineError::OutputWrite { .. } => codes::output::OUTPUT_WRITE_FAILED,
            PipelineError::Pipeline { .. } => codes::system::INTERNAL_ERROR,
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }
}
