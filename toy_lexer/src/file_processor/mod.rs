//! Reads toy language source files within the compile-time limits

mod processor;

use crate::config::compile_time::file_processing::{
    LARGE_FILE_THRESHOLD, MAX_FILE_SIZE, MAX_LINE_COUNT,
};
use crate::logging::codes::{self, file_processing};
use std::path::Path;

pub use processor::{FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError};

/// Load a source file with default settings
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
) -> Result<FileProcessingResult, FileProcessorError> {
    FileProcessor::new().process_file(file_path)
}

/// Check file processing codes at startup
pub fn init_file_processor_logging() -> Result<(), String> {
    let missing = [
        file_processing::FILE_NOT_FOUND,
        file_processing::FILE_TOO_LARGE,
        file_processing::PERMISSION_DENIED,
        file_processing::INVALID_ENCODING,
        file_processing::IO_ERROR,
        file_processing::INVALID_PATH,
        file_processing::TOO_MANY_LINES,
    ]
    .into_iter()
    .find(|code| codes::get_error_metadata(code.as_str()).is_none());

    if let Some(code) = missing {
        return Err(format!("File processor code {} is not registered", code));
    }

    log_debug!("File processor limits loaded",
        "max_file_size" => MAX_FILE_SIZE,
        "large_file_threshold" => LARGE_FILE_THRESHOLD,
        "max_line_count" => MAX_LINE_COUNT
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::runtime::FileProcessorPreferences;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_module_api() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("source.txt");
        fs::write(&file_path, "if _x >= 1\n").unwrap();

        let result = process_file(&file_path).unwrap();
        assert_eq!(result.metadata.line_count, 1);
    }

    #[test]
    fn test_limits() {
        assert!(LARGE_FILE_THRESHOLD <= MAX_FILE_SIZE);
        assert_eq!(FileProcessor::max_file_size(), MAX_FILE_SIZE);
        assert_eq!(FileProcessor::max_line_count(), MAX_LINE_COUNT);
        assert!(FileProcessor::new().enable_performance_logging);
        assert!(
            !FileProcessor::from_preferences(&FileProcessorPreferences {
                enable_performance_logging: false
            })
            .enable_performance_logging
        );
    }

    #[test]
    fn test_init_logging() {
        assert!(init_file_processor_logging().is_ok());
    }
}
