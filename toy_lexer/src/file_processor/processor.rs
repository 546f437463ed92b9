//! Source file loading and validation

use crate::config::compile_time::file_processing::{
    LARGE_FILE_THRESHOLD, MAX_FILE_SIZE, MAX_LINE_COUNT,
};
use crate::config::build_info;
use crate::config::runtime::FileProcessorPreferences;
use crate::logging::codes;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FileProcessorError {
    #[error("Source file not found: {path}")]
    FileNotFound { path: String },

    #[error("Not a readable source file path: {path}")]
    InvalidPath { path: String },

    #[error("Source is {size} bytes, limit is {max_size} (set by the '{profile}' build profile)")]
    FileTooLarge {
        size: u64,
        max_size: u64,
        profile: &'static str,
    },

    #[error("Permission denied reading {path}")]
    PermissionDenied { path: String },

    #[error("Source is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },

    #[error("Failed reading source: {message}")]
    IoError { message: String },

    #[error("Source has {lines} lines, limit is {max_lines} (set by the '{profile}' build profile)")]
    TooManyLines {
        lines: usize,
        max_lines: usize,
        profile: &'static str,
    },
}

impl FileProcessorError {
    pub fn error_code(&self) -> crate::logging::Code {
        use codes::file_processing as fp;

        match self {
            Self::FileNotFound { .. } => fp::FILE_NOT_FOUND,
            Self::InvalidPath { .. } => fp::INVALID_PATH,
            Self::FileTooLarge { .. } => fp::FILE_TOO_LARGE,
            Self::PermissionDenied { .. } => fp::PERMISSION_DENIED,
            Self::InvalidEncoding { .. } => fp::INVALID_ENCODING,
            Self::IoError { .. } => fp::IO_ERROR,
            Self::TooManyLines { .. } => fp::TOO_MANY_LINES,
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

    /// Classify an I/O failure against `path`
    fn from_io(error: &std::io::Error, path: &Path) -> Self {
        let path = path.display().to_string();
        match error.kind() {
            ErrorKind::NotFound => FileProcessorError::FileNotFound { path },
            ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied { path },
            ErrorKind::InvalidData => FileProcessorError::InvalidEncoding { path },
            _ => FileProcessorError::IoError {
                message: format!("{}: {}", path, error),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// Canonical path
    pub path: PathBuf,
    pub size: u64,
    pub extension: Option<String>,
    /// Lines as the driver will see them; a trailing newline adds none
    pub line_count: usize,
    pub modified: Option<SystemTime>,
}

impl FileMetadata {
    pub fn human_readable_size(&self) -> String {
        human_readable_bytes(self.size)
    }

    pub fn is_large_file(&self) -> bool {
        self.size > LARGE_FILE_THRESHOLD
    }
}

fn human_readable_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    let (scale, unit) = match bytes {
        b if b >= GB => (GB, "GB"),
        b if b >= MB => (MB, "MB"),
        b if b >= KB => (KB, "KB"),
        _ => return format!("{} B", bytes),
    };
    format!("{:.2} {}", bytes as f64 / scale as f64, unit)
}

/// A loaded source file ready for tokenizing
#[derive(Debug, Clone)]
pub struct FileProcessingResult {
    pub source: String,
    pub metadata: FileMetadata,
    pub processing_duration: Duration,
}

impl FileProcessingResult {
    pub fn char_count(&self) -> usize {
        self.source.chars().count()
    }

    /// Characters per millisecond
    pub fn processing_rate(&self) -> f64 {
        let duration_ms = self.processing_duration.as_secs_f64() * 1000.0;
        if duration_ms > 0.0 {
            self.char_count() as f64 / duration_ms
        } else {
            0.0
        }
    }
}

pub struct FileProcessor {
    pub enable_performance_logging: bool,
}

impl FileProcessor {
    pub fn new() -> Self {
        Self {
            enable_performance_logging: true,
        }
    }

    pub fn from_preferences(prefs: &FileProcessorPreferences) -> Self {
        Self {
            enable_performance_logging: prefs.enable_performance_logging,
        }
    }

    pub fn max_file_size() -> u64 {
        MAX_FILE_SIZE
    }

    pub fn max_line_count() -> usize {
        MAX_LINE_COUNT
    }

    /// Validate, read and measure a source file
    ///
    /// An empty file is valid and yields an empty source. Every failure is
    /// logged once, here, with the path it concerns.
    pub fn process_file<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<FileProcessingResult, FileProcessorError> {
        let start_time = Instant::now();
        let file_path = file_path.as_ref();
        let display = file_path.display().to_string();

        log_debug!("Loading source file", "file" => &display);

        let (source, metadata) = Self::load(file_path).map_err(|error| {
            log_error!(error.error_code(), error.to_string(), "file" => &display);
            error
        })?;

        let result = FileProcessingResult {
            source,
            metadata,
            processing_duration: start_time.elapsed(),
        };

        self.log_processing_success(&result, &display);
        Ok(result)
    }

    /// Path checks, then size, then decoding, then line count; each stage
    /// runs only if the one before it passed
    fn load(file_path: &Path) -> Result<(String, FileMetadata), FileProcessorError> {
        let path = Self::resolve(file_path)?;
        let stat = fs::metadata(&path).map_err(|e| FileProcessorError::from_io(&e, &path))?;

        if stat.len() > MAX_FILE_SIZE {
            return Err(FileProcessorError::FileTooLarge {
                size: stat.len(),
                max_size: MAX_FILE_SIZE,
                profile: build_info::profile(),
            });
        }

        let source =
            fs::read_to_string(&path).map_err(|e| FileProcessorError::from_io(&e, &path))?;

        let line_count = source.lines().count();
        if line_count > MAX_LINE_COUNT {
            return Err(FileProcessorError::TooManyLines {
                lines: line_count,
                max_lines: MAX_LINE_COUNT,
                profile: build_info::profile(),
            });
        }

        let metadata = FileMetadata {
            extension: path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(str::to_ascii_lowercase),
            size: stat.len(),
            line_count,
            modified: stat.modified().ok(),
            path,
        };
        Ok((source, metadata))
    }

    /// Canonical path of an existing regular file
    fn resolve(file_path: &Path) -> Result<PathBuf, FileProcessorError> {
        let path = || file_path.display().to_string();

        if file_path.as_os_str().is_empty() {
            return Err(FileProcessorError::InvalidPath { path: path() });
        }
        if !file_path.exists() {
            return Err(FileProcessorError::FileNotFound { path: path() });
        }
        if !file_path.is_file() {
            return Err(FileProcessorError::InvalidPath { path: path() });
        }

        file_path
            .canonicalize()
            .map_err(|e| FileProcessorError::from_io(&e, file_path))
    }

    fn log_processing_success(&self, result: &FileProcessingResult, file: &str) {
        let metadata = &result.metadata;
        let duration_ms = format!("{:.2}", result.processing_duration.as_secs_f64() * 1000.0);

        if !self.enable_performance_logging {
            log_success!(codes::success::FILE_PROCESSING_SUCCESS, "Source file loaded",
                "file" => file,
                "lines" => metadata.line_count
            );
            return;
        }

        log_success!(codes::success::FILE_PROCESSING_SUCCESS, "Source file loaded",
            "file" => file,
            "lines" => metadata.line_count,
            "size" => metadata.human_readable_size(),
            "large" => metadata.is_large_file(),
            "duration_ms" => duration_ms,
            "chars_per_ms" => format!("{:.2}", result.processing_rate())
        );
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn test_process_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("program.txt");
        fs::write(&file_path, "proc _main\nrun _main\n").unwrap();

        let result = FileProcessor::new().process_file(&file_path).unwrap();

        assert_eq!(result.source, "proc _main\nrun _main\n");
        assert_eq!(result.metadata.line_count, 2);
        assert_eq!(result.metadata.size, 21);
        assert_eq!(result.metadata.extension.as_deref(), Some("txt"));
        assert!(!result.metadata.is_large_file());
    }

    #[test]
    fn test_empty_file_is_valid() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        let result = FileProcessor::new().process_file(&file_path).unwrap();
        assert!(result.source.is_empty());
        assert_eq!(result.metadata.line_count, 0);
    }

    #[test]
    fn test_file_not_found() {
        let dir = tempdir().unwrap();
        let result = FileProcessor::new().process_file(dir.path().join("missing.txt"));

        assert_matches!(result, Err(FileProcessorError::FileNotFound { .. }));
    }

    #[test]
    fn test_invalid_paths() {
        let dir = tempdir().unwrap();

        assert_matches!(
            FileProcessor::new().process_file(""),
            Err(FileProcessorError::InvalidPath { .. })
        );
        assert_matches!(
            FileProcessor::new().process_file(dir.path()),
            Err(FileProcessorError::InvalidPath { .. })
        );
    }

    #[test]
    fn test_invalid_encoding() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary.txt");
        fs::write(&file_path, [0x70, 0xff, 0xfe, 0x0a]).unwrap();

        assert_matches!(
            FileProcessor::new().process_file(&file_path),
            Err(FileProcessorError::InvalidEncoding { .. })
        );
    }

    #[test]
    fn test_file_size_limit() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("huge.txt");
        let file = fs::File::create(&file_path).unwrap();
        file.set_len(MAX_FILE_SIZE + 1).unwrap();

        let result = FileProcessor::new().process_file(&file_path);
        assert_matches!(result, Err(FileProcessorError::FileTooLarge { size, .. }) if size == MAX_FILE_SIZE + 1);
    }

    #[test]
    fn test_too_many_lines() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("long.txt");
        fs::write(&file_path, "\n".repeat(MAX_LINE_COUNT + 1)).unwrap();

        let result = FileProcessor::new().process_file(&file_path);
        assert_matches!(result, Err(FileProcessorError::TooManyLines { lines, .. }) if lines == MAX_LINE_COUNT + 1);
    }

    #[test]
    fn test_limit_errors_name_build_profile() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("long.txt");
        fs::write(&file_path, "_x\n".repeat(MAX_LINE_COUNT + 1)).unwrap();

        let error = FileProcessor::new().process_file(&file_path).unwrap_err();
        assert_matches!(error, FileProcessorError::TooManyLines { profile, .. } if profile == build_info::profile());
        let message = error.to_string();
        assert!(message.contains(&MAX_LINE_COUNT.to_string()));
        assert!(message.contains(&format!("'{}' build profile", build_info::profile())));

        let error = FileProcessorError::FileTooLarge {
            size: 6_000_000,
            max_size: 5_242_880,
            profile: "production",
        };
        assert_eq!(
            error.to_string(),
            "Source is 6000000 bytes, limit is 5242880 (set by the 'production' build profile)"
        );
    }

    #[test]
    fn test_error_methods() {
        let error = FileProcessorError::TooManyLines {
            lines: 10,
            max_lines: 5,
            profile: "production",
        };

        assert_eq!(error.error_code().as_str(), "E013");
        assert!(error.requires_halt());
        assert!(!error.is_recoverable());
        assert_eq!(error.category(), "FileProcessing");
    }

    #[test]
    fn test_human_readable_size() {
        assert_eq!(human_readable_bytes(512), "512 B");
        assert_eq!(human_readable_bytes(1536), "1.50 KB");
        assert_eq!(human_readable_bytes(10 * 1024 * 1024), "10.00 MB");
    }

    #[test]
    fn test_from_preferences() {
        let prefs = FileProcessorPreferences {
            enable_performance_logging: false,
        };
        assert!(!FileProcessor::from_preferences(&prefs).enable_performance_logging);
        assert!(FileProcessor::new().enable_performance_logging);
    }
}
