//! Error and success codes for the lexer
//!
//! Every code the crate can log is registered here with its metadata, so
//! callers classify a failure by asking the registry instead of matching on
//! strings.

/// Code carried by every log event, error or success
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// What the run does after a code is logged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The run stops; `out.txt` is incomplete or absent
    Halt,
    /// Tokenization carries on with the next lexeme or line
    Recover,
}

#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: Code,
    pub category: &'static str,
    pub severity: Severity,
    pub disposition: Disposition,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn recoverable(&self) -> bool {
        self.disposition == Disposition::Recover
    }

    pub fn requires_halt(&self) -> bool {
        self.disposition == Disposition::Halt
    }
}

pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Input file errors
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
    pub const TOO_MANY_LINES: Code = Code::new("E013");
}

/// Output file errors
pub mod output {
    use super::Code;

    pub const OUTPUT_UNAVAILABLE: Code = Code::new("E015");
    pub const OUTPUT_WRITE_FAILED: Code = Code::new("E016");
}

/// Lexical analysis codes
pub mod lexical {
    use super::Code;

    pub const CLASSIFICATION_MISS: Code = Code::new("E020");
    pub const NO_SUGGESTION_AVAILABLE: Code = Code::new("E021");
    pub const NUMERIC_OVERFLOW: Code = Code::new("E022");
    pub const RECOVERY_LIMIT_EXCEEDED: Code = Code::new("E023");
    pub const RESPONDER_UNAVAILABLE: Code = Code::new("E024");
}

pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");

    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const RECOVERY_ACCEPTED: Code = Code::new("I021");
    pub const SUGGESTION_OFFERED: Code = Code::new("I022");

    pub const OUTPUT_WRITTEN: Code = Code::new("I030");
}

// ============================================================================
// REGISTRY
// ============================================================================

const fn halting(
    code: Code,
    category: &'static str,
    severity: Severity,
    description: &'static str,
    recommended_action: &'static str,
) -> ErrorMetadata {
    ErrorMetadata {
        code,
        category,
        severity,
        disposition: Disposition::Halt,
        description,
        recommended_action,
    }
}

const fn recovering(
    code: Code,
    category: &'static str,
    severity: Severity,
    description: &'static str,
    recommended_action: &'static str,
) -> ErrorMetadata {
    ErrorMetadata {
        code,
        category,
        severity,
        disposition: Disposition::Recover,
        description,
        recommended_action,
    }
}

use Severity::{Critical, High, Low, Medium};

#[rustfmt::skip]
static REGISTRY: &[ErrorMetadata] = &[
    halting(system::INTERNAL_ERROR, "System", Critical,
        "Critical internal error",
        "File a bug report with the input that triggered it"),
    halting(system::INITIALIZATION_FAILURE, "System", Critical,
        "Lexer initialization failure",
        "Check the TOYLEX_* environment variables"),
    halting(file_processing::FILE_NOT_FOUND, "FileProcessing", Medium,
        "Input file not found",
        "Check the path passed on the command line"),
    halting(file_processing::FILE_TOO_LARGE, "FileProcessing", Medium,
        "Input file exceeds the maximum size",
        "Split the source into smaller files"),
    halting(file_processing::PERMISSION_DENIED, "FileProcessing", High,
        "Permission denied reading input file",
        "Check file permissions"),
    halting(file_processing::INVALID_ENCODING, "FileProcessing", Medium,
        "Input file is not valid UTF-8",
        "Re-save the source as UTF-8"),
    halting(file_processing::IO_ERROR, "FileProcessing", High,
        "I/O error while reading input",
        "Check disk health and retry"),
    halting(file_processing::INVALID_PATH, "FileProcessing", Medium,
        "Input path is empty or not a regular file",
        "Pass the path of a single source file"),
    halting(file_processing::TOO_MANY_LINES, "FileProcessing", Medium,
        "Input file exceeds the maximum line count",
        "Split the source into smaller files"),
    halting(output::OUTPUT_UNAVAILABLE, "Output", High,
        "Output file could not be created",
        "Check write permissions on the working directory"),
    halting(output::OUTPUT_WRITE_FAILED, "Output", High,
        "Writing to the output file failed",
        "Check free disk space"),
    recovering(lexical::CLASSIFICATION_MISS, "Lexical", Low,
        "Lexeme matched no token class",
        "Fix the lexeme or accept the suggested replacement"),
    recovering(lexical::NO_SUGGESTION_AVAILABLE, "Lexical", Low,
        "Unrecognized lexeme has no close vocabulary match",
        "An error token is emitted in its place"),
    recovering(lexical::NUMERIC_OVERFLOW, "Lexical", Low,
        "Numeric literal is out of range and was clamped",
        "Use a smaller literal"),
    recovering(lexical::RECOVERY_LIMIT_EXCEEDED, "Lexical", Medium,
        "Too many replacement attempts for one lexeme",
        "An error token is emitted for the last replacement"),
    recovering(lexical::RESPONDER_UNAVAILABLE, "Lexical", Low,
        "No replacement could be read from the user",
        "An error token is emitted in its place"),
    recovering(success::SYSTEM_INITIALIZATION_COMPLETED, "System", Low,
        "Logging and configuration initialized",
        "Continue"),
    recovering(success::FILE_PROCESSING_SUCCESS, "FileProcessing", Low,
        "Input file validated",
        "Continue to tokenization"),
    recovering(success::TOKENIZATION_COMPLETE, "Lexical", Low,
        "All lines tokenized",
        "Continue"),
    recovering(success::RECOVERY_ACCEPTED, "Lexical", Low,
        "A replacement lexeme was accepted",
        "Continue"),
    recovering(success::SUGGESTION_OFFERED, "Lexical", Low,
        "A vocabulary suggestion was offered",
        "Await the user's replacement"),
    recovering(success::OUTPUT_WRITTEN, "Output", Low,
        "Token stream written to the output file",
        "Done"),
];

// ============================================================================
// LOOKUP
// ============================================================================

pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    REGISTRY.iter().find(|meta| meta.code.as_str() == code)
}

/// Every registered code, in registration order
pub fn registered_codes() -> impl Iterator<Item = Code> {
    REGISTRY.iter().map(|meta| meta.code)
}

/// Unregistered codes are treated as medium, recoverable and uncategorized
pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code).map_or(Severity::Medium, |meta| meta.severity)
}

pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code).map_or(true, ErrorMetadata::recoverable)
}

pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code).is_some_and(ErrorMetadata::requires_halt)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code).map_or("Unknown error", |meta| meta.description)
}

pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code).map_or("No specific action available", |meta| meta.recommended_action)
}

pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code).map_or("Unknown", |meta| meta.category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lexical_codes_are_recoverable() {
        for code in [
            lexical::CLASSIFICATION_MISS,
            lexical::NO_SUGGESTION_AVAILABLE,
            lexical::NUMERIC_OVERFLOW,
            lexical::RECOVERY_LIMIT_EXCEEDED,
        ] {
            assert!(is_recoverable(code.as_str()), "{} should be recoverable", code);
            assert!(!requires_halt(code.as_str()));
            assert_eq!(get_category(code.as_str()), "Lexical");
        }
    }

    #[test]
    fn test_file_errors_halt() {
        assert!(requires_halt(file_processing::FILE_NOT_FOUND.as_str()));
        assert!(requires_halt(output::OUTPUT_UNAVAILABLE.as_str()));
        assert_eq!(get_severity(system::INTERNAL_ERROR.as_str()), Severity::Critical);
    }

    #[test]
    fn test_codes_are_unique() {
        let mut seen = HashSet::new();
        for code in registered_codes() {
            assert!(seen.insert(code), "{} registered twice", code);
        }
        assert!(seen.contains(&success::OUTPUT_WRITTEN));
    }

    #[test]
    fn test_unknown_code_fallbacks() {
        assert!(get_error_metadata("X999").is_none());
        assert_eq!(get_description("X999"), "Unknown error");
        assert_eq!(get_category("X999"), "Unknown");
        assert_eq!(get_severity("X999"), Severity::Medium);
        assert!(is_recoverable("X999"));
        assert!(!requires_halt("X999"));
    }
}
