//! Per-lexeme failures
//!
//! These are recorded as diagnostics and logged; the tokenizer never returns
//! them as `Err`. A failed lexeme becomes an error token and the line goes on.

use crate::logging::codes;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexerError {
    #[error("No token class accepts '{lexeme}' at line {line}")]
    ClassificationMiss { lexeme: String, line: usize },

    #[error("No vocabulary entry is close to '{lexeme}' at line {line}")]
    NoSuggestionAvailable { lexeme: String, line: usize },

    #[error("Gave up on '{lexeme}' at line {line} after {attempts} replacement attempts")]
    RecoveryLimitExceeded {
        lexeme: String,
        line: usize,
        attempts: usize,
    },

    #[error("No replacement supplied for '{lexeme}' at line {line}")]
    RecoveryDeclined { lexeme: String, line: usize },

    #[error("Numeric literal '{lexeme}' is out of range, clamped to {clamped_to}")]
    NumericOverflow { lexeme: String, clamped_to: String },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::ClassificationMiss { .. } => codes::lexical::CLASSIFICATION_MISS,
            LexerError::NoSuggestionAvailable { .. } => codes::lexical::NO_SUGGESTION_AVAILABLE,
            LexerError::RecoveryLimitExceeded { .. } => codes::lexical::RECOVERY_LIMIT_EXCEEDED,
            LexerError::RecoveryDeclined { .. } => codes::lexical::RESPONDER_UNAVAILABLE,
            LexerError::NumericOverflow { .. } => codes::lexical::NUMERIC_OVERFLOW,
        }
    }

    /// Line the failure occurred on, when it is tied to one
    pub fn line(&self) -> Option<usize> {
        match self {
            LexerError::ClassificationMiss { line, .. }
            | LexerError::NoSuggestionAvailable { line, .. }
            | LexerError::RecoveryLimitExceeded { line, .. }
            | LexerError::RecoveryDeclined { line, .. } => Some(*line),
            LexerError::NumericOverflow { .. } => None,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_errors_never_halt() {
        let errors = [
            LexerError::ClassificationMiss {
                lexeme: "fi".to_string(),
                line: 1,
            },
            LexerError::NoSuggestionAvailable {
                lexeme: "@@@@@".to_string(),
                line: 2,
            },
            LexerError::RecoveryLimitExceeded {
                lexeme: "fi".to_string(),
                line: 3,
                attempts: 8,
            },
            LexerError::RecoveryDeclined {
                lexeme: "fi".to_string(),
                line: 4,
            },
            LexerError::NumericOverflow {
                lexeme: "99999999999999999999".to_string(),
                clamped_to: u64::MAX.to_string(),
            },
        ];

        for error in &errors {
            assert!(!error.requires_halt(), "{} should not halt", error);
            assert!(error.is_recoverable());
            assert_eq!(error.category(), "Lexical");
        }
    }

    #[test]
    fn test_messages_and_lines() {
        let error = LexerError::RecoveryLimitExceeded {
            lexeme: "fi".to_string(),
            line: 3,
            attempts: 8,
        };
        assert_eq!(
            error.to_string(),
            "Gave up on 'fi' at line 3 after 8 replacement attempts"
        );
        assert_eq!(error.line(), Some(3));
        assert_eq!(error.error_code().as_str(), "E023");
    }
}
