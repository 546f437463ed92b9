//! Lexical analysis for toy language sources
//!
//! Classifiers recognize single lexemes; the analyzer drives them line by
//! line and handles recovery for lexemes none of them accept.

pub mod analyzer;
pub mod automaton;
pub mod classifier;
pub mod error;
pub mod recovery;
pub mod suggest;

use crate::config::compile_time::lexical::*;
use crate::file_processor::FileProcessingResult;
use crate::logging::codes;

pub use analyzer::{segment, LexicalAnalyzer, LexicalMetrics, TokenizedSource};
pub use classifier::{classify, Classification, Classifier};
pub use error::LexerError;
pub use recovery::{ConsoleResponder, NoResponder, RecoveryPrompt, Responder, ScriptedResponder};
pub use suggest::{edit_distance, suggest, Suggestion};

/// Tokenize a loaded file with default preferences
pub fn tokenize_file_result<R: Responder + ?Sized>(
    file_result: &FileProcessingResult,
    responder: &mut R,
) -> TokenizedSource {
    let mut analyzer = LexicalAnalyzer::new();
    analyzer.tokenize_source(&file_result.source, responder)
}

/// Check lexical codes and limits at startup
pub fn init_lexical_analysis_logging() -> Result<(), String> {
    let missing = [
        codes::lexical::CLASSIFICATION_MISS,
        codes::lexical::NO_SUGGESTION_AVAILABLE,
        codes::lexical::NUMERIC_OVERFLOW,
        codes::lexical::RECOVERY_LIMIT_EXCEEDED,
        codes::lexical::RESPONDER_UNAVAILABLE,
        codes::success::SUGGESTION_OFFERED,
        codes::success::RECOVERY_ACCEPTED,
        codes::success::TOKENIZATION_COMPLETE,
    ]
    .into_iter()
    .find(|code| codes::get_error_metadata(code.as_str()).is_none());

    if let Some(code) = missing {
        return Err(format!("Lexical code {} is not registered", code));
    }

    validate_tokenization()?;

    log_debug!("Lexical limits initialized",
        "max_suggestion_distance" => MAX_SUGGESTION_DISTANCE,
        "max_recovery_attempts" => MAX_RECOVERY_ATTEMPTS
    );

    Ok(())
}

/// Sanity-check the classifier set and recovery limits
pub fn validate_tokenization() -> Result<(), String> {
    if MAX_RECOVERY_ATTEMPTS == 0 {
        return Err("MAX_RECOVERY_ATTEMPTS cannot be zero".to_string());
    }

    for &entry in crate::tokens::vocabulary() {
        let accepting = classifier::accepting_classifiers(entry);
        if accepting.len() != 1 {
            return Err(format!(
                "Vocabulary entry '{}' is accepted by {} classifiers",
                entry,
                accepting.len()
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_processor::FileProcessor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_module_validation() {
        assert!(init_lexical_analysis_logging().is_ok());
        assert!(validate_tokenization().is_ok());
    }

    #[test]
    fn test_tokenize_file_result() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "var _n : int").unwrap();
        writeln!(file, "_n <- 2.5").unwrap();

        let result = FileProcessor::new().process_file(file.path()).unwrap();
        let tokenized = tokenize_file_result(&result, &mut NoResponder);

        assert_eq!(
            tokenized.render(crate::tokens::RenderStyle::Canonical),
            "<KW_VAR> <ID: 1> <COLON> <KW_INT>\n<ID: 1> <ASSIGN> <FLOATNUM: 2.5>\n"
        );
    }
}
