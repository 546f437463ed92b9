//! Source file in, token stream file out
//!
//! The input is fully read and validated before the output file is created,
//! so a bad input never leaves an empty output behind.

mod error;
mod result;
mod validation;

pub use error::PipelineError;
pub use result::PipelineResult;
pub use validation::validate_pipeline;

use crate::config::runtime::{FileProcessorPreferences, LexicalPreferences};
use crate::file_processor::FileProcessor;
use crate::lexical::{LexicalAnalyzer, Responder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

/// Tokenize `input` into `output_path` using preferences from the environment
pub fn process_file<R: Responder + ?Sized>(
    input: &Path,
    output_path: &Path,
    responder: &mut R,
) -> Result<PipelineResult, PipelineError> {
    process_file_with_preferences(
        input,
        output_path,
        &FileProcessorPreferences::default(),
        LexicalPreferences::default(),
        responder,
    )
}

pub fn process_file_with_preferences<R: Responder + ?Sized>(
    input: &Path,
    output_path: &Path,
    file_preferences: &FileProcessorPreferences,
    lexical_preferences: LexicalPreferences,
    responder: &mut R,
) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();
    let file_path = input.display().to_string();

    log_info!("Starting toy lexer pipeline",
        "file" => &file_path,
        "output" => output_path.display(),
        "interactive" => lexical_preferences.interactive_recovery
    );

    // Stage 1: load and validate the source
    let file_result = FileProcessor::from_preferences(file_preferences).process_file(input)?;

    // Stage 2: open the output
    let output = File::create(output_path).map_err(|e| {
        let error = PipelineError::OutputUnavailable {
            path: output_path.display().to_string(),
            message: e.to_string(),
        };
        log_error!(error.error_code(), "Cannot create output file",
            "path" => output_path.display(),
            "io_error" => &e
        );
        error
    })?;
    let mut writer = BufWriter::new(output);

    // Stage 3: stream tokens line by line
    let mut analyzer = LexicalAnalyzer::with_preferences(lexical_preferences);
    let lines_written = analyzer
        .tokenize_reader(file_result.source.as_bytes(), &mut writer, responder)
        .and_then(|lines| writer.flush().map(|_| lines))
        .map_err(|e| {
            let error = PipelineError::OutputWrite {
                message: e.to_string(),
            };
            log_error!(error.error_code(), "Failed writing token stream",
                "path" => output_path.display()
            );
            error
        })?;

    let result = PipelineResult {
        file_metadata: file_result.metadata,
        lexical_metrics: analyzer.metrics().clone(),
        identifier_count: analyzer.interner().len(),
        lines_written,
        output_path: output_path.to_path_buf(),
        processing_duration: start_time.elapsed(),
    };

    result.log_success(&file_path);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_processor::FileProcessorError;
    use crate::lexical::{NoResponder, ScriptedResponder};
    use crate::tokens::RenderStyle;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    fn lexical(render_style: RenderStyle) -> LexicalPreferences {
        LexicalPreferences {
            render_style,
            interactive_recovery: true,
            collect_detailed_metrics: false,
        }
    }

    fn file_prefs() -> FileProcessorPreferences {
        FileProcessorPreferences {
            enable_performance_logging: false,
        }
    }

    #[test]
    fn test_process_file_writes_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("source.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "proc _foo <- 10\nif _x >= 3.14\n\n@@@@@\n").unwrap();

        let result = process_file_with_preferences(
            &input,
            &output,
            &file_prefs(),
            lexical(RenderStyle::Canonical),
            &mut NoResponder,
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<KW_PROC> <ID: 1> <ASSIGN> <INTNUM: 10>\n\
             <KW_IF> <ID: 2> <GEQ> <FLOATNUM: 3.14>\n\
             \n\
             <ERROR_TOKEN \"@@@@@\" at line 4>\n"
        );
        assert_eq!(result.lines_written, 4);
        assert_eq!(result.token_count(), 9);
        assert_eq!(result.error_token_count(), 1);
        assert_eq!(result.identifier_count, 2);
        assert!(result.summary().contains("9 tokens (1 errors)"));
    }

    #[test]
    fn test_recovery_through_pipeline() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("source.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "fi _x\n").unwrap();

        let mut responder = ScriptedResponder::new(["if"]);
        let result = process_file_with_preferences(
            &input,
            &output,
            &file_prefs(),
            lexical(RenderStyle::Echo),
            &mut responder,
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<KW_IF: \"if\"> <ID: 1>\n"
        );
        assert_eq!(result.lexical_metrics.accepted_recoveries, 1);
        assert_eq!(responder.prompts().len(), 1);
    }

    #[test]
    fn test_missing_input_creates_no_output() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.txt");

        let result = process_file(&dir.path().join("missing.txt"), &output, &mut NoResponder);

        assert_matches!(
            result,
            Err(PipelineError::FileProcessing(FileProcessorError::FileNotFound { .. }))
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("source.txt");
        fs::write(&input, "run\n").unwrap();

        let result = process_file(&input, &dir.path().join("no/such/dir/out.txt"), &mut NoResponder);

        let error = result.unwrap_err();
        assert_matches!(error, PipelineError::OutputUnavailable { .. });
        assert_eq!(error.error_code().as_str(), "E015");
        assert!(error.requires_halt());
    }

    #[test]
    fn test_validate_pipeline() {
        assert!(validate_pipeline().is_ok());
    }

    #[test]
    fn test_pipeline_error_creation() {
        let error = PipelineError::pipeline_error("Test error");
        assert_matches!(error, PipelineError::Pipeline { ref message } if message == "Test error");
        assert_eq!(error.error_code().as_str(), "ERR001");
    }
}
