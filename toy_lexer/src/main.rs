use std::env;
use std::io;
use std::path::Path;
use toy_lexer::config::constants::{EXPECTED_ARGUMENT_COUNT, OUTPUT_FILE_NAME};
use toy_lexer::config::runtime::RuntimeConfig;
use toy_lexer::lexical::{ConsoleResponder, NoResponder};
use toy_lexer::{logging, pipeline};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != EXPECTED_ARGUMENT_COUNT + 1 {
        let program = args.first().map(String::as_str).unwrap_or("toy_lexer");
        eprintln!("Usage: {} <source.txt>", program);
        std::process::exit(1);
    }

    let config = RuntimeConfig::default();
    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()?;
    pipeline::validate_pipeline()?;

    let input = Path::new(&args[1]);
    let output = Path::new(OUTPUT_FILE_NAME);

    let result = if config.lexical.interactive_recovery {
        let stdin = io::stdin();
        let mut responder = ConsoleResponder::new(stdin.lock(), io::stdout());
        pipeline::process_file_with_preferences(
            input,
            output,
            &config.file_processor,
            config.lexical.clone(),
            &mut responder,
        )
    } else {
        pipeline::process_file_with_preferences(
            input,
            output,
            &config.file_processor,
            config.lexical.clone(),
            &mut NoResponder,
        )
    };

    match result {
        Ok(result) => {
            eprintln!("Tokenized {}: {}", input.display(), result.summary());
        }
        Err(error) => {
            eprintln!("FAILED: {}", error);
            print_detailed_error(&error);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_detailed_error(error: &pipeline::PipelineError) {
    match error {
        pipeline::PipelineError::FileProcessing(file_err) => {
            eprintln!("Could not read the source file:");
            eprintln!("  {}", file_err);
        }
        pipeline::PipelineError::OutputUnavailable { path, message } => {
            eprintln!("Could not create {}:", path);
            eprintln!("  {}", message);
        }
        pipeline::PipelineError::OutputWrite { message } => {
            eprintln!("Could not write the token stream:");
            eprintln!("  {}", message);
        }
        pipeline::PipelineError::Pipeline { message } => {
            eprintln!("Pipeline error: {}", message);
        }
    }

    eprintln!(
        "  [{}] severity: {}, category: {}",
        error.error_code(),
        error.severity(),
        error.category()
    );
    eprintln!(
        "  Recommended action: {}",
        logging::codes::get_action(error.error_code().as_str())
    );
}
