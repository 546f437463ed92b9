/// Check that every stage is configured before processing anything
pub fn validate_pipeline() -> Result<(), String> {
    log_debug!("Validating pipeline configuration");

    crate::file_processor::init_file_processor_logging()?;
    crate::lexical::init_lexical_analysis_logging()?;

    for code in [
        crate::logging::codes::output::OUTPUT_UNAVAILABLE,
        crate::logging::codes::output::OUTPUT_WRITE_FAILED,
    ] {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!("Output error code {} has no metadata", code));
        }
    }

    log_success!(
        crate::logging::codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Pipeline validation succeeded",
        "file_processing" => true,
        "lexical_analysis" => true
    );

    Ok(())
}
