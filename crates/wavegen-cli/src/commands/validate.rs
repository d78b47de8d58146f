//! Validate command implementation
//!
//! Checks a request file and reports every error and warning without
//! generating any samples.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use wavegen_spec::{canonical_request_hash, validate_request, ValidationResult};

use super::json_output::{
    input_error_to_json, validation_error_to_json, validation_warning_to_json, JsonError,
    ValidateOutput, ValidateResult,
};
use crate::input::{load_request, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `request_path` - Path to the request file (JSON)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(request_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(request_path)
    } else {
        run_human(request_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(request_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), request_path);

    let LoadResult {
        request,
        source_hash,
    } = load_request(Path::new(request_path))
        .with_context(|| format!("Failed to load request file: {}", request_path))?;

    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);
    println!(
        "{} {} @ {} Hz, {} samples",
        "Waveform:".dimmed(),
        request.waveform_type(),
        request.sample_rate,
        request.total_samples()
    );

    let result = validate_request(&request);
    print_validation_results(&result);

    if result.is_ok() {
        println!("\n{} Request is valid", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Request has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(request_path: &str) -> Result<ExitCode> {
    let output = validate_output(request_path);
    let json =
        serde_json::to_string_pretty(&output).context("Failed to serialize validate output")?;
    println!("{}", json);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Builds the JSON document for a request file.
pub fn validate_output(request_path: &str) -> ValidateOutput {
    let LoadResult {
        request,
        source_hash,
    } = match load_request(Path::new(request_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let error = input_error_to_json(&e, Some(request_path));
            return ValidateOutput::failure(vec![error], vec![], None, None);
        }
    };

    let request_hash = canonical_request_hash(&request).ok();
    let result = validate_request(&request);
    let warnings = result
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    if result.is_ok() {
        let details = ValidateResult {
            waveform_type: request.waveform_type().to_string(),
            total_samples: request.total_samples(),
            sample_rate: request.sample_rate,
        };
        ValidateOutput::success(details, request_hash, source_hash, warnings)
    } else {
        let errors: Vec<JsonError> = result.errors.iter().map(validation_error_to_json).collect();
        ValidateOutput::failure(errors, warnings, request_hash, Some(source_hash))
    }
}

/// Print validation results to the console
pub(crate) fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::json_output::error_codes;
    use pretty_assertions::assert_eq;

    fn write_request(dir: &tempfile::TempDir, content: &str) -> String {
        let path = dir.path().join("request.json");
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_valid_request() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_request(
            &tmp,
            r#"{
                "frequency": 441.0,
                "amplitude": 0.5,
                "duration": 0.5,
                "sample_rate": 44100,
                "waveform": { "type": "square-time" }
            }"#,
        );

        let output = validate_output(&path);
        assert!(output.success);
        assert!(output.errors.is_empty());
        let result = output.result.unwrap();
        assert_eq!(result.waveform_type, "square-time");
        assert_eq!(result.total_samples, 22050);
        assert!(output.request_hash.is_some());
    }

    #[test]
    fn test_invalid_request_lists_every_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_request(
            &tmp,
            r#"{
                "frequency": 0.0,
                "amplitude": 0.5,
                "duration": -1.0,
                "waveform": { "type": "karplus-strong", "blend": 1.5 }
            }"#,
        );

        let output = validate_output(&path);
        assert!(!output.success);
        let codes: Vec<&str> = output.errors.iter().map(|e| e.code.as_str()).collect();
        assert!(codes.contains(&"E001"));
        assert!(codes.contains(&"E003"));
        assert!(codes.contains(&"E008"));
    }

    #[test]
    fn test_warnings_do_not_fail_validation() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_request(
            &tmp,
            r#"{
                "frequency": 440.0,
                "amplitude": 1.5,
                "duration": 0.1,
                "waveform": { "type": "sine-time" }
            }"#,
        );

        let output = validate_output(&path);
        assert!(output.success);
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].code, "W001");
    }

    #[test]
    fn test_negative_delay_reports_delay_code() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_request(
            &tmp,
            r#"{
                "frequency": 440.0,
                "amplitude": 0.5,
                "duration": 0.1,
                "waveform": { "type": "karplus-strong", "blend": 0.5, "delay": -3 }
            }"#,
        );

        let output = validate_output(&path);
        assert!(!output.success);
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].code, "E007");
        assert_eq!(output.errors[0].path.as_deref(), Some("waveform.delay"));
    }

    #[test]
    fn test_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nope.json");
        let output = validate_output(&path.to_string_lossy());
        assert!(!output.success);
        assert_eq!(output.errors[0].code, error_codes::FILE_READ);
    }
}
