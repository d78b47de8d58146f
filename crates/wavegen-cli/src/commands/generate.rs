//! Generate command implementation
//!
//! Validates a request, synthesizes its samples, and prints a summary.
//! Nothing is written to disk.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;
use wavegen_backend_audio::{generate_seeded, AudioError, SampleSequence};
use wavegen_spec::{canonical_request_hash, validate_request, WaveformRequest};

use super::json_output::{
    error_codes, input_error_to_json, validation_error_to_json, validation_warning_to_json,
    GenerateOutput, GenerateResult, JsonError, JsonWarning,
};
use super::validate::print_validation_results;
use crate::input::{load_request, LoadResult};

/// Run the generate command
///
/// # Arguments
/// * `request_path` - Path to the request file (JSON)
/// * `seed` - Seed for white noise and Karplus-Strong
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 on success, 1 if the request is invalid
pub fn run(request_path: &str, seed: u32, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(request_path, seed)
    } else {
        run_human(request_path, seed)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(request_path: &str, seed: u32) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Generating:".cyan().bold(), request_path);

    let LoadResult { request, .. } = load_request(Path::new(request_path))
        .with_context(|| format!("Failed to load request file: {}", request_path))?;
    let request_hash = canonical_request_hash(&request).context("Failed to hash request")?;

    println!(
        "{} {} @ {} Hz, seed {}",
        "Waveform:".dimmed(),
        request.waveform_type(),
        request.sample_rate,
        seed
    );

    let validation = validate_request(&request);
    print_validation_results(&validation);
    if !validation.is_ok() {
        println!(
            "\n{} Request has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    let samples = generate_seeded(&request, seed)
        .with_context(|| format!("Failed to generate {}", request.waveform_type()))?;
    let duration_ms = start.elapsed().as_millis() as u64;

    println!();
    println!("  {:<10} {}", "Samples:".dimmed(), samples.len());
    println!(
        "  {:<10} {:.6} s",
        "Duration:".dimmed(),
        samples.duration_seconds()
    );
    println!("  {:<10} {:.6}", "Peak:".dimmed(), samples.peak());
    println!("  {:<10} {:.6}", "RMS:".dimmed(), samples.rms());
    println!("  {:<10} {}", "PCM hash:".dimmed(), samples.pcm_hash());
    println!("  {:<10} {}", "Request:".dimmed(), request_hash);
    println!("\n{} Generated in {}ms", "SUCCESS".green().bold(), duration_ms);

    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(request_path: &str, seed: u32) -> Result<ExitCode> {
    let output = generate_output(request_path, seed);
    let json =
        serde_json::to_string_pretty(&output).context("Failed to serialize generate output")?;
    println!("{}", json);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Builds the JSON document for generating a request file.
pub fn generate_output(request_path: &str, seed: u32) -> GenerateOutput {
    let start = Instant::now();

    let LoadResult {
        request,
        source_hash,
    } = match load_request(Path::new(request_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let error = input_error_to_json(&e, Some(request_path));
            return GenerateOutput::failure(vec![error], vec![], None, None);
        }
    };

    let request_hash = canonical_request_hash(&request).ok();
    let warnings: Vec<JsonWarning> = validate_request(&request)
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    match generate_seeded(&request, seed) {
        Ok(samples) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            info!(
                waveform = %request.waveform_type(),
                samples = samples.len(),
                duration_ms,
                "generation complete"
            );
            let result = summarize(&request, seed, &samples, duration_ms);
            GenerateOutput::success(result, request_hash, source_hash, warnings)
        }
        Err(e) => GenerateOutput::failure(
            audio_error_to_json(&e),
            warnings,
            request_hash,
            Some(source_hash),
        ),
    }
}

fn summarize(
    request: &WaveformRequest,
    seed: u32,
    samples: &SampleSequence,
    duration_ms: u64,
) -> GenerateResult {
    GenerateResult {
        waveform_type: request.waveform_type().to_string(),
        seed,
        sample_count: samples.len(),
        sample_rate: samples.sample_rate(),
        duration_seconds: samples.duration_seconds(),
        peak: samples.peak(),
        rms: samples.rms(),
        pcm_hash: samples.pcm_hash(),
        duration_ms,
    }
}

/// Validation failures keep their own codes; anything else is a generation error.
fn audio_error_to_json(err: &AudioError) -> Vec<JsonError> {
    match err {
        AudioError::Request(inner) if !inner.validation_errors().is_empty() => inner
            .validation_errors()
            .iter()
            .map(validation_error_to_json)
            .collect(),
        other => vec![JsonError::new(
            error_codes::GENERATION_ERROR,
            other.to_string(),
        )],
    }
}
