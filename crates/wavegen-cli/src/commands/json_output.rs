//! JSON output types for machine-readable CLI output.
//!
//! Every command that takes `--json` prints exactly one of these documents to
//! stdout, so scripts can parse the result without scraping colored text.

use serde::{Deserialize, Serialize};
use wavegen_spec::{ValidationError, ValidationWarning};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Validation errors pass their own `E0xx` codes through unchanged.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Unknown waveform type id
    pub const UNSUPPORTED_TYPE: &str = "CLI_003";
    /// Generation error (wraps engine errors)
    pub const GENERATION_ERROR: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the JSON path for this warning.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Validation result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ValidateResult>,
    /// Canonical request hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_hash: Option<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Validation result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResult {
    /// Waveform type id
    pub waveform_type: String,
    /// Number of samples the request would produce
    pub total_samples: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl ValidateOutput {
    /// Creates a successful validate output.
    pub fn success(
        result: ValidateResult,
        request_hash: Option<String>,
        source_hash: String,
        warnings: Vec<JsonWarning>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            request_hash,
            source_hash: Some(source_hash),
        }
    }

    /// Creates a failed validate output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        request_hash: Option<String>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            request_hash,
            source_hash,
        }
    }
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub success: bool,
    /// Errors encountered during validation or generation
    pub errors: Vec<JsonError>,
    /// Warnings from validation
    pub warnings: Vec<JsonWarning>,
    /// Summary of the generated samples (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
    /// Canonical request hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_hash: Option<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Summary of a generated sample sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResult {
    /// Waveform type id
    pub waveform_type: String,
    /// Seed used for randomness
    pub seed: u32,
    /// Number of samples generated
    pub sample_count: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Length of the sequence in seconds
    pub duration_seconds: f64,
    /// Largest absolute sample value
    pub peak: f64,
    /// Root-mean-square level
    pub rms: f64,
    /// BLAKE3 hash of the samples as little-endian f64
    pub pcm_hash: String,
    /// Wall-clock generation time in milliseconds
    pub duration_ms: u64,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(
        result: GenerateResult,
        request_hash: Option<String>,
        source_hash: String,
        warnings: Vec<JsonWarning>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            request_hash,
            source_hash: Some(source_hash),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        request_hash: Option<String>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            request_hash,
            source_hash,
        }
    }
}

/// Converts an InputError to a JsonError.
pub fn input_error_to_json(err: &InputError, file: Option<&str>) -> JsonError {
    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        InputError::UnsupportedType { .. } => error_codes::UNSUPPORTED_TYPE,
    };

    let error = JsonError::new(code, err.to_string());
    match file {
        Some(f) => error.with_file(f),
        None => error,
    }
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &ValidationWarning) -> JsonWarning {
    let mut warning = JsonWarning::new(warn.code.to_string(), &warn.message);
    if let Some(ref path) = warn.path {
        warning = warning.with_path(path);
    }
    warning
}
