//! Error types for request validation and parsing.

use thiserror::Error;

/// Error codes for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Frequency is not positive or not finite
    InvalidFrequency,
    /// E002: Sample rate is zero
    InvalidSampleRate,
    /// E003: Duration is negative or not finite
    InvalidDuration,
    /// E004: Amplitude is not finite
    InvalidAmplitude,
    /// E005: Integer cycle length truncates to zero samples
    DegenerateCycle,
    /// E006: Custom harmonic index outside 1..=10 or non-finite coefficient
    HarmonicOutOfRange,
    /// E007: Karplus-Strong delay line would be empty
    InvalidDelay,
    /// E008: Karplus-Strong blend probability outside [0, 1]
    InvalidBlend,
    /// E009: Envelope phases do not fit in the buffer
    EnvelopeExceedsBuffer,
    /// E010: Envelope duration or sustain level out of range
    InvalidEnvelope,
    /// E011: FM carrier or modulator parameter out of range
    InvalidFmParameter,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFrequency => "E001",
            ErrorCode::InvalidSampleRate => "E002",
            ErrorCode::InvalidDuration => "E003",
            ErrorCode::InvalidAmplitude => "E004",
            ErrorCode::DegenerateCycle => "E005",
            ErrorCode::HarmonicOutOfRange => "E006",
            ErrorCode::InvalidDelay => "E007",
            ErrorCode::InvalidBlend => "E008",
            ErrorCode::EnvelopeExceedsBuffer => "E009",
            ErrorCode::InvalidEnvelope => "E010",
            ErrorCode::InvalidFmParameter => "E011",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Amplitude magnitude above 1.0
    AmplitudeAboveUnity,
    /// W002: Custom harmonic coefficient at or above Nyquist
    HarmonicAboveNyquist,
    /// W003: Karplus-Strong delay covers the whole buffer
    DelayCoversBuffer,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::AmplitudeAboveUnity => "W001",
            WarningCode::HarmonicAboveNyquist => "W002",
            WarningCode::DelayCoversBuffer => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "waveform.blend").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for request operations.
#[derive(Debug, Error)]
pub enum RequestError {
    /// One or more parameters failed validation.
    #[error("invalid parameter: {}", join_errors(.0))]
    InvalidParameter(Vec<ValidationError>),

    /// The waveform type id is not one of the supported variants.
    #[error("unsupported waveform type: '{name}'")]
    UnsupportedType {
        /// The unrecognized type id.
        name: String,
    },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl RequestError {
    /// Returns the validation errors carried by an `InvalidParameter` error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            RequestError::InvalidParameter(errors) => errors,
            _ => &[],
        }
    }

    /// Returns true if any carried validation error has the given code.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.validation_errors().iter().any(|e| e.code == code)
    }
}

impl BackendError for RequestError {
    fn code(&self) -> &'static str {
        match self {
            RequestError::InvalidParameter(_) => "REQUEST_001",
            RequestError::UnsupportedType { .. } => "REQUEST_002",
            RequestError::Json(_) => "REQUEST_003",
        }
    }

    fn category(&self) -> &'static str {
        "request"
    }
}

/// Result of request validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Returns true if any error has the given code.
    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Returns true if any warning has the given code.
    pub fn has_warning(&self, code: WarningCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Converts to a Result, returning `RequestError::InvalidParameter` if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, RequestError> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(RequestError::InvalidParameter(self.errors))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for errors surfaced to callers.
///
/// Each error type in the workspace implements this trait so that the CLI
/// can report a stable code and category regardless of which crate raised
/// the error.
///
/// # Example
///
/// ```
/// use wavegen_spec::error::BackendError;
///
/// fn describe<E: BackendError>(err: &E) -> String {
///     format!("[{}] {}", err.code(), err.message())
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "REQUEST_001" or "AUDIO_002".
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category (e.g., "request", "audio").
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::InvalidFrequency.code(), "E001");
        assert_eq!(ErrorCode::InvalidFmParameter.code(), "E011");
        assert_eq!(WarningCode::DelayCoversBuffer.to_string(), "W003");
    }

    #[test]
    fn test_validation_error_display_with_path() {
        let err = ValidationError::with_path(
            ErrorCode::InvalidBlend,
            "blend must be in [0, 1], got 1.5",
            "waveform.blend",
        );
        assert_eq!(
            err.to_string(),
            "E008: blend must be in [0, 1], got 1.5 (at waveform.blend)"
        );
    }

    #[test]
    fn test_into_result_carries_all_errors() {
        let mut result = ValidationResult::success();
        result.add_error(ValidationError::new(ErrorCode::InvalidFrequency, "bad"));
        result.add_error(ValidationError::new(ErrorCode::InvalidDuration, "worse"));

        let err = result.into_result().unwrap_err();
        assert_eq!(err.validation_errors().len(), 2);
        assert!(err.has_code(ErrorCode::InvalidDuration));
        assert_eq!(err.code(), "REQUEST_001");
        assert!(err.to_string().contains("E001: bad; E003: worse"));
    }

    #[test]
    fn test_unsupported_type_message() {
        let err = RequestError::UnsupportedType {
            name: "wavetable".to_string(),
        };
        assert!(err.to_string().contains("wavetable"));
        assert_eq!(err.category(), "request");
    }
}
