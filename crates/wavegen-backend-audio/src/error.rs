//! Error types for the synthesis engine.

use thiserror::Error;
use wavegen_spec::{BackendError, RequestError};

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during generation.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The request failed validation or named an unsupported type.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Internal synthesis error.
    #[error("synthesis error: {message}")]
    Synthesis {
        /// Error message.
        message: String,
    },
}

impl AudioError {
    /// Creates a synthesis error.
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis {
            message: message.into(),
        }
    }

    /// Returns true if the request was rejected for an invalid parameter.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, AudioError::Request(RequestError::InvalidParameter(_)))
    }

    /// Returns true if the request named an unsupported waveform type.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(
            self,
            AudioError::Request(RequestError::UnsupportedType { .. })
        )
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::Request(inner) => inner.code(),
            AudioError::Synthesis { .. } => "AUDIO_001",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            AudioError::Request(inner) => inner.category(),
            AudioError::Synthesis { .. } => "audio",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavegen_spec::{ErrorCode, ValidationError};

    #[test]
    fn test_synthesis_helper() {
        let err = AudioError::synthesis("sample count mismatch");
        assert!(err.to_string().contains("sample count mismatch"));
        assert_eq!(err.code(), "AUDIO_001");
        assert_eq!(err.category(), "audio");
    }

    #[test]
    fn test_request_errors_keep_their_code() {
        let err: AudioError = RequestError::InvalidParameter(vec![ValidationError::new(
            ErrorCode::InvalidFrequency,
            "frequency must be positive, got 0",
        )])
        .into();
        assert!(err.is_invalid_parameter());
        assert!(!err.is_unsupported_type());
        assert_eq!(err.code(), "REQUEST_001");
        assert!(err.to_string().contains("E001"));
    }
}
