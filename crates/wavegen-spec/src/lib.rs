//! Wavegen Request Library
//!
//! This crate provides the types, validation, and hashing for waveform
//! synthesis requests. A request is a fully resolved description of one
//! synthesis job: the waveform type, its fundamental frequency, amplitude,
//! duration, sample rate, and any type-specific parameters.
//!
//! # Example
//!
//! ```
//! use wavegen_spec::{validate_request, Waveform, WaveformRequest};
//!
//! let request = WaveformRequest::new(Waveform::SineTime, 440.0, 0.8, 0.5)
//!     .with_sample_rate(22050);
//!
//! assert_eq!(request.total_samples(), 11025);
//! assert!(validate_request(&request).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`request`]: Request model and waveform parameter bundles
//! - [`validation`]: Request validation functions
//! - [`hash`]: Canonical request hashing

pub mod error;
pub mod hash;
pub mod request;
pub mod validation;

pub use error::{
    BackendError, ErrorCode, RequestError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::canonical_request_hash;
pub use request::{
    AdsrEnvelope, Excitation, FmParams, KarplusStrongParams, Waveform, WaveformRequest,
    WaveformType, DEFAULT_SAMPLE_RATE, MAX_CUSTOM_HARMONICS, MAX_TOTAL_SAMPLES,
};
pub use validation::validate_request;
