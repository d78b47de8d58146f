//! Request validation logic.
//!
//! Validation runs before any sample is produced and collects every problem
//! it finds, so a caller can report all of them at once.

pub mod common;


use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::request::{
    AdsrEnvelope, FmParams, KarplusStrongParams, Waveform, WaveformRequest, MAX_CUSTOM_HARMONICS,
    MAX_TOTAL_SAMPLES,
};

pub use common::{
    validate_finite, validate_non_negative, validate_positive, validate_unit_interval,
    CommonValidationError,
};

/// Validates a request and returns a validation result.
///
/// # Returns
/// * `ValidationResult` with `ok=true` if validation passed, with any warnings.
/// * `ValidationResult` with `ok=false` and errors if validation failed.
///
/// A request that yields zero samples is valid.
///
/// # Example
/// ```
/// use wavegen_spec::{validate_request, ErrorCode, Waveform, WaveformRequest};
///
/// let request = WaveformRequest::new(Waveform::SineTime, 0.0, 1.0, 1.0);
/// let result = validate_request(&request);
/// assert!(!result.is_ok());
/// assert!(result.has_error(ErrorCode::InvalidFrequency));
/// ```
pub fn validate_request(request: &WaveformRequest) -> ValidationResult {
    let mut result = ValidationResult::success();

    if let Err(e) = validate_positive("frequency", request.frequency) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFrequency,
            e.message,
            "frequency",
        ));
    }

    if request.sample_rate == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            "sample_rate must be positive, got 0",
            "sample_rate",
        ));
    }

    match validate_non_negative("duration", request.duration) {
        Err(e) => result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDuration,
            e.message,
            "duration",
        )),
        Ok(()) if request.sample_rate > 0 => validate_buffer_length(request, &mut result),
        Ok(()) => {}
    }

    match validate_finite("amplitude", request.amplitude) {
        Err(e) => result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAmplitude,
            e.message,
            "amplitude",
        )),
        Ok(()) if request.amplitude.abs() > 1.0 => {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::AmplitudeAboveUnity,
                format!(
                    "amplitude {} exceeds 1.0; output may clip downstream",
                    request.amplitude
                ),
                "amplitude",
            ));
        }
        Ok(()) => {}
    }

    // Cycle, Nyquist, and buffer-length checks need a sane frequency, rate, and duration.
    let base_ok = result.is_ok();

    if base_ok && !request.final_phase(request.frequency).is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFrequency,
            format!(
                "phase of {} Hz over {} samples overflows",
                request.frequency,
                request.total_samples()
            ),
            "frequency",
        ));
    }

    match &request.waveform {
        Waveform::SquareTime | Waveform::SawtoothTime | Waveform::RepeatingNarrowPulse => {
            if base_ok {
                validate_integer_cycle(request, &mut result);
            }
        }
        Waveform::CustomAdditive { harmonics } => {
            validate_custom_harmonics(request, harmonics, base_ok, &mut result);
        }
        Waveform::KarplusStrong(params) => {
            validate_karplus(request, params, base_ok, &mut result);
        }
        Waveform::Fm(params) => {
            validate_fm(request, params, base_ok, &mut result);
        }
        Waveform::SineTime
        | Waveform::SquareAdditive
        | Waveform::SawtoothAdditive
        | Waveform::TriangleAdditive
        | Waveform::WhiteNoise => {}
    }

    result
}

fn validate_buffer_length(request: &WaveformRequest, result: &mut ValidationResult) {
    let span = request.sample_span();
    if !span.is_finite() || span.floor() > MAX_TOTAL_SAMPLES as f64 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDuration,
            format!(
                "{} s at {} Hz is {} samples; at most {} are supported",
                request.duration, request.sample_rate, span, MAX_TOTAL_SAMPLES
            ),
            "duration",
        ));
    }
}

fn validate_integer_cycle(request: &WaveformRequest, result: &mut ValidationResult) {
    if request.cycle_length().floor() < 1.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::DegenerateCycle,
            format!(
                "frequency {} Hz exceeds sample rate {} Hz; integer cycle length is zero",
                request.frequency, request.sample_rate
            ),
            "frequency",
        ));
    }
}

fn validate_custom_harmonics(
    request: &WaveformRequest,
    harmonics: &[f64],
    base_ok: bool,
    result: &mut ValidationResult,
) {
    if harmonics.len() > MAX_CUSTOM_HARMONICS {
        result.add_error(ValidationError::with_path(
            ErrorCode::HarmonicOutOfRange,
            format!(
                "at most {} harmonic coefficients are supported, got {}",
                MAX_CUSTOM_HARMONICS,
                harmonics.len()
            ),
            "waveform.harmonics",
        ));
    }

    let nyquist = request.nyquist();
    for (index, &coeff) in harmonics.iter().enumerate() {
        let path = format!("waveform.harmonics[{}]", index);
        if let Err(e) = validate_finite("harmonic coefficient", coeff) {
            result.add_error(ValidationError::with_path(
                ErrorCode::HarmonicOutOfRange,
                e.message,
                path,
            ));
            continue;
        }

        let k = (index + 1) as f64;
        if base_ok && index < MAX_CUSTOM_HARMONICS && coeff != 0.0 && k * request.frequency >= nyquist
        {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::HarmonicAboveNyquist,
                format!(
                    "harmonic {} ({} Hz) is at or above Nyquist ({} Hz) and will be silent",
                    index + 1,
                    k * request.frequency,
                    nyquist
                ),
                path,
            ));
        }
    }
}

fn validate_karplus(
    request: &WaveformRequest,
    params: &KarplusStrongParams,
    base_ok: bool,
    result: &mut ValidationResult,
) {
    if let Err(e) = validate_unit_interval("blend", params.blend) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidBlend,
            e.message,
            "waveform.blend",
        ));
    }

    if let Some(delay) = params.delay.filter(|&d| d <= 0) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDelay,
            format!("delay must be at least 1 sample, got {}", delay),
            "waveform.delay",
        ));
        return;
    }

    if !base_ok {
        return;
    }

    let delay = request.karplus_delay(params);
    if delay == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDelay,
            format!(
                "delay derived from {} Hz at {} Hz rounds to 0 samples",
                request.frequency, request.sample_rate
            ),
            "frequency",
        ));
        return;
    }

    let total = request.total_samples();
    if total > 0 && delay >= total {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::DelayCoversBuffer,
            format!(
                "delay of {} samples covers the whole {}-sample buffer; no feedback will run",
                delay, total
            ),
            "waveform.delay",
        ));
    }
}

fn validate_fm(
    request: &WaveformRequest,
    params: &FmParams,
    base_ok: bool,
    result: &mut ValidationResult,
) {
    let frequencies = [
        ("carrier_frequency", params.carrier_frequency),
        ("modulation_frequency", params.modulation_frequency),
    ];
    for (name, value) in frequencies {
        if let Err(e) = validate_non_negative(name, value) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidFmParameter,
                e.message,
                format!("waveform.{}", name),
            ));
        }
    }

    let amplitudes = [
        ("carrier_amplitude", params.carrier_amplitude),
        ("modulation_amplitude", params.modulation_amplitude),
    ];
    for (name, value) in amplitudes {
        if let Err(e) = validate_finite(name, value) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidFmParameter,
                e.message,
                format!("waveform.{}", name),
            ));
        }
    }

    if base_ok && result.is_ok() {
        validate_fm_phase(request, params, result);
    }

    if let Some(envelope) = &params.envelope {
        validate_envelope(request, envelope, base_ok, result);
    }
}

/// Rejects resolved frequencies whose phase, plus the peak modulation
/// offset, leaves the finite range over the buffer.
fn validate_fm_phase(request: &WaveformRequest, params: &FmParams, result: &mut ValidationResult) {
    let (carrier, modulator) = params.resolved_frequencies(request.frequency);
    let carrier_phase = request.final_phase(carrier) + params.modulation_amplitude.abs();
    let resolved = [
        ("carrier_frequency", carrier, carrier_phase),
        ("modulation_frequency", modulator, request.final_phase(modulator)),
    ];
    for (name, hz, phase) in resolved {
        if !hz.is_finite() || !phase.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidFmParameter,
                format!(
                    "{} resolves to {} Hz, whose phase overflows over {} samples",
                    name,
                    hz,
                    request.total_samples()
                ),
                format!("waveform.{}", name),
            ));
        }
    }
}

fn validate_envelope(
    request: &WaveformRequest,
    envelope: &AdsrEnvelope,
    base_ok: bool,
    result: &mut ValidationResult,
) {
    let mut envelope_ok = true;

    let durations = [
        ("attack", envelope.attack),
        ("decay", envelope.decay),
        ("release", envelope.release),
    ];
    for (name, value) in durations {
        if let Err(e) = validate_non_negative(name, value) {
            envelope_ok = false;
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidEnvelope,
                e.message,
                format!("waveform.envelope.{}", name),
            ));
        }
    }

    if let Err(e) = validate_unit_interval("sustain", envelope.sustain) {
        envelope_ok = false;
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidEnvelope,
            e.message,
            "waveform.envelope.sustain",
        ));
    }

    if !(base_ok && envelope_ok) {
        return;
    }

    let (attack, decay, release) = envelope.phase_lengths(request.sample_rate as f64);
    let total = request.total_samples();
    if attack + decay + release > total as f64 {
        result.add_error(ValidationError::with_path(
            ErrorCode::EnvelopeExceedsBuffer,
            format!(
                "attack + decay + release spans {} samples but the buffer holds {}",
                attack + decay + release,
                total
            ),
            "waveform.envelope",
        ));
    }
}
