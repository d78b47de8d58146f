//! Waveform request model.
//!
//! A [`WaveformRequest`] is an immutable description of one synthesis job. It
//! is built by the caller (directly, or by parsing JSON), validated, consumed
//! once by the engine, and discarded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// Sample rate used when a request does not specify one.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Highest harmonic number a customized additive request may weight.
pub const MAX_CUSTOM_HARMONICS: usize = 10;

/// Largest buffer a request may ask for (2^28 samples, about 101 minutes at
/// 44.1 kHz). Longer requests are rejected with `E003`.
pub const MAX_TOTAL_SAMPLES: usize = 1 << 28;

/// A fully resolved synthesis job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveformRequest {
    /// Fundamental frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Waveform type and its type-specific parameters.
    pub waveform: Waveform,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

impl WaveformRequest {
    /// Creates a request at the default sample rate.
    pub fn new(waveform: Waveform, frequency: f64, amplitude: f64, duration: f64) -> Self {
        Self {
            frequency,
            amplitude,
            duration,
            sample_rate: DEFAULT_SAMPLE_RATE,
            waveform,
        }
    }

    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Parses a request from JSON.
    ///
    /// The waveform `type` id is checked before the rest of the document so
    /// that an unknown type is reported as [`RequestError::UnsupportedType`]
    /// instead of a generic parse error.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(name) = value
            .get("waveform")
            .and_then(|w| w.get("type"))
            .and_then(|t| t.as_str())
        {
            name.parse::<WaveformType>()?;
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Serializes the request to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, RequestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the waveform type discriminant.
    pub fn waveform_type(&self) -> WaveformType {
        self.waveform.waveform_type()
    }

    /// Number of samples the request produces: `floor(sample_rate * duration)`.
    ///
    /// Returns 0 when the product is not finite; validation rejects such
    /// requests before anything is generated.
    pub fn total_samples(&self) -> usize {
        let total = (self.sample_rate as f64 * self.duration).floor();
        if total.is_finite() && total > 0.0 {
            total as usize
        } else {
            0
        }
    }

    /// Half the sample rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    /// `sample_rate * duration` before flooring.
    pub fn sample_span(&self) -> f64 {
        self.sample_rate as f64 * self.duration
    }

    /// Phase in radians reached by a `frequency` Hz oscillator at the end of
    /// the buffer.
    pub fn final_phase(&self, frequency: f64) -> f64 {
        std::f64::consts::TAU * frequency * self.total_samples() as f64 / self.sample_rate as f64
    }

    /// Samples per cycle of the fundamental, untruncated.
    pub fn cycle_length(&self) -> f64 {
        self.sample_rate as f64 / self.frequency
    }

    /// Resolves the Karplus-Strong delay line length in samples.
    ///
    /// An explicit delay wins; otherwise the delay is the cycle length
    /// rounded to the nearest sample. A negative explicit delay resolves to 0.
    pub fn karplus_delay(&self, params: &KarplusStrongParams) -> usize {
        match params.delay {
            Some(delay) => usize::try_from(delay).unwrap_or(0),
            None => {
                let derived = self.cycle_length().round();
                if derived.is_finite() && derived > 0.0 {
                    derived as usize
                } else {
                    0
                }
            }
        }
    }
}

/// Waveform type with its type-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Waveform {
    /// Sine wave from the closed-form time-domain formula.
    SineTime,
    /// Square wave from the integer cycle position.
    SquareTime,
    /// Downward ramp from the integer cycle position.
    SawtoothTime,
    /// Square wave from odd harmonics weighted `1/k`.
    SquareAdditive,
    /// Sawtooth wave from all harmonics weighted `1/k`.
    SawtoothAdditive,
    /// Triangle wave from odd cosine harmonics weighted `1/k²`.
    TriangleAdditive,
    /// Up to ten harmonics with caller-supplied weights.
    #[serde(rename = "customized-additive-synthesis")]
    CustomAdditive {
        /// Coefficient per harmonic; index 0 weights harmonic 1.
        harmonics: Vec<f64>,
    },
    /// Uniform white noise.
    WhiteNoise,
    /// Plucked string physical model.
    KarplusStrong(KarplusStrongParams),
    /// Two-oscillator frequency modulation.
    Fm(FmParams),
    /// Bipolar impulse once per cycle.
    RepeatingNarrowPulse,
}

impl Waveform {
    /// Returns the field-less discriminant.
    pub fn waveform_type(&self) -> WaveformType {
        match self {
            Waveform::SineTime => WaveformType::SineTime,
            Waveform::SquareTime => WaveformType::SquareTime,
            Waveform::SawtoothTime => WaveformType::SawtoothTime,
            Waveform::SquareAdditive => WaveformType::SquareAdditive,
            Waveform::SawtoothAdditive => WaveformType::SawtoothAdditive,
            Waveform::TriangleAdditive => WaveformType::TriangleAdditive,
            Waveform::CustomAdditive { .. } => WaveformType::CustomAdditive,
            Waveform::WhiteNoise => WaveformType::WhiteNoise,
            Waveform::KarplusStrong(_) => WaveformType::KarplusStrong,
            Waveform::Fm(_) => WaveformType::Fm,
            Waveform::RepeatingNarrowPulse => WaveformType::RepeatingNarrowPulse,
        }
    }
}

/// Waveform type ids, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveformType {
    SineTime,
    SquareTime,
    SawtoothTime,
    SquareAdditive,
    SawtoothAdditive,
    TriangleAdditive,
    CustomAdditive,
    WhiteNoise,
    KarplusStrong,
    Fm,
    RepeatingNarrowPulse,
}

impl WaveformType {
    /// All supported waveform types.
    pub const ALL: [WaveformType; 11] = [
        WaveformType::SineTime,
        WaveformType::SquareTime,
        WaveformType::SawtoothTime,
        WaveformType::SquareAdditive,
        WaveformType::SawtoothAdditive,
        WaveformType::TriangleAdditive,
        WaveformType::CustomAdditive,
        WaveformType::WhiteNoise,
        WaveformType::KarplusStrong,
        WaveformType::Fm,
        WaveformType::RepeatingNarrowPulse,
    ];

    /// Returns the type id used in JSON requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveformType::SineTime => "sine-time",
            WaveformType::SquareTime => "square-time",
            WaveformType::SawtoothTime => "sawtooth-time",
            WaveformType::SquareAdditive => "square-additive",
            WaveformType::SawtoothAdditive => "sawtooth-additive",
            WaveformType::TriangleAdditive => "triangle-additive",
            WaveformType::CustomAdditive => "customized-additive-synthesis",
            WaveformType::WhiteNoise => "white-noise",
            WaveformType::KarplusStrong => "karplus-strong",
            WaveformType::Fm => "fm",
            WaveformType::RepeatingNarrowPulse => "repeating-narrow-pulse",
        }
    }

    /// Returns true if the generator consumes randomness.
    pub fn is_stochastic(&self) -> bool {
        matches!(self, WaveformType::WhiteNoise | WaveformType::KarplusStrong)
    }
}

impl fmt::Display for WaveformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WaveformType {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WaveformType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| RequestError::UnsupportedType {
                name: s.to_string(),
            })
    }
}

/// Initial content of the Karplus-Strong delay line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Excitation {
    /// Uniform noise in [-amp, amp].
    #[default]
    WhiteNoise,
    /// Linear ramp from +amp down to -amp across the delay line.
    Sawtooth,
}

/// Karplus-Strong parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KarplusStrongParams {
    /// Seed signal for the delay line.
    #[serde(default)]
    pub excitation: Excitation,
    /// Probability (0.0 to 1.0) of keeping the averaged sample's sign.
    pub blend: f64,
    /// Delay line length in samples. Derived from the frequency when absent.
    ///
    /// Signed so that a negative value reaches validation as `E007`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<i64>,
}

impl KarplusStrongParams {
    /// Creates parameters with a frequency-derived delay.
    pub fn new(excitation: Excitation, blend: f64) -> Self {
        Self {
            excitation,
            blend,
            delay: None,
        }
    }

    /// Sets an explicit delay line length.
    pub fn with_delay(mut self, delay: i64) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// FM synthesis parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FmParams {
    /// Carrier frequency in Hz, or a multiple of the base frequency.
    pub carrier_frequency: f64,
    /// Carrier amplitude.
    #[serde(default = "default_carrier_amplitude")]
    pub carrier_amplitude: f64,
    /// Modulator frequency in Hz, or a multiple of the base frequency.
    pub modulation_frequency: f64,
    /// Modulator amplitude (peak phase deviation in radians).
    pub modulation_amplitude: f64,
    /// Treat both frequencies as multiples of the request frequency.
    #[serde(default)]
    pub use_frequency_multiplier: bool,
    /// Optional ADSR envelope applied to the modulator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope: Option<AdsrEnvelope>,
}

fn default_carrier_amplitude() -> f64 {
    1.0
}

impl FmParams {
    /// Creates FM parameters with absolute frequencies and no envelope.
    pub fn new(
        carrier_frequency: f64,
        carrier_amplitude: f64,
        modulation_frequency: f64,
        modulation_amplitude: f64,
    ) -> Self {
        Self {
            carrier_frequency,
            carrier_amplitude,
            modulation_frequency,
            modulation_amplitude,
            use_frequency_multiplier: false,
            envelope: None,
        }
    }

    /// Interprets both frequencies as multiples of the request frequency.
    pub fn with_frequency_multiplier(mut self) -> Self {
        self.use_frequency_multiplier = true;
        self
    }

    /// Sets the modulator envelope.
    pub fn with_envelope(mut self, envelope: AdsrEnvelope) -> Self {
        self.envelope = Some(envelope);
        self
    }

    /// Returns `(carrier_hz, modulator_hz)` for the given base frequency.
    pub fn resolved_frequencies(&self, base_frequency: f64) -> (f64, f64) {
        if self.use_frequency_multiplier {
            (
                self.carrier_frequency * base_frequency,
                self.modulation_frequency * base_frequency,
            )
        } else {
            (self.carrier_frequency, self.modulation_frequency)
        }
    }
}

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdsrEnvelope {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl AdsrEnvelope {
    /// Creates new ADSR parameters.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }

    /// Returns the attack, decay, and release lengths in (fractional) samples.
    pub fn phase_lengths(&self, sample_rate: f64) -> (f64, f64, f64) {
        (
            self.attack * sample_rate,
            self.decay * sample_rate,
            self.release * sample_rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_total_samples_floors() {
        let request = WaveformRequest::new(Waveform::SineTime, 440.0, 1.0, 0.1)
            .with_sample_rate(44100);
        assert_eq!(request.total_samples(), 4410);

        let request = WaveformRequest::new(Waveform::SineTime, 440.0, 1.0, 0.00001)
            .with_sample_rate(44100);
        assert_eq!(request.total_samples(), 0);
    }

    #[test]
    fn test_total_samples_negative_duration_is_zero() {
        let request = WaveformRequest::new(Waveform::SineTime, 440.0, 1.0, -1.0);
        assert_eq!(request.total_samples(), 0);
    }

    #[test]
    fn test_negative_delay_parses() {
        let json = r#"{
            "frequency": 440.0,
            "amplitude": 0.5,
            "duration": 1.0,
            "waveform": { "type": "karplus-strong", "blend": 0.5, "delay": -5 }
        }"#;
        let request = WaveformRequest::from_json(json).unwrap();
        match request.waveform {
            Waveform::KarplusStrong(params) => assert_eq!(params.delay, Some(-5)),
            other => panic!("unexpected waveform: {:?}", other),
        }
    }

    #[test]
    fn test_final_phase() {
        let request = WaveformRequest::new(Waveform::SineTime, 1.0, 1.0, 1.0).with_sample_rate(8000);
        assert!((request.final_phase(1.0) - std::f64::consts::TAU).abs() < 1e-12);

        let request = WaveformRequest::new(Waveform::SineTime, 1e308, 1.0, 0.001).with_sample_rate(8000);
        assert!(!request.final_phase(1e308).is_finite());
    }

    #[test]
    fn test_karplus_delay_rounds_cycle() {
        let params = KarplusStrongParams::new(Excitation::WhiteNoise, 0.5);
        let request = WaveformRequest::new(Waveform::KarplusStrong(params.clone()), 440.0, 1.0, 1.0);
        // 44100 / 440 = 100.227
        assert_eq!(request.karplus_delay(&params), 100);

        let request = WaveformRequest::new(Waveform::KarplusStrong(params.clone()), 441.0, 1.0, 1.0)
            .with_sample_rate(44100);
        assert_eq!(request.karplus_delay(&params), 100);

        let explicit = params.with_delay(37);
        assert_eq!(request.karplus_delay(&explicit), 37);

        let negative = KarplusStrongParams::new(Excitation::WhiteNoise, 0.5).with_delay(-3);
        assert_eq!(request.karplus_delay(&negative), 0);
    }

    #[test]
    fn test_waveform_type_round_trip_ids() {
        for ty in WaveformType::ALL {
            assert_eq!(ty.as_str().parse::<WaveformType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_type_id_is_unsupported() {
        let err = "wavetable".parse::<WaveformType>().unwrap_err();
        assert!(matches!(err, RequestError::UnsupportedType { ref name } if name == "wavetable"));
    }

    #[test]
    fn test_from_json_karplus() {
        let json = r#"{
            "frequency": 220.0,
            "amplitude": 0.5,
            "duration": 1.0,
            "sample_rate": 22050,
            "waveform": { "type": "karplus-strong", "excitation": "sawtooth", "blend": 0.9, "delay": 64 }
        }"#;
        let request = WaveformRequest::from_json(json).unwrap();
        assert_eq!(
            request.waveform,
            Waveform::KarplusStrong(KarplusStrongParams {
                excitation: Excitation::Sawtooth,
                blend: 0.9,
                delay: Some(64),
            })
        );
        assert_eq!(request.waveform_type(), WaveformType::KarplusStrong);
    }

    #[test]
    fn test_from_json_defaults_sample_rate() {
        let json = r#"{
            "frequency": 440.0,
            "amplitude": 1.0,
            "duration": 0.5,
            "waveform": { "type": "customized-additive-synthesis", "harmonics": [1.0, 0.0, 0.3] }
        }"#;
        let request = WaveformRequest::from_json(json).unwrap();
        assert_eq!(request.sample_rate, DEFAULT_SAMPLE_RATE);
        assert_eq!(
            request.waveform,
            Waveform::CustomAdditive {
                harmonics: vec![1.0, 0.0, 0.3]
            }
        );
    }

    #[test]
    fn test_from_json_unknown_type() {
        let json = r#"{
            "frequency": 440.0,
            "amplitude": 1.0,
            "duration": 0.5,
            "waveform": { "type": "granular" }
        }"#;
        let err = WaveformRequest::from_json(json).unwrap_err();
        assert!(matches!(err, RequestError::UnsupportedType { .. }));
    }

    #[test]
    fn test_from_json_malformed_is_json_error() {
        let err = WaveformRequest::from_json("{ not json").unwrap_err();
        assert!(matches!(err, RequestError::Json(_)));
    }

    #[test]
    fn test_fm_json_round_trip() {
        let request = WaveformRequest::new(
            Waveform::Fm(
                FmParams::new(2.0, 1.0, 3.0, 4.0)
                    .with_frequency_multiplier()
                    .with_envelope(AdsrEnvelope::new(0.125, 0.25, 0.5, 0.25)),
            ),
            110.0,
            0.75,
            1.0,
        );
        let json = request.to_json_pretty().unwrap();
        assert!(json.contains("\"type\": \"fm\""));
        let parsed = WaveformRequest::from_json(&json).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_fm_resolved_frequencies() {
        let params = FmParams::new(2.0, 1.0, 0.5, 1.0);
        assert_eq!(params.resolved_frequencies(100.0), (2.0, 0.5));
        let params = params.with_frequency_multiplier();
        assert_eq!(params.resolved_frequencies(100.0), (200.0, 50.0));
    }
}
