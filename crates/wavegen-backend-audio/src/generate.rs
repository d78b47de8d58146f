//! Main entry point for waveform generation.
//!
//! [`generate`] validates the request, then hands it to the one synthesizer
//! that matches its waveform type. Nothing is synthesized for a request that
//! fails validation.

use rand::RngCore;
use tracing::{debug, trace, warn};
use wavegen_spec::{validate_request, Waveform, WaveformRequest};

use crate::error::{AudioError, AudioResult};
use crate::rng::create_waveform_rng;
use crate::sequence::SampleSequence;
use crate::synthesis::fm::FmSynth;
use crate::synthesis::harmonics::{AdditiveSeries, CustomAdditive, HarmonicLaw};
use crate::synthesis::karplus::KarplusStrong;
use crate::synthesis::noise::WhiteNoise;
use crate::synthesis::oscillators::{SawtoothTime, SineTime, SquareTime};
use crate::synthesis::pulse::NarrowPulseTrain;
use crate::synthesis::Synthesizer;

/// Generates the samples described by a request.
///
/// # Arguments
/// * `request` - The synthesis job
/// * `rng` - Randomness source for white noise and Karplus-Strong
///
/// # Returns
/// A sequence of exactly `floor(sample_rate * duration)` samples, or
/// `AudioError::Request` if the request is invalid
pub fn generate(request: &WaveformRequest, rng: &mut dyn RngCore) -> AudioResult<SampleSequence> {
    let warnings = validate_request(request).into_result()?;
    for warning in &warnings {
        warn!(code = %warning.code, "{}", warning.message);
    }

    let num_samples = request.total_samples();
    let sample_rate = request.sample_rate as f64;
    debug!(
        waveform = %request.waveform_type(),
        stochastic = request.waveform_type().is_stochastic(),
        num_samples,
        sample_rate = request.sample_rate,
        "generating waveform"
    );

    let synth = synthesizer_for(request);
    let samples = synth.synthesize(num_samples, sample_rate, rng);

    if samples.len() != num_samples {
        return Err(AudioError::synthesis(format!(
            "{} produced {} samples, expected {}",
            request.waveform_type(),
            samples.len(),
            num_samples
        )));
    }

    Ok(SampleSequence::new(samples, request.sample_rate))
}

/// Generates the samples described by a request using a seeded PCG32 stream.
///
/// The stream is derived from `seed` and the waveform type id, so the same
/// request and seed always produce the same samples.
pub fn generate_seeded(request: &WaveformRequest, seed: u32) -> AudioResult<SampleSequence> {
    let mut rng = create_waveform_rng(seed, request.waveform_type());
    generate(request, &mut rng)
}

/// Builds the synthesizer for a request's waveform type.
fn synthesizer_for(request: &WaveformRequest) -> Box<dyn Synthesizer> {
    let frequency = request.frequency;
    let amplitude = request.amplitude;

    match &request.waveform {
        Waveform::SineTime => Box::new(SineTime::new(frequency, amplitude)),
        Waveform::SquareTime => Box::new(SquareTime::new(frequency, amplitude)),
        Waveform::SawtoothTime => Box::new(SawtoothTime::new(frequency, amplitude)),
        Waveform::SquareAdditive => additive(request, HarmonicLaw::Square),
        Waveform::SawtoothAdditive => additive(request, HarmonicLaw::Sawtooth),
        Waveform::TriangleAdditive => additive(request, HarmonicLaw::Triangle),
        Waveform::CustomAdditive { harmonics } => {
            let synth = CustomAdditive::new(frequency, amplitude, harmonics.clone());
            trace!(
                harmonics = synth.harmonics(request.sample_rate as f64).len(),
                "custom additive series"
            );
            Box::new(synth)
        }
        Waveform::WhiteNoise => Box::new(WhiteNoise::new(amplitude)),
        Waveform::KarplusStrong(params) => {
            let delay = request.karplus_delay(params);
            trace!(delay, derived = params.delay.is_none(), "karplus-strong delay line");
            Box::new(KarplusStrong::new(
                amplitude,
                params.blend,
                delay,
                params.excitation,
            ))
        }
        Waveform::Fm(params) => {
            let (carrier_freq, modulator_freq) = params.resolved_frequencies(frequency);
            let synth = FmSynth::new(
                amplitude,
                carrier_freq,
                params.carrier_amplitude,
                modulator_freq,
                params.modulation_amplitude,
            );
            match params.envelope {
                Some(envelope) => Box::new(synth.with_envelope(envelope)),
                None => Box::new(synth),
            }
        }
        Waveform::RepeatingNarrowPulse => Box::new(NarrowPulseTrain::new(frequency, amplitude)),
    }
}

fn additive(request: &WaveformRequest, law: HarmonicLaw) -> Box<dyn Synthesizer> {
    let synth = AdditiveSeries::new(request.frequency, request.amplitude, law);
    trace!(
        ?law,
        harmonics = synth.harmonics(request.sample_rate as f64).len(),
        "additive series"
    );
    Box::new(synth)
}
