//! FM (Frequency Modulation) synthesis.
//!
//! The carrier's phase is offset by the modulator's output:
//!
//! ```text
//! modulator = mod_amp * env(i) * sin(2π·f_mod·t)
//! carrier   = carrier_amp * sin(2π·f_carrier·t + modulator)
//! ```
//!
//! With an ADSR envelope the modulation depth, and so the brightness of the
//! tone, follows the envelope while the carrier level stays constant.

use rand::RngCore;
use wavegen_spec::AdsrEnvelope;

use crate::envelope::AdsrShape;
use crate::oscillator::TWO_PI;

use super::Synthesizer;

/// FM synthesis parameters, with frequencies already resolved to Hz.
#[derive(Debug, Clone)]
pub struct FmSynth {
    /// Output amplitude.
    pub amplitude: f64,
    /// Carrier frequency in Hz.
    pub carrier_freq: f64,
    /// Carrier amplitude.
    pub carrier_amp: f64,
    /// Modulator frequency in Hz.
    pub modulator_freq: f64,
    /// Modulator amplitude (peak phase deviation in radians).
    pub modulator_amp: f64,
    /// Optional envelope on the modulator.
    pub envelope: Option<AdsrEnvelope>,
}

impl FmSynth {
    /// Creates a new FM synthesizer without an envelope.
    pub fn new(
        amplitude: f64,
        carrier_freq: f64,
        carrier_amp: f64,
        modulator_freq: f64,
        modulator_amp: f64,
    ) -> Self {
        Self {
            amplitude,
            carrier_freq,
            carrier_amp,
            modulator_freq,
            modulator_amp,
            envelope: None,
        }
    }

    /// Shapes the modulator with an ADSR envelope.
    pub fn with_envelope(mut self, envelope: AdsrEnvelope) -> Self {
        self.envelope = Some(envelope);
        self
    }
}

impl Synthesizer for FmSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        let shape = self
            .envelope
            .as_ref()
            .map(|env| AdsrShape::new(env, sample_rate));

        (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                let mut modulator = self.modulator_amp * (TWO_PI * self.modulator_freq * t).sin();
                if let Some(ref shape) = shape {
                    modulator *= shape.level_at(i, num_samples);
                }
                let carrier = self.carrier_amp * (TWO_PI * self.carrier_freq * t + modulator).sin();
                self.amplitude * carrier
            })
            .collect()
    }
}
