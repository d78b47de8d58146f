//! Synthesis modules for each waveform family.
//!
//! Each module implements one family of generators:
//! - `oscillators` - Time-domain sine, square, and sawtooth
//! - `harmonics` - Additive series truncated below Nyquist
//! - `karplus` - Karplus-Strong plucked string
//! - `fm` - FM synthesis with optional ADSR on the modulator
//! - `noise` - White noise
//! - `pulse` - Repeating narrow pulse
//!
//! Synthesizers are leaves: none calls another, and all share only the
//! helpers in [`crate::oscillator`] and [`crate::envelope`].

pub mod fm;
pub mod harmonics;
pub mod karplus;
pub mod noise;
pub mod oscillators;
pub mod pulse;

use rand::RngCore;

/// Common trait for all synthesis modules.
pub trait Synthesizer {
    /// Generates audio samples.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - Randomness source; deterministic generators leave it untouched
    ///
    /// # Returns
    /// Exactly `num_samples` samples, scaled by the synthesizer's amplitude
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut dyn RngCore) -> Vec<f64>;
}
