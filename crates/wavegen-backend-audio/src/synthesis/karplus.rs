//! Karplus-Strong synthesis for plucked string sounds.
//!
//! The buffer is split into two regions. Samples `0..=delay` are copied from
//! an excitation signal. Every later sample averages the two samples one
//! delay line back and, with probability `1 - blend`, flips the sign of the
//! average. The averaging is a lowpass filter inside the feedback loop; the
//! random sign flips make the string decay faster, so a higher blend rings
//! longer.

use rand::{Rng, RngCore};
use wavegen_spec::Excitation;

use super::Synthesizer;

/// Karplus-Strong synthesis parameters.
#[derive(Debug, Clone)]
pub struct KarplusStrong {
    /// Peak amplitude of the excitation.
    pub amplitude: f64,
    /// Probability (0.0 to 1.0) of keeping the averaged sample's sign.
    pub blend: f64,
    /// Delay line length in samples. Sets the pitch.
    pub delay: usize,
    /// Excitation signal for the seed region.
    pub excitation: Excitation,
}

impl KarplusStrong {
    /// Creates a new Karplus-Strong synthesizer.
    pub fn new(amplitude: f64, blend: f64, delay: usize, excitation: Excitation) -> Self {
        Self {
            amplitude,
            blend,
            delay,
            excitation,
        }
    }

    fn excite(&self, i: usize, rng: &mut dyn RngCore) -> f64 {
        match self.excitation {
            Excitation::WhiteNoise => self.amplitude * (rng.gen::<f64>() * 2.0 - 1.0),
            Excitation::Sawtooth => {
                let fraction = i as f64 / self.delay as f64;
                self.amplitude * (2.0 * (1.0 - fraction) - 1.0)
            }
        }
    }
}

impl Synthesizer for KarplusStrong {
    fn synthesize(&self, num_samples: usize, _sample_rate: f64, rng: &mut dyn RngCore) -> Vec<f64> {
        if self.delay == 0 {
            return vec![0.0; num_samples];
        }

        let mut output: Vec<f64> = Vec::with_capacity(num_samples);

        for i in 0..num_samples {
            let sample = if i <= self.delay {
                self.excite(i, rng)
            } else {
                // i > delay, so i - delay - 1 >= 0.
                let average = 0.5 * (output[i - self.delay] + output[i - self.delay - 1]);
                if rng.gen::<f64>() < self.blend {
                    average
                } else {
                    -average
                }
            };
            output.push(sample);
        }

        output
    }
}
