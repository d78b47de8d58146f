//! Repeating narrow pulse.
//!
//! Emits `+amp` on the first sample of every integer cycle, `-amp` on the
//! second, and silence elsewhere. Useful as an excitation or test signal.

use rand::RngCore;

use crate::oscillator::integer_cycle;

use super::Synthesizer;

/// Bipolar impulse train.
#[derive(Debug, Clone)]
pub struct NarrowPulseTrain {
    /// Pulse rate in Hz.
    pub frequency: f64,
    /// Pulse height.
    pub amplitude: f64,
}

impl NarrowPulseTrain {
    /// Creates a new pulse train.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for NarrowPulseTrain {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        let Some(cycle) = integer_cycle(sample_rate, self.frequency) else {
            return vec![0.0; num_samples];
        };

        (0..num_samples)
            .map(|i| match i % cycle {
                0 => self.amplitude,
                1 => -self.amplitude,
                _ => 0.0,
            })
            .collect()
    }
}
