//! Time-domain oscillators (sine, square, sawtooth).
//!
//! Each sample is a closed-form function of its index; there is no state
//! carried from one sample to the next.

use rand::RngCore;

use crate::oscillator::{cycle_length, integer_cycle, TWO_PI};

use super::Synthesizer;

/// Sine wave: `amp * sin(2π·f·i/sr)`.
#[derive(Debug, Clone)]
pub struct SineTime {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl SineTime {
    /// Creates a new sine oscillator.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for SineTime {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                self.amplitude * (TWO_PI * self.frequency * t).sin()
            })
            .collect()
    }
}

/// Square wave from the position inside an integer-length cycle.
///
/// The cycle used for the modulo is truncated to whole samples while the
/// half-cycle threshold is not, so at non-integer samples-per-cycle the
/// period is slightly short and the duty cycle slightly off 50%.
#[derive(Debug, Clone)]
pub struct SquareTime {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl SquareTime {
    /// Creates a new square oscillator.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for SquareTime {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        let Some(cycle) = integer_cycle(sample_rate, self.frequency) else {
            return vec![0.0; num_samples];
        };
        let half_cycle = cycle_length(sample_rate, self.frequency) / 2.0;

        (0..num_samples)
            .map(|i| {
                if ((i % cycle) as f64) < half_cycle {
                    self.amplitude
                } else {
                    -self.amplitude
                }
            })
            .collect()
    }
}

/// Downward ramp from +amp to -amp once per cycle.
///
/// Like [`SquareTime`], the position is taken modulo the truncated cycle,
/// but it is divided by the untruncated cycle length, so the ramp stops a
/// little short of -amp when the cycle is not a whole number of samples.
#[derive(Debug, Clone)]
pub struct SawtoothTime {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl SawtoothTime {
    /// Creates a new sawtooth oscillator.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for SawtoothTime {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        let Some(cycle) = integer_cycle(sample_rate, self.frequency) else {
            return vec![0.0; num_samples];
        };
        let one_cycle = cycle_length(sample_rate, self.frequency);

        (0..num_samples)
            .map(|i| {
                let fraction = (i % cycle) as f64 / one_cycle;
                self.amplitude * (2.0 * (1.0 - fraction) - 1.0)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_sine_matches_formula() {
        let synth = SineTime::new(440.0, 0.5);
        let mut rng = create_rng(42);
        let samples = synth.synthesize(1000, 44100.0, &mut rng);

        assert_eq!(samples.len(), 1000);
        for (i, &s) in samples.iter().enumerate() {
            let expected = 0.5 * (2.0 * std::f64::consts::PI * 440.0 * i as f64 / 44100.0).sin();
            assert!((s - expected).abs() < 1e-9, "sample {} differs", i);
        }
    }

    #[test]
    fn test_square_integer_cycle() {
        let synth = SquareTime::new(2.0, 1.0);
        let mut rng = create_rng(42);
        let samples = synth.synthesize(8, 8.0, &mut rng);
        assert_eq!(samples, vec![1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_square_truncated_cycle() {
        // 10 / 3 = 3.33 samples per cycle: modulo 3, threshold 1.67.
        let synth = SquareTime::new(3.0, 1.0);
        let mut rng = create_rng(42);
        let samples = synth.synthesize(6, 10.0, &mut rng);
        assert_eq!(samples, vec![1.0, 1.0, -1.0, 1.0, 1.0, -1.0]);
    }

    #[test]
    fn test_sawtooth_ramps_down() {
        let synth = SawtoothTime::new(1.0, 1.0);
        let mut rng = create_rng(42);
        let samples = synth.synthesize(8, 4.0, &mut rng);
        assert_eq!(samples, vec![1.0, 0.5, 0.0, -0.5, 1.0, 0.5, 0.0, -0.5]);
    }

    #[test]
    fn test_degenerate_cycle_is_silent() {
        let mut rng = create_rng(42);
        let square = SquareTime::new(100.0, 1.0).synthesize(4, 50.0, &mut rng);
        let saw = SawtoothTime::new(100.0, 1.0).synthesize(4, 50.0, &mut rng);
        assert_eq!(square, vec![0.0; 4]);
        assert_eq!(saw, vec![0.0; 4]);
    }
}
