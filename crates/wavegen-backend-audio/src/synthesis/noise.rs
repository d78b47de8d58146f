//! White noise.

use rand::{Rng, RngCore};

use super::Synthesizer;

/// Uniform white noise in `[-amp, amp)`.
#[derive(Debug, Clone)]
pub struct WhiteNoise {
    /// Peak amplitude.
    pub amplitude: f64,
}

impl WhiteNoise {
    /// Creates a new white noise generator.
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }
}

impl Synthesizer for WhiteNoise {
    fn synthesize(&self, num_samples: usize, _sample_rate: f64, rng: &mut dyn RngCore) -> Vec<f64> {
        (0..num_samples)
            .map(|_| self.amplitude * (rng.gen::<f64>() * 2.0 - 1.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_noise_range_and_mean() {
        let synth = WhiteNoise::new(0.5);
        let mut rng = create_rng(42);
        let samples = synth.synthesize(10_000, 44100.0, &mut rng);

        assert!(samples.iter().all(|s| (-0.5..0.5).contains(s)));
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!(mean.abs() < 0.05);
    }

    #[test]
    fn test_noise_with_fixed_source() {
        let synth = WhiteNoise::new(1.0);
        let mut rng = StepRng::new(0, 0);
        assert_eq!(synth.synthesize(3, 44100.0, &mut rng), vec![-1.0; 3]);
    }

    #[test]
    fn test_noise_determinism() {
        let synth = WhiteNoise::new(1.0);
        let mut rng1 = create_rng(5);
        let mut rng2 = create_rng(5);
        assert_eq!(
            synth.synthesize(64, 44100.0, &mut rng1),
            synth.synthesize(64, 44100.0, &mut rng2)
        );
    }
}
