//! Additive synthesis with harmonic series truncated below Nyquist.
//!
//! Each sample is a weighted sum of sinusoids at integer multiples of the
//! fundamental. Harmonic `k` is included only while `k * frequency` is
//! strictly below Nyquist, so no partial folds back as an alias.

use rand::RngCore;
use wavegen_spec::MAX_CUSTOM_HARMONICS;

use crate::oscillator::{harmonic_numbers, TWO_PI};

use super::Synthesizer;

/// Fixed Fourier-series law approximating a classic waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonicLaw {
    /// Odd harmonics, `sin`, weight `1/k`.
    Square,
    /// All harmonics, `sin`, weight `1/k`.
    Sawtooth,
    /// Odd harmonics, `cos`, weight `1/k²`.
    Triangle,
}

impl HarmonicLaw {
    /// Distance between consecutive harmonic numbers.
    pub fn step(&self) -> usize {
        match self {
            HarmonicLaw::Sawtooth => 1,
            HarmonicLaw::Square | HarmonicLaw::Triangle => 2,
        }
    }

    /// Contribution of harmonic `k` at phase `2π·k·f·t`.
    #[inline]
    fn partial(&self, k: f64, phase: f64) -> f64 {
        match self {
            HarmonicLaw::Square | HarmonicLaw::Sawtooth => (1.0 / k) * phase.sin(),
            HarmonicLaw::Triangle => (1.0 / (k * k)) * phase.cos(),
        }
    }
}

/// Additive synthesizer following a fixed harmonic law.
#[derive(Debug, Clone)]
pub struct AdditiveSeries {
    /// Fundamental frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude applied to the summed series.
    pub amplitude: f64,
    /// Harmonic selection and weighting.
    pub law: HarmonicLaw,
}

impl AdditiveSeries {
    /// Creates a new additive synthesizer.
    pub fn new(frequency: f64, amplitude: f64, law: HarmonicLaw) -> Self {
        Self {
            frequency,
            amplitude,
            law,
        }
    }

    /// Creates a square-like series (odd harmonics).
    pub fn square(frequency: f64, amplitude: f64) -> Self {
        Self::new(frequency, amplitude, HarmonicLaw::Square)
    }

    /// Creates a sawtooth-like series (all harmonics).
    pub fn sawtooth(frequency: f64, amplitude: f64) -> Self {
        Self::new(frequency, amplitude, HarmonicLaw::Sawtooth)
    }

    /// Creates a triangle-like series (odd cosine harmonics).
    pub fn triangle(frequency: f64, amplitude: f64) -> Self {
        Self::new(frequency, amplitude, HarmonicLaw::Triangle)
    }

    /// Harmonic numbers summed at the given sample rate.
    pub fn harmonics(&self, sample_rate: f64) -> Vec<usize> {
        harmonic_numbers(self.frequency, sample_rate / 2.0, self.law.step()).collect()
    }
}

impl Synthesizer for AdditiveSeries {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        let harmonics: Vec<f64> = self
            .harmonics(sample_rate)
            .into_iter()
            .map(|k| k as f64)
            .collect();

        (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                let sample: f64 = harmonics
                    .iter()
                    .map(|&k| self.law.partial(k, TWO_PI * k * self.frequency * t))
                    .sum();
                self.amplitude * sample
            })
            .collect()
    }
}

/// Additive synthesizer with caller-supplied weights for harmonics 1..=10.
#[derive(Debug, Clone)]
pub struct CustomAdditive {
    /// Fundamental frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude applied to the summed series.
    pub amplitude: f64,
    /// Weight per harmonic; index 0 weights the fundamental. Missing entries are zero.
    pub coefficients: Vec<f64>,
}

impl CustomAdditive {
    /// Creates a new custom additive synthesizer.
    pub fn new(frequency: f64, amplitude: f64, coefficients: Vec<f64>) -> Self {
        Self {
            frequency,
            amplitude,
            coefficients,
        }
    }

    /// Harmonic numbers summed at the given sample rate, capped at ten.
    pub fn harmonics(&self, sample_rate: f64) -> Vec<usize> {
        harmonic_numbers(self.frequency, sample_rate / 2.0, 1)
            .take(MAX_CUSTOM_HARMONICS)
            .collect()
    }

    fn coefficient(&self, k: usize) -> f64 {
        self.coefficients.get(k - 1).copied().unwrap_or(0.0)
    }
}

impl Synthesizer for CustomAdditive {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        let partials: Vec<(f64, f64)> = self
            .harmonics(sample_rate)
            .into_iter()
            .map(|k| (k as f64, self.coefficient(k)))
            .collect();

        (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                let sample: f64 = partials
                    .iter()
                    .map(|&(k, coeff)| coeff * (TWO_PI * k * self.frequency * t).sin())
                    .sum();
                self.amplitude * sample
            })
            .collect()
    }
}
