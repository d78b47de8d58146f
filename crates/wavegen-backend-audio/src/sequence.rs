//! The generated sample buffer.

use std::ops::Index;

/// An ordered, fixed-length sequence of samples.
///
/// Index is the sample position. Values are bounded informally by the
/// request amplitude; additive and FM output may overshoot it.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl SampleSequence {
    /// Wraps generated samples.
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the sequence holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample rate the sequence was generated at.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Borrow the samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Take ownership of the samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.samples.len() as f64 / self.sample_rate as f64
        }
    }

    /// Largest absolute sample value, or 0 for an empty sequence.
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
    }

    /// Root mean square, or 0 for an empty sequence.
    pub fn rms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = self.samples.iter().map(|s| s * s).sum();
        (sum_sq / self.samples.len() as f64).sqrt()
    }

    /// BLAKE3 hash of the samples as little-endian `f64` bytes, hex encoded.
    pub fn pcm_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for sample in &self.samples {
            hasher.update(&sample.to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}

impl Index<usize> for SampleSequence {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.samples[index]
    }
}

impl AsRef<[f64]> for SampleSequence {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}
