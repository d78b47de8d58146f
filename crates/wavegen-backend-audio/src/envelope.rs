//! ADSR envelope shape.
//!
//! The envelope is a pure function of the sample index and the buffer
//! length, so it can be evaluated at any point without stepping through
//! earlier samples.

use wavegen_spec::AdsrEnvelope;

use crate::oscillator::lerp;

/// Envelope phase at a given sample index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopePhase {
    /// Rising from 0 to 1.
    Attack,
    /// Falling from 1 to the sustain level.
    Decay,
    /// Held at the sustain level.
    Sustain,
    /// Falling from the sustain level to 0.
    Release,
}

/// ADSR envelope resolved to sample positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrShape {
    /// Attack length in samples.
    pub attack: f64,
    /// Decay length in samples.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release length in samples.
    pub release: f64,
}

impl AdsrShape {
    /// Resolves envelope durations in seconds to samples.
    pub fn new(envelope: &AdsrEnvelope, sample_rate: f64) -> Self {
        let (attack, decay, release) = envelope.phase_lengths(sample_rate);
        Self {
            attack,
            decay,
            sustain: envelope.sustain,
            release,
        }
    }

    /// Returns the phase that sample `i` falls in.
    pub fn phase_at(&self, i: usize, total_samples: usize) -> EnvelopePhase {
        let i = i as f64;
        if i <= self.attack {
            EnvelopePhase::Attack
        } else if i - self.attack <= self.decay {
            EnvelopePhase::Decay
        } else if i <= total_samples as f64 - self.release {
            EnvelopePhase::Sustain
        } else {
            EnvelopePhase::Release
        }
    }

    /// Envelope level at sample `i` of a `total_samples`-long buffer.
    ///
    /// Zero-length phases count as already complete, and the position inside
    /// each phase is clamped to [0, 1].
    pub fn level_at(&self, i: usize, total_samples: usize) -> f64 {
        let pos = i as f64;
        match self.phase_at(i, total_samples) {
            EnvelopePhase::Attack => lerp(0.0, 1.0, progress(pos, self.attack)),
            EnvelopePhase::Decay => {
                lerp(1.0, self.sustain, progress(pos - self.attack, self.decay))
            }
            EnvelopePhase::Sustain => self.sustain,
            EnvelopePhase::Release => {
                let release_start = total_samples as f64 - self.release;
                lerp(self.sustain, 0.0, progress(pos - release_start, self.release))
            }
        }
    }
}

fn progress(offset: f64, span: f64) -> f64 {
    if span <= 0.0 {
        1.0
    } else {
        (offset / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape() -> AdsrShape {
        // 100 samples attack, 100 decay, 0.5 sustain, 200 release at 1 kHz.
        AdsrShape::new(&AdsrEnvelope::new(0.1, 0.1, 0.5, 0.2), 1000.0)
    }

    #[test]
    fn test_attack_ramps_to_peak() {
        let env = shape();
        assert_eq!(env.level_at(0, 1000), 0.0);
        assert!((env.level_at(50, 1000) - 0.5).abs() < 1e-12);
        assert!((env.level_at(100, 1000) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_decay_reaches_sustain() {
        let env = shape();
        assert_eq!(env.phase_at(150, 1000), EnvelopePhase::Decay);
        assert!((env.level_at(150, 1000) - 0.75).abs() < 1e-12);
        assert!((env.level_at(200, 1000) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_sustain_is_exact() {
        let env = shape();
        for i in [201, 500, 800] {
            assert_eq!(env.phase_at(i, 1000), EnvelopePhase::Sustain);
            assert_eq!(env.level_at(i, 1000), 0.5);
        }
    }

    #[test]
    fn test_release_ends_at_zero() {
        let env = shape();
        assert_eq!(env.phase_at(801, 1000), EnvelopePhase::Release);
        assert!((env.level_at(900, 1000) - 0.25).abs() < 1e-12);
        assert_eq!(env.level_at(1000, 1000), 0.0);
    }

    #[test]
    fn test_zero_length_phases() {
        let env = AdsrShape::new(&AdsrEnvelope::new(0.0, 0.0, 0.3, 0.0), 1000.0);
        assert_eq!(env.level_at(0, 10), 1.0);
        assert_eq!(env.level_at(1, 10), 0.3);
        assert_eq!(env.level_at(9, 10), 0.3);
        assert!(env.level_at(0, 10).is_finite());
    }
}
