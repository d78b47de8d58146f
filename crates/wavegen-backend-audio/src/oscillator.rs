//! Scalar helpers shared by the synthesizers.

use std::f64::consts::PI;

/// 2π.
pub const TWO_PI: f64 = 2.0 * PI;

/// Linear interpolation: `a + (b - a) * frac`.
#[inline]
pub fn lerp(a: f64, b: f64, frac: f64) -> f64 {
    a + (b - a) * frac
}

/// Samples per cycle at `frequency`, untruncated.
#[inline]
pub fn cycle_length(sample_rate: f64, frequency: f64) -> f64 {
    sample_rate / frequency
}

/// Samples per cycle truncated to an integer.
///
/// The time-domain square and sawtooth generators take the sample position
/// modulo this value. Dropping the fractional part makes each period drift
/// from the true frequency when the sample rate is not a multiple of it.
/// Returns `None` when the cycle is shorter than one sample.
#[inline]
pub fn integer_cycle(sample_rate: f64, frequency: f64) -> Option<usize> {
    let cycle = cycle_length(sample_rate, frequency).floor();
    if cycle.is_finite() && cycle >= 1.0 {
        Some(cycle as usize)
    } else {
        None
    }
}

/// Harmonic numbers `k = 1, 1 + step, 1 + 2*step, ...` with `k * frequency < nyquist`.
///
/// The bound is strict: a harmonic landing exactly on Nyquist is excluded.
/// Use `step = 1` for every harmonic and `step = 2` for odd harmonics only.
pub fn harmonic_numbers(frequency: f64, nyquist: f64, step: usize) -> impl Iterator<Item = usize> {
    (1usize..)
        .step_by(step.max(1))
        .take_while(move |&k| (k as f64) * frequency < nyquist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 1.0, 0.25), 0.25);
        assert_eq!(lerp(1.0, 0.5, 1.0), 0.5);
        assert_eq!(lerp(0.7, 0.0, 0.0), 0.7);
    }

    #[test]
    fn test_integer_cycle_truncates() {
        assert_eq!(integer_cycle(44100.0, 440.0), Some(100));
        assert_eq!(integer_cycle(8.0, 2.0), Some(4));
        assert_eq!(integer_cycle(44100.0, 50_000.0), None);
    }

    #[test]
    fn test_harmonic_numbers_all() {
        let ks: Vec<usize> = harmonic_numbers(1000.0, 4000.0, 1).collect();
        assert_eq!(ks, vec![1, 2, 3]);
    }

    #[test]
    fn test_harmonic_numbers_odd() {
        let ks: Vec<usize> = harmonic_numbers(1000.0, 8000.0, 2).collect();
        assert_eq!(ks, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_harmonic_numbers_strict_bound() {
        // 2 * 2000 == 4000 is excluded.
        let ks: Vec<usize> = harmonic_numbers(2000.0, 4000.0, 1).collect();
        assert_eq!(ks, vec![1]);
    }

    #[test]
    fn test_harmonic_numbers_fundamental_above_nyquist() {
        assert_eq!(harmonic_numbers(5000.0, 4000.0, 1).count(), 0);
    }
}
