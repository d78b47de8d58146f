//! Wavegen Synthesis Engine
//!
//! This crate turns a [`WaveformRequest`](wavegen_spec::WaveformRequest) into a
//! finite buffer of samples.
//!
//! # Overview
//!
//! Each waveform type has its own synthesizer:
//!
//! - **Time domain** - Closed-form sine, square, and sawtooth
//! - **Additive** - Harmonic series truncated below Nyquist (square, sawtooth,
//!   triangle, and up to ten caller-weighted harmonics)
//! - **Karplus-Strong** - Delay-line feedback with a stochastic sign flip
//! - **FM** - Carrier phase-modulated by a second oscillator, optionally shaped by ADSR
//! - **Noise** - Uniform white noise
//! - **Pulse train** - One bipolar impulse per cycle
//!
//! # Determinism
//!
//! Only white noise and Karplus-Strong consume randomness, and they read it
//! exclusively from the source passed to [`generate()`]. Given the same
//! request and the same source state, the output is bit-identical.
//! [`generate_seeded()`] builds that source from a 32-bit seed using PCG32,
//! with the stream derived via BLAKE3.
//!
//! # Example
//!
//! ```
//! use wavegen_backend_audio::generate_seeded;
//! use wavegen_spec::{Waveform, WaveformRequest};
//!
//! let request = WaveformRequest::new(Waveform::SquareAdditive, 220.0, 0.5, 0.1)
//!     .with_sample_rate(8000);
//! let samples = generate_seeded(&request, 42).unwrap();
//! assert_eq!(samples.len(), 800);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Validation and dispatch by waveform type
//! - [`envelope`] - ADSR envelope shape
//! - [`oscillator`] - Shared scalar helpers
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`sequence`] - The generated sample buffer
//! - [`synthesis`] - One synthesizer per waveform family

pub mod envelope;
pub mod error;
pub mod generate;
pub mod oscillator;
pub mod rng;
pub mod sequence;
pub mod synthesis;

pub use error::{AudioError, AudioResult};
pub use generate::{generate, generate_seeded};
pub use sequence::SampleSequence;
