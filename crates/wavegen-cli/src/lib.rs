//! Wavegen CLI library.
//!
//! This crate provides the request loading and command implementations
//! behind the `wavegen` binary.

pub mod commands;
pub mod input;
