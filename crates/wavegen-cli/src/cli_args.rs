//! CLI argument definitions for the Wavegen command-line interface.

use clap::{Parser, Subcommand};

/// Wavegen - Deterministic Waveform Synthesis
#[derive(Parser)]
#[command(name = "wavegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Validate a request file without generating samples
    Validate {
        /// Path to the request file (JSON)
        #[arg(short, long)]
        request: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate samples from a request file and print a summary
    Generate {
        /// Path to the request file (JSON)
        #[arg(short, long)]
        request: String,

        /// Seed for the randomness used by white noise and Karplus-Strong
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List supported waveform type ids
    Types {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}
