//! Wavegen CLI - Command-line interface for waveform synthesis
//!
//! This binary validates synthesis requests and generates their samples.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use wavegen_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    // RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { request, json } => commands::validate::run(&request, json),
        Commands::Generate {
            request,
            seed,
            json,
        } => commands::generate::run(&request, seed, json),
        Commands::Types { json } => commands::types::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_validate() {
        let cli = Cli::try_parse_from(["wavegen", "validate", "--request", "req.json"]).unwrap();
        match cli.command {
            Commands::Validate { request, json } => {
                assert_eq!(request, "req.json");
                assert!(!json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_parses_generate_with_seed() {
        let cli = Cli::try_parse_from([
            "wavegen",
            "generate",
            "-r",
            "req.json",
            "--seed",
            "42",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                request,
                seed,
                json,
            } => {
                assert_eq!(request, "req.json");
                assert_eq!(seed, 42);
                assert!(json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_generate_seed_defaults_to_zero() {
        let cli = Cli::try_parse_from(["wavegen", "generate", "--request", "req.json"]).unwrap();
        match cli.command {
            Commands::Generate { seed, .. } => assert_eq!(seed, 0),
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_requires_request() {
        let err = Cli::try_parse_from(["wavegen", "validate"]).err().unwrap();
        assert!(err.to_string().contains("--request"));
    }

    #[test]
    fn test_cli_rejects_negative_seed() {
        assert!(
            Cli::try_parse_from(["wavegen", "generate", "-r", "req.json", "--seed", "-1"]).is_err()
        );
    }

    #[test]
    fn test_cli_parses_types() {
        let cli = Cli::try_parse_from(["wavegen", "types"]).unwrap();
        assert!(matches!(cli.command, Commands::Types { json: false }));
    }
}
