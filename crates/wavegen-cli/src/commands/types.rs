//! Types command implementation
//!
//! Lists the waveform type ids a request may name.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use wavegen_spec::WaveformType;

/// Run the types command
pub fn run(json_output: bool) -> Result<ExitCode> {
    if json_output {
        let ids: Vec<&str> = WaveformType::ALL.iter().map(|t| t.as_str()).collect();
        let json = serde_json::to_string_pretty(&ids).context("Failed to serialize type list")?;
        println!("{}", json);
    } else {
        println!("{}", "Waveform types:".cyan().bold());
        for waveform_type in WaveformType::ALL {
            println!(
                "  {:<32} {}",
                waveform_type.as_str(),
                family(waveform_type).dimmed()
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Short label for the synthesis technique behind a type.
fn family(waveform_type: WaveformType) -> &'static str {
    match waveform_type {
        WaveformType::SineTime | WaveformType::SquareTime | WaveformType::SawtoothTime => {
            "time domain"
        }
        WaveformType::SquareAdditive
        | WaveformType::SawtoothAdditive
        | WaveformType::TriangleAdditive
        | WaveformType::CustomAdditive => "additive",
        WaveformType::WhiteNoise => "noise",
        WaveformType::KarplusStrong => "physical model",
        WaveformType::Fm => "frequency modulation",
        WaveformType::RepeatingNarrowPulse => "pulse train",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_a_family() {
        for waveform_type in WaveformType::ALL {
            assert!(!family(waveform_type).is_empty());
        }
    }

    #[test]
    fn test_additive_family() {
        assert_eq!(family(WaveformType::CustomAdditive), "additive");
        assert_eq!(family(WaveformType::SineTime), "time domain");
    }
}
