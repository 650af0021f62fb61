//! Parameter listing command.

use clap::Args;
use ddelay_core::{DEFAULT_TEMPO_BPM, ParamUnit, TimeSelector, param_descriptors};

/// Arguments for `ddelay params`.
#[derive(Args)]
pub struct ParamsArgs {
    /// Tempo used to display synced delay times
    #[arg(long, default_value_t = DEFAULT_TEMPO_BPM)]
    bpm: f32,
}

/// Runs the params command.
pub fn run(args: &ParamsArgs) -> anyhow::Result<()> {
    println!("Parameters:");
    for desc in param_descriptors() {
        let unit = match desc.unit {
            ParamUnit::Toggle => "toggle",
            ParamUnit::Steps => "steps",
            ParamUnit::Percent => "%",
        };
        println!(
            "  {:<12} {:>5} .. {:<5} default {:<5} ({unit})",
            desc.name, desc.min, desc.max, desc.default
        );
    }

    println!("\nTime selector at {} BPM:", args.bpm);
    for steps in TimeSelector::MIN..=TimeSelector::MAX {
        let selector = TimeSelector::new(steps);
        println!(
            "  {steps}: synced {:<4} = {:.3}s, free = {:.2}s",
            selector.division().label(),
            selector.division().to_secs(args.bpm),
            selector.free_secs()
        );
    }

    Ok(())
}
