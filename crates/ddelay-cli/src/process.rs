//! File-based delay processing command.

use crate::wav::{WavSpec, read_wav, write_wav};
use anyhow::Context;
use clap::Args;
use ddelay_core::{DelayParams, FeedbackDelay, TimeMode, TimeSelector, linear_to_db};
use std::path::PathBuf;

/// Arguments for `ddelay process`.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Feedback amount, 0.0 to 1.0
    #[arg(short, long, default_value = "0.5")]
    feedback: f32,

    /// Delay time selector, 1 to 8
    #[arg(short, long, default_value = "4")]
    time: u8,

    /// Interpret the time selector as a free-running duration instead of
    /// a note division
    #[arg(long)]
    free: bool,

    /// Tempo in BPM for the synced time mode
    #[arg(long, default_value = "140")]
    bpm: f32,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

/// Runs the process command.
pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !matches!(args.bit_depth, 16 | 24 | 32) {
        anyhow::bail!("unsupported bit depth {} (use 16, 24, or 32)", args.bit_depth);
    }

    let (mut channels, spec) = read_wav(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let sample_rate = spec.sample_rate as f32;
    let frames = channels[0].len();

    tracing::info!(
        path = %args.input.display(),
        channels = channels.len(),
        sample_rate = spec.sample_rate,
        duration_secs = frames as f32 / sample_rate,
        "loaded input"
    );

    let params = DelayParams {
        feedback: args.feedback,
        time: TimeSelector::new(args.time),
        mode: if args.free {
            TimeMode::Free
        } else {
            TimeMode::Synced { bpm: args.bpm }
        },
    };
    tracing::info!(
        feedback = params.feedback,
        time = params.time.get(),
        delay_secs = params.delay_secs(),
        free = args.free,
        "delay configuration"
    );

    let mut delay = FeedbackDelay::new(channels.len(), sample_rate)?;

    let input_peak = peak(&channels);
    for (ch, buffer) in channels.iter_mut().enumerate() {
        // The echo sums onto the dry signal in place.
        delay.process_in_place(ch, buffer, &params);
    }
    let output_peak = peak(&channels);

    if delay.clamp_events() > 0 {
        tracing::warn!(
            events = delay.clamp_events(),
            "some parameter values were clamped during processing"
        );
    }

    println!(
        "Peak: {:.1} dB in, {:.1} dB out",
        linear_to_db(input_peak),
        linear_to_db(output_peak)
    );

    let out_spec = WavSpec {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: args.bit_depth,
    };
    write_wav(&args.output, &channels, out_spec)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(path = %args.output.display(), "wrote output");

    Ok(())
}

fn peak(channels: &[Vec<f32>]) -> f32 {
    channels
        .iter()
        .flatten()
        .fold(0.0f32, |acc, &s| acc.max(s.abs()))
}
