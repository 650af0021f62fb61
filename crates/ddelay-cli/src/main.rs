//! ddelay - run the feedback delay over WAV files.

mod params;
mod process;
mod wav;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ddelay")]
#[command(author, version, about = "Feedback delay audio processor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a WAV file through the feedback delay
    Process(process::ProcessArgs),

    /// List the effect's parameters and time selector mappings
    Params(params::ParamsArgs),
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => process::run(args),
        Commands::Params(args) => params::run(&args),
    }
}
