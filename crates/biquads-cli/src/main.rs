//! Biquads CLI - inspect and run RBJ cookbook EQ filters.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "biquads")]
#[command(author, version, about = "Biquad EQ filter toolkit", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List filter shapes
    Shapes(commands::shapes::ShapesArgs),

    /// List and show factory filter definitions
    Presets(commands::presets::PresetsArgs),

    /// Print the coefficients of a filter
    Coeffs(commands::coeffs::CoeffsArgs),

    /// Print the magnitude and phase response of a filter
    Response(commands::response::ResponseArgs),

    /// Print the impulse response of a filter
    Impulse(commands::impulse::ImpulseArgs),

    /// Filter a stream of samples (one per line)
    Process(commands::process::ProcessArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Shapes(args) => commands::shapes::run(args),
        Commands::Presets(args) => commands::presets::run(args),
        Commands::Coeffs(args) => commands::coeffs::run(args),
        Commands::Response(args) => commands::response::run(args),
        Commands::Impulse(args) => commands::impulse::run(args),
        Commands::Process(args) => commands::process::run(args),
    }
}
