//! naca - generate, measure and export NACA airfoil sections.

mod commands;
mod config;

use clap::Parser;
use config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "naca",
    version,
    about = "NACA 4/5-digit and 6/7/8-series airfoil geometry"
)]
struct Cli {
    /// JSON file with default chord, samples, spacing, format and output directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raise the log level, repeat for more detail (RUST_LOG takes precedence)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = Config::load(cli.config.as_deref())?;
    commands::run(cli.command, &config)
}
