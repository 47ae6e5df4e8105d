use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::{
    compose::{self, ComposeArgs},
    potential::{self, PotentialArgs},
    version::{self, VersionArgs},
};
use sch_core::SessionConfig;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "schroedinger", about = "Separable quantum basis and state composition")]
struct Cli {
    /// YAML session configuration (output sinks, dumps, logging).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a potential shape over a basis described by a problem file.
    Potential(PotentialArgs),
    /// Aggregate state snapshots into a composite state.
    Compose(ComposeArgs),
    /// Print the crate version.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    match cli.command {
        Command::Potential(args) => potential::run(&args, config),
        Command::Compose(args) => compose::run(&args, config),
        Command::Version(args) => version::run(&args),
    }
}
