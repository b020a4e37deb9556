//! riposte CLI - Markov-chain Rock-Paper-Scissors agent
//!
//! This CLI provides a unified interface for:
//! - Playing interactive matches against the agent
//! - Simulating the agent against scripted opponents
//! - Inspecting saved models

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "riposte")]
#[command(version, about = "Rock-Paper-Scissors agent that learns to counter you", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive match against the agent
    Play(riposte::cli::commands::play::PlayArgs),

    /// Run the agent against a scripted opponent
    Simulate(riposte::cli::commands::simulate::SimulateArgs),

    /// Show the contents of a saved model
    Inspect(riposte::cli::commands::inspect::InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => riposte::cli::commands::play::execute(args),
        Commands::Simulate(args) => riposte::cli::commands::simulate::execute(args),
        Commands::Inspect(args) => riposte::cli::commands::inspect::execute(args),
    }
}
