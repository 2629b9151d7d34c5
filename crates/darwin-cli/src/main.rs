//! Terminal front end for the Young Darwin expedition.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "darwin",
    about = "Young Darwin — walk Isla Floreana from the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the expedition interactively
    Play {
        /// Load an island from a JSON file instead of the built-in one
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Start at a specific exterior cell id
        #[arg(short, long)]
        start: Option<String>,

        /// Suppress the banner and location header
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the island's location table
    Map {
        /// Load an island from a JSON file instead of the built-in one
        #[arg(short, long)]
        world: Option<PathBuf>,
    },
}

fn main() -> miette::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            world,
            start,
            quiet,
        } => commands::play::run(world.as_deref(), start.as_deref(), quiet),
        Commands::Map { world } => commands::map::run(world.as_deref()),
    }
}
