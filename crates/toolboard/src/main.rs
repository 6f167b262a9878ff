//! toolboard CLI - build a static AI tool directory from JSON data.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "toolboard")]
#[command(about = "Build a static AI tool directory page from JSON data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to toolboard.toml config file
    #[arg(short, long, default_value = config::CONFIG_FILE)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter template, config and data directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Add a placeholder tool and refresh news and leaderboard data
    Scrape {
        /// Seed for the random generator
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Build the static page
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for the random like counts
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Scrape { seed } => {
            commands::scrape::run(&cli.config, seed)?;
        }
        Commands::Build { output, seed } => {
            commands::build::run(&cli.config, output, seed)?;
        }
    }

    Ok(())
}
