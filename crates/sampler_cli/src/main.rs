//! Sampler CLI - deterministic parallel uniform draws from the shell.
//!
//! # Commands
//!
//! - `sampler generate --draws N --workers W --seed S` - produce draws
//! - `sampler check` - report available parallelism and limits

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Deterministic parallel uniform sampler
#[derive(Parser)]
#[command(name = "sampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce uniform(0,1) draws partitioned across workers
    Generate {
        /// Total number of draws
        #[arg(short = 'n', long)]
        draws: usize,

        /// Number of logical workers (defaults to the CPU count)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Master seed
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Run the fill phase serially instead of on the rayon pool
        #[arg(long)]
        serial: bool,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Report available parallelism and generator limits
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Generate {
            draws,
            workers,
            seed,
            serial,
            format,
            output,
        } => commands::generate::run(
            draws,
            workers.unwrap_or_else(num_cpus::get),
            seed,
            serial,
            &format,
            output.as_deref(),
        ),
        Commands::Check => commands::check::run(),
    }
}
