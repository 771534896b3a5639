//! HMAC RPS - rock-paper-scissors over any odd number of moves, with the
//! computer's move committed by HMAC before the human chooses.

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generalized rock-paper-scissors with a verifiable computer move
#[derive(Parser, Debug)]
#[command(name = "hmac-rps")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play one round against the computer
    Play {
        /// Moves in cycle order: an odd number (at least 3) of distinct names
        moves: Vec<String>,

        /// Output format: text or json
        #[arg(short, long, value_enum, default_value = "text", env = "HMAC_RPS_FORMAT")]
        format: cli::OutputFormat,
    },

    /// Print who beats whom for a set of moves
    Table {
        /// Moves in cycle order
        moves: Vec<String>,

        /// Output format: text or json
        #[arg(short, long, value_enum, default_value = "text", env = "HMAC_RPS_FORMAT")]
        format: cli::OutputFormat,
    },

    /// Check a revealed key against the HMAC shown before the round
    Verify {
        /// HMAC key printed at the end of the round (hex)
        #[arg(long)]
        key: String,

        /// HMAC printed at the start of the round (hex)
        #[arg(long)]
        hmac: String,

        /// The computer's move as announced
        #[arg(value_name = "MOVE")]
        computer_move: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Play { moves, format } => cli::play::run(&moves, format),
        Commands::Table { moves, format } => cli::table::run(&moves, format),
        Commands::Verify {
            key,
            hmac,
            computer_move,
        } => cli::verify::run(&key, &hmac, &computer_move),
    }
}
