//! Crib CLI - Command-line interface for the cribbage pegboard.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::process::ExitCode;

/// Crib - A two-player cribbage pegboard
#[derive(Parser, Debug)]
#[command(name = "crib")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log every action at debug level (`RUST_LOG` overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive pegboard in the terminal
    Play {
        /// Player whose panel starts active (1 or 2)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=2))]
        first: u8,
    },

    /// Apply an action script and print the final board
    Run {
        /// Script file (one action per line)
        #[arg(required = true)]
        script: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress the action summary line
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the scoring categories and their point values
    Categories {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match args.command {
        Commands::Play { first } => cli::play::execute(first),

        Commands::Run {
            script,
            format,
            quiet,
        } => cli::run::execute(&script, format, quiet),

        Commands::Categories { format } => cli::categories::execute(format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
