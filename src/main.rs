//! `cyrcipher` command-line entry point.
//!
//! Parses CLI arguments, sets up logging, then dispatches to the requested
//! cipher or to the interactive shell.

mod cli;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use cyrcipher::{PolyalphabeticCipher, RouteTranspositionCipher};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity; RUST_LOG wins when present.
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ok = match cli.command {
        Commands::Route {
            direction,
            key,
            text,
        } => cli::run_once(&mut out, RouteTranspositionCipher::new(key), direction, &text)?,
        Commands::Poly {
            direction,
            key,
            text,
        } => cli::run_once(&mut out, PolyalphabeticCipher::new(&key), direction, &text)?,
        Commands::Roundtrip { key, texts } => cli::roundtrip(&mut out, key, &texts)?,
        Commands::Interactive => {
            cli::interactive(io::stdin().lock(), &mut out)?;
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
