//! Trace Freq CLI
//!
//! Reads an atari800 execution trace from stdin and prints how often each
//! address range was touched, least frequent first.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::io;

use trace_freq::commands::execute_analyze;

/// Trace Freq - address frequency report for atari800 traces
#[derive(Parser, Debug)]
#[command(name = "trace-freq")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_analyze(stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
