//! Corsa CLI binary.

use clap::Parser;
use corsa::cli::{args::*, commands::*};
use std::process;
use tracing::Level;

fn main() {
    // Parse command line arguments using clap
    let args = CorsaArgs::parse();

    // Map verbosity onto the log level
    let level = match args.verbosity() {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
