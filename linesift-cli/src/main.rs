//! Command-line entry point for linesift

use clap::Parser;
use linesift_cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = cli.run() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
