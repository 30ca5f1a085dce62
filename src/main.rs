//! dupescan - Duplicate File Reporter
//!
//! Entry point for the dupescan CLI application.

use clap::Parser;
use dupescan::{cli::Cli, error::ExitCode, logging::init_logging, run_app};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
