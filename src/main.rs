//! # mzQC Command-Line Tool
//!
//! Inspect, re-serialize and validate mzQC quality control reports.
//!
//! ## Usage
//!
//! ```bash
//! # Print a summary of the document
//! mzqc info run.mzQC
//!
//! # Parse and write back out (pretty by default)
//! mzqc convert run.mzQC normalized.mzQC --compact
//!
//! # Structural validation report
//! mzqc validate run.mzQC
//! ```

use clap::Parser;

mod cli;

fn main() {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());

    if let Err(e) = cli::dispatch(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
