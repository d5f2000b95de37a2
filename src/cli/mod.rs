use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod convert;
mod info;
mod validate;

/// mzQC - Quality control report reader and writer
#[derive(Parser)]
#[command(name = "mzqc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of an mzQC file
    Info {
        /// Input mzQC file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Parse an mzQC file and write it back out
    Convert {
        /// Input mzQC file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output mzQC file path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Write single-line JSON instead of indented output
        #[arg(long)]
        compact: bool,

        /// Maximum nesting of unit parameters accepted on input
        #[arg(long, value_name = "N")]
        max_unit_depth: Option<usize>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Validate mzQC document structure and completeness
    Validate {
        /// Input mzQC file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Info { file, config } => info::run(file, config),
        Commands::Convert {
            input,
            output,
            compact,
            max_unit_depth,
            config,
        } => convert::run(input, output, compact, max_unit_depth, config),
        Commands::Validate { file } => validate::run(file),
    }
}
