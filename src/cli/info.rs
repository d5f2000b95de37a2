use anyhow::{Context, Result};
use std::path::PathBuf;

use mzqc::reader::MzQcReader;
use mzqc::summary::DocumentSummary;

use super::config::Config;

/// Print a summary of an mzQC file
pub fn run(file: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config.as_deref())?;
    let reader = MzQcReader::with_options(config.parse_options(None));

    let document = reader
        .read_file(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    println!("mzQC File Information");
    println!("=====================");
    println!("File: {}", file.display());
    println!();
    print!("{}", DocumentSummary::new(&document));

    Ok(())
}
