use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use mzqc::reader::MzQcReader;
use mzqc::writer::MzQcWriter;

use super::config::Config;

/// Parse an mzQC file and serialize it again
pub fn run(
    input: PathBuf,
    output: PathBuf,
    compact: bool,
    max_unit_depth: Option<usize>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load(config.as_deref())?;
    let reader = MzQcReader::with_options(config.parse_options(max_unit_depth));
    let writer_config = config.writer_config(compact);

    info!("Input:  {}", input.display());
    info!("Output: {}", output.display());
    info!("Pretty: {}", writer_config.pretty);
    info!("Max unit depth: {}", reader.options().max_unit_depth);

    let document = reader
        .read_file(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    MzQcWriter::new(writer_config)
        .write_file(&document, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Conversion complete!");
    info!("  Run qualities: {}", document.run_qualities.len());
    info!("  Set qualities: {}", document.set_qualities.len());
    info!("  Metrics: {}", document.metric_count());

    Ok(())
}
