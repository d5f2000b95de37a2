use anyhow::Result;
use log::info;
use std::path::PathBuf;

/// Validate an mzQC file
pub fn run(file: PathBuf) -> Result<()> {
    use mzqc::validator::validate_mzqc_file;

    info!("mzQC Validator");
    info!("File: {}", file.display());

    let report = validate_mzqc_file(&file)?;

    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
