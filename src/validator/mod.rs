//! # mzQC Validation Module
//!
//! Structural validation of mzQC documents. The checks cover document shape
//! and completeness only; accessions are not looked up in their ontologies.
//!
//! ## Validation Checklist
//!
//! 1. **Structure Check**: JSON decodes, the `mzQC` wrapper exists, and the
//!    document parses; every recovered value-shape problem becomes a warning
//! 2. **Content Check**: format version, creation date, vocabulary registry,
//!    quality record provenance, and metric identification
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mzqc::validator::validate_mzqc_file;
//! use std::path::Path;
//!
//! let report = validate_mzqc_file(Path::new("run.mzQC"))?;
//! println!("{}", report);
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::Path;

use anyhow::{Context, Result};

use crate::parse::ParseOptions;

pub use report::{CheckStatus, ValidationCheck, ValidationReport};

mod content;
mod report;
mod structure;

/// Main validation entry point
pub fn validate_mzqc_file(path: &Path) -> Result<ValidationReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(validate_mzqc_str(&text, path.display().to_string()))
}

/// Validate mzQC JSON text; `label` names the source in the report
pub fn validate_mzqc_str(text: &str, label: impl Into<String>) -> ValidationReport {
    let mut report = ValidationReport::new(label);

    // 1. Structure Check
    if let Some(document) = structure::check_structure(text, ParseOptions::default(), &mut report) {
        // 2. Content Check
        content::check_content(&document, &mut report);
    }

    report
}
