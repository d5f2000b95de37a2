//! # mzQC Reader
//!
//! Loads mzQC documents from files, readers or strings. JSON decoding is
//! handled by `serde_json`; the resulting tree is handed to
//! [`MzQcDocument::parse`].
//!
//! ```rust,no_run
//! use mzqc::reader::MzQcReader;
//!
//! let document = MzQcReader::new().read_file("run.mzQC")?;
//! println!("{} run qualities", document.run_qualities.len());
//! # Ok::<(), mzqc::MzQcError>(())
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::document::MzQcDocument;
use crate::error::MzQcError;
use crate::parse::{ParseContext, ParseOptions};

/// Reader for mzQC documents
#[derive(Debug, Clone, Copy, Default)]
pub struct MzQcReader {
    options: ParseOptions,
}

impl MzQcReader {
    /// Create a reader with default parse options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom parse options
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse options in effect
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Read a document from a file, logging value diagnostics
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<MzQcDocument, MzQcError> {
        self.read_file_with_sink(path, &mut LogSink)
    }

    /// Read a document from a file, reporting value diagnostics to `sink`
    pub fn read_file_with_sink<P: AsRef<Path>>(
        &self,
        path: P,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<MzQcDocument, MzQcError> {
        let path = path.as_ref();
        log::info!("Reading mzQC file: {}", path.display());

        let file = File::open(path)?;
        self.read_from(BufReader::new(file), sink)
    }

    /// Read a document from any byte source
    pub fn read_from<R: Read>(
        &self,
        reader: R,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<MzQcDocument, MzQcError> {
        let json: Value = serde_json::from_reader(reader)?;
        self.read_json(&json, sink)
    }

    /// Read a document from JSON text
    pub fn read_str(&self, text: &str, sink: &mut dyn DiagnosticSink) -> Result<MzQcDocument, MzQcError> {
        let json: Value = serde_json::from_str(text)?;
        self.read_json(&json, sink)
    }

    /// Read a document from an already-decoded JSON tree
    pub fn read_json(&self, json: &Value, sink: &mut dyn DiagnosticSink) -> Result<MzQcDocument, MzQcError> {
        let mut ctx = ParseContext::new(self.options, sink);
        MzQcDocument::parse(json, &mut ctx)
    }
}

/// Read an mzQC file with default options
pub fn read_mzqc_file<P: AsRef<Path>>(path: P) -> Result<MzQcDocument, MzQcError> {
    MzQcReader::new().read_file(path)
}

/// Parse mzQC JSON text with default options
pub fn parse_mzqc_str(text: &str) -> Result<MzQcDocument, MzQcError> {
    MzQcReader::new().read_str(text, &mut LogSink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostic;

    #[test]
    fn test_parse_str() {
        let doc = parse_mzqc_str(r#"{"mzQC": {"version": "1.0.0", "creationDate": "2024-01-01"}}"#).unwrap();
        assert_eq!(doc.version, "1.0.0");
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let err = parse_mzqc_str("{ not json").unwrap_err();
        assert!(matches!(err, MzQcError::JsonError(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_mzqc_file("/nonexistent/path/run.mzQC").unwrap_err();
        assert!(matches!(err, MzQcError::IoError(_)));
    }

    #[test]
    fn test_reader_options_apply() {
        let text = r#"{"mzQC": {"setQualities": [{"qualityMetrics": [
            {"accession": "A", "unit": {"accession": "B"}}
        ]}]}}"#;

        let mut sink: Vec<Diagnostic> = Vec::new();
        let strict = MzQcReader::with_options(ParseOptions::default().with_max_unit_depth(0));
        assert!(matches!(
            strict.read_str(text, &mut sink),
            Err(MzQcError::UnitDepthExceeded { .. })
        ));
        assert!(MzQcReader::new().read_str(text, &mut sink).is_ok());
    }
}
