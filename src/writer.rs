//! # mzQC Writer
//!
//! Serializes [`MzQcDocument`]s as JSON text, pretty-printed with two-space
//! indentation or compact on a single line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::document::{MzQcDocument, MzQcFile};
use crate::error::MzQcError;

/// Configuration for the mzQC writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    /// Indent output with two spaces per level instead of a single line
    pub pretty: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl WriterConfig {
    /// Single-line output
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

/// Writer for mzQC documents
#[derive(Debug, Clone, Copy, Default)]
pub struct MzQcWriter {
    config: WriterConfig,
}

impl MzQcWriter {
    /// Create a writer with the given configuration
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Serialize a document to JSON text
    pub fn to_string(&self, document: &MzQcDocument) -> Result<String, MzQcError> {
        let file = MzQcFile::new(document);
        let text = if self.config.pretty {
            serde_json::to_string_pretty(&file)?
        } else {
            serde_json::to_string(&file)?
        };
        Ok(text)
    }

    /// Serialize a document into any byte sink
    pub fn write_to<W: Write>(&self, document: &MzQcDocument, mut writer: W) -> Result<(), MzQcError> {
        let file = MzQcFile::new(document);
        if self.config.pretty {
            serde_json::to_writer_pretty(&mut writer, &file)?;
        } else {
            serde_json::to_writer(&mut writer, &file)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Serialize a document to a file, replacing any existing content
    pub fn write_file<P: AsRef<Path>>(&self, document: &MzQcDocument, path: P) -> Result<(), MzQcError> {
        let path = path.as_ref();
        log::info!("Writing mzQC file: {}", path.display());

        let file = File::create(path)?;
        self.write_to(document, BufWriter::new(file))
    }
}

/// Write an mzQC file, pretty-printed or compact
pub fn write_mzqc_file<P: AsRef<Path>>(
    document: &MzQcDocument,
    path: P,
    pretty: bool,
) -> Result<(), MzQcError> {
    MzQcWriter::new(WriterConfig { pretty }).write_file(document, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let doc = MzQcDocument::default();
        let text = MzQcWriter::default().to_string(&doc).unwrap();

        assert!(text.starts_with("{\n  \"mzQC\": {\n    \"version\""));
    }

    #[test]
    fn test_compact_is_single_line() {
        let doc = MzQcDocument::default();
        let text = MzQcWriter::new(WriterConfig::compact()).to_string(&doc).unwrap();

        assert_eq!(
            text,
            r#"{"mzQC":{"version":"","creationDate":"","controlledVocabularies":[]}}"#
        );
    }

    #[test]
    fn test_write_to_buffer() {
        let doc = MzQcDocument::new().with_description("buffer");
        let mut buffer = Vec::new();
        MzQcWriter::default().write_to(&doc, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"description\": \"buffer\""));
    }
}
