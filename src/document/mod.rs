//! # mzQC Document Model
//!
//! An mzQC document wraps everything under a single `mzQC` key: format
//! version and creation date, optional contact details, the registry of
//! controlled vocabularies, and lists of run and set quality records. Each
//! record pairs provenance [`Metadata`] with a list of [`QualityMetric`]s.
//!
//! ## Reading
//!
//! Only the `mzQC` wrapper is required. Missing sections become empty lists
//! and missing strings become empty strings. Malformed `value` shapes are
//! dropped and reported through the context's diagnostic sink.
//!
//! ## Writing
//!
//! Optional fields that are empty are omitted rather than written as `""`
//! or `[]`. `version`, `creationDate` and `controlledVocabularies` are
//! always written, as are `qualityMetrics`, `inputFiles`,
//! `analysisSoftware` and `fileFormat` inside each record.
//!
//! ```rust
//! use mzqc::controlled_vocabulary::{file_terms, qc_terms, ControlledVocabulary};
//! use mzqc::document::{BaseQuality, InputFile, Metadata, MzQcDocument};
//!
//! let metadata = Metadata::new()
//!     .with_label("run 1")
//!     .with_input_file(InputFile::new("run1.mzML", "file:///data/run1.mzML", file_terms::mzml_format()));
//!
//! let document = MzQcDocument::new()
//!     .with_controlled_vocabulary(ControlledVocabulary::psi_ms("4.1.129"))
//!     .with_run_quality(BaseQuality::new(metadata).with_metric(qc_terms::ms1_spectra_count(1200)));
//!
//! let json = document.to_json()?;
//! let restored = MzQcDocument::from_json(&json)?;
//! assert_eq!(restored, document);
//! # Ok::<(), mzqc::MzQcError>(())
//! ```

mod metadata;
mod quality;


pub use metadata::{AnalysisSoftware, InputFile, Metadata};
pub use quality::{BaseQuality, QualityMetric};

use serde::Serialize;
use serde_json::Value;

use crate::controlled_vocabulary::ControlledVocabulary;
use crate::error::MzQcError;
use crate::parse::{expect_object, parse_list, string_field, with_log_context, ParseContext};
use crate::schema::*;

/// A complete mzQC document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MzQcDocument {
    /// mzQC format version
    pub version: String,
    /// ISO 8601 creation timestamp
    pub creation_date: String,
    /// Free-text description; empty means not present
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Contact person; empty means not present
    #[serde(skip_serializing_if = "String::is_empty")]
    pub contact_name: String,
    /// Contact address; empty means not present
    #[serde(skip_serializing_if = "String::is_empty")]
    pub contact_address: String,
    /// Vocabularies whose accessions appear in the document
    pub controlled_vocabularies: Vec<ControlledVocabulary>,
    /// Per-run quality records
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub run_qualities: Vec<BaseQuality>,
    /// Per-set quality records
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub set_qualities: Vec<BaseQuality>,
}

/// On-disk form: the document under its `mzQC` wrapper key
#[derive(Serialize)]
pub(crate) struct MzQcFile<'a> {
    #[serde(rename = "mzQC")]
    document: &'a MzQcDocument,
}

impl<'a> MzQcFile<'a> {
    pub(crate) fn new(document: &'a MzQcDocument) -> Self {
        Self { document }
    }
}

impl MzQcDocument {
    /// Create an empty document at the current format version, stamped now
    pub fn new() -> Self {
        Self {
            version: MZQC_FORMAT_VERSION.to_string(),
            creation_date: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            ..Default::default()
        }
    }

    /// Set the description (builder pattern)
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Set contact name and address (builder pattern)
    pub fn with_contact(mut self, name: &str, address: &str) -> Self {
        self.contact_name = name.to_string();
        self.contact_address = address.to_string();
        self
    }

    /// Register a controlled vocabulary (builder pattern)
    pub fn with_controlled_vocabulary(mut self, cv: ControlledVocabulary) -> Self {
        self.controlled_vocabularies.push(cv);
        self
    }

    /// Add a run quality record (builder pattern)
    pub fn with_run_quality(mut self, quality: BaseQuality) -> Self {
        self.run_qualities.push(quality);
        self
    }

    /// Add a set quality record (builder pattern)
    pub fn with_set_quality(mut self, quality: BaseQuality) -> Self {
        self.set_qualities.push(quality);
        self
    }

    /// Total number of metrics across all run and set qualities
    pub fn metric_count(&self) -> usize {
        self.run_qualities
            .iter()
            .chain(&self.set_qualities)
            .map(|q| q.quality_metrics.len())
            .sum()
    }

    /// Parse a document with default options, logging value diagnostics
    pub fn from_json(json: &Value) -> Result<Self, MzQcError> {
        with_log_context(|ctx| Self::parse(json, ctx))
    }

    /// Parse a document.
    ///
    /// Fails with [`MzQcError::Schema`] when the `mzQC` wrapper is missing or
    /// any present section has the wrong JSON type; no partial document is
    /// returned.
    pub fn parse(json: &Value, ctx: &mut ParseContext<'_>) -> Result<Self, MzQcError> {
        let root = expect_object(json, "$")?;
        let wrapper = root.get(MZQC_ROOT_KEY).ok_or_else(|| {
            MzQcError::schema("$", format!("missing '{}' element", MZQC_ROOT_KEY))
        })?;

        let path = MZQC_ROOT_KEY;
        let object = expect_object(wrapper, path)?;

        Ok(Self {
            version: string_field(object, KEY_VERSION, path)?,
            creation_date: string_field(object, KEY_CREATION_DATE, path)?,
            description: string_field(object, KEY_DESCRIPTION, path)?,
            contact_name: string_field(object, KEY_CONTACT_NAME, path)?,
            contact_address: string_field(object, KEY_CONTACT_ADDRESS, path)?,
            controlled_vocabularies: parse_list(
                object,
                KEY_CONTROLLED_VOCABULARIES,
                path,
                ctx,
                ControlledVocabulary::parse,
            )?,
            run_qualities: parse_list(object, KEY_RUN_QUALITIES, path, ctx, BaseQuality::parse)?,
            set_qualities: parse_list(object, KEY_SET_QUALITIES, path, ctx, BaseQuality::parse)?,
        })
    }

    /// Serialize to the JSON tree, including the `mzQC` wrapper
    pub fn to_json(&self) -> Result<Value, MzQcError> {
        Ok(serde_json::to_value(MzQcFile::new(self))?)
    }
}
