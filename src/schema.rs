//! # mzQC Wire Schema
//!
//! JSON key names and format constants for the mzQC document shape:
//!
//! ```text
//! { "mzQC": {
//!     version, creationDate, description?, contactName?, contactAddress?,
//!     controlledVocabularies: [ {name, uri, version?} ],
//!     runQualities?: [ BaseQuality ],
//!     setQualities?: [ BaseQuality ] } }
//!
//! BaseQuality  = { metadata, qualityMetrics: [ CvParameter ] }
//! metadata     = { label?, inputFiles: [ InputFile ], analysisSoftware: [ ... ], cvParameters?: [ ... ] }
//! InputFile    = { name, location, fileFormat: CvParameter, fileProperties?: [ CvParameter ] }
//! CvParameter  = { accession, name, description?, value?, unit?: CvParameter }
//! ```

/// mzQC format version written by [`crate::document::MzQcDocument::new`]
pub const MZQC_FORMAT_VERSION: &str = "1.0.0";

/// File extension for mzQC documents
pub const MZQC_EXTENSION: &str = ".mzQC";

/// Top-level wrapper key
pub const MZQC_ROOT_KEY: &str = "mzQC";

// =========================================================================
// Document keys
// =========================================================================

/// Document format version
pub const KEY_VERSION: &str = "version";
/// Document creation timestamp
pub const KEY_CREATION_DATE: &str = "creationDate";
/// Free-text description (document and CV parameter)
pub const KEY_DESCRIPTION: &str = "description";
/// Contact person
pub const KEY_CONTACT_NAME: &str = "contactName";
/// Contact address
pub const KEY_CONTACT_ADDRESS: &str = "contactAddress";
/// Controlled vocabulary registry
pub const KEY_CONTROLLED_VOCABULARIES: &str = "controlledVocabularies";
/// Per-run quality records
pub const KEY_RUN_QUALITIES: &str = "runQualities";
/// Per-set quality records
pub const KEY_SET_QUALITIES: &str = "setQualities";

// =========================================================================
// Quality and metadata keys
// =========================================================================

/// Metadata block of a quality record
pub const KEY_METADATA: &str = "metadata";
/// Metric list of a quality record
pub const KEY_QUALITY_METRICS: &str = "qualityMetrics";
/// Metadata label
pub const KEY_LABEL: &str = "label";
/// Input file list
pub const KEY_INPUT_FILES: &str = "inputFiles";
/// Analysis software list
pub const KEY_ANALYSIS_SOFTWARE: &str = "analysisSoftware";
/// Free-form CV parameter list
pub const KEY_CV_PARAMETERS: &str = "cvParameters";
/// Input file location
pub const KEY_LOCATION: &str = "location";
/// Input file format
pub const KEY_FILE_FORMAT: &str = "fileFormat";
/// Input file properties
pub const KEY_FILE_PROPERTIES: &str = "fileProperties";
/// Software or vocabulary URI
pub const KEY_URI: &str = "uri";

// =========================================================================
// CV parameter keys
// =========================================================================

/// CV accession
pub const KEY_ACCESSION: &str = "accession";
/// Name (CV parameter, input file, vocabulary)
pub const KEY_NAME: &str = "name";
/// Parameter value
pub const KEY_VALUE: &str = "value";
/// Parameter unit
pub const KEY_UNIT: &str = "unit";
