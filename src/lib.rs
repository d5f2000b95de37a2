//! # mzQC - Quality Control Reports for Mass Spectrometry
//!
//! `mzqc` reads and writes documents in the HUPO-PSI mzQC format: JSON
//! reports of quality metrics computed for individual acquisition runs or
//! for sets of runs, annotated with controlled vocabulary (CV) terms, units,
//! and provenance metadata.
//!
//! ## Key Features
//!
//! - **Shape-Inferred Values**: mzQC does not tag value types on the wire.
//!   Each `value` is inferred as integer, real, text, numeric series, or
//!   labeled table from its JSON shape alone.
//!
//! - **Semantic Round Trips**: Reading accepts sparse documents and writing
//!   omits empty optional fields, so re-serializing a document preserves its
//!   content without introducing empty placeholders.
//!
//! - **Recoverable Diagnostics**: Malformed values (e.g. an array holding a
//!   string) are dropped and reported through a [`diagnostics::DiagnosticSink`]
//!   instead of aborting the read.
//!
//! - **Bounded Unit Chains**: Units are themselves CV parameters and may nest.
//!   Parsing enforces a configurable depth limit and writing never recurses.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mzqc::reader::read_mzqc_file;
//! use mzqc::writer::write_mzqc_file;
//!
//! let document = read_mzqc_file("run.mzQC")?;
//!
//! for run in &document.run_qualities {
//!     for metric in &run.quality_metrics {
//!         if let Ok(value) = metric.numeric_value() {
//!             println!("{} = {}", metric.name, value);
//!         }
//!     }
//! }
//!
//! write_mzqc_file(&document, "copy.mzQC", true)?;
//! # Ok::<(), mzqc::MzQcError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`value`]: the [`value::CvValue`] sum type with shape inference and emission
//! - [`controlled_vocabulary`]: [`controlled_vocabulary::CvParameter`] nodes and common terms
//! - [`document`]: the document tree built from CV parameters
//! - [`reader`] / [`writer`]: file and text I/O
//! - [`validator`]: structural checks with a printable report
//! - [`summary`]: human-readable document overview

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod controlled_vocabulary;
pub mod diagnostics;
pub mod document;
mod error;
pub mod parse;
pub mod reader;
pub mod schema;
pub mod summary;
pub mod validator;
pub mod value;
pub mod writer;

pub use error::MzQcError;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::controlled_vocabulary::{
        file_terms, qc_terms, unit_terms, ControlledVocabulary, CvParameter,
    };
    pub use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, LogSink};
    pub use crate::document::{
        AnalysisSoftware, BaseQuality, InputFile, Metadata, MzQcDocument, QualityMetric,
    };
    pub use crate::parse::{ParseContext, ParseOptions};
    pub use crate::reader::{parse_mzqc_str, read_mzqc_file, MzQcReader};
    pub use crate::summary::DocumentSummary;
    pub use crate::validator::{validate_mzqc_file, ValidationReport};
    pub use crate::value::{CvValue, Table};
    pub use crate::writer::{write_mzqc_file, MzQcWriter, WriterConfig};
    pub use crate::MzQcError;
}
