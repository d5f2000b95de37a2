//! # Parse Diagnostics
//!
//! Malformed `value` shapes are not fatal: the parser substitutes an absent
//! value and reports what it dropped through a [`DiagnosticSink`]. Callers
//! choose where diagnostics go: [`LogSink`] forwards them to the `log` facade,
//! while a `Vec<Diagnostic>` collects them for later inspection (the
//! validator uses this to turn them into report warnings).

use std::fmt;

/// Category of a recoverable parse problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A `value` array contained a non-numeric element
    NonNumericSeries,
    /// A table row array contained a non-numeric element
    NonNumericTableRow,
    /// An unsigned integer did not fit the integer domain and was read as real
    IntegerOutOfRange,
}

impl DiagnosticKind {
    /// Short stable label used in log lines and reports
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::NonNumericSeries => "non-numeric series",
            DiagnosticKind::NonNumericTableRow => "non-numeric table row",
            DiagnosticKind::IntegerOutOfRange => "integer out of range",
        }
    }
}

/// A recoverable problem found while reading a document
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// What went wrong
    pub kind: DiagnosticKind,
    /// Location in the JSON tree (e.g. `mzQC.runQualities[0].qualityMetrics[1].value`)
    pub path: String,
    /// Human-readable detail
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(kind: DiagnosticKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.kind.label(), self.path, self.message)
    }
}

/// Receiver for recoverable parse diagnostics
pub trait DiagnosticSink {
    /// Accept one diagnostic
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sink that forwards every diagnostic to `log::warn!`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
