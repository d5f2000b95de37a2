/// Errors that can occur while reading, writing or querying mzQC documents
#[derive(Debug, thiserror::Error)]
pub enum MzQcError {
    /// Required structure missing or a node has the wrong JSON type
    #[error("Schema error at {path}: {message}")]
    Schema {
        /// Location in the JSON tree
        path: String,
        /// What was expected
        message: String,
    },

    /// A unit chain nests deeper than the configured limit
    #[error("Unit chain at {path} exceeds the maximum depth of {max_depth}")]
    UnitDepthExceeded {
        /// Location of the unit that crossed the limit
        path: String,
        /// Configured limit
        max_depth: usize,
    },

    /// A value was narrowed to a type it does not hold
    #[error("Type mismatch for {accession}: expected a numeric value, found {found}")]
    TypeMismatch {
        /// Accession of the offending parameter
        accession: String,
        /// Variant actually held
        found: &'static str,
    },

    /// I/O error reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON text could not be decoded or encoded
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl MzQcError {
    pub(crate) fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        MzQcError::Schema {
            path: path.into(),
            message: message.into(),
        }
    }
}
