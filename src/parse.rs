//! Parse options and JSON field access shared by the CV parameter and
//! document parsers.
//!
//! Missing keys never fail: strings default to empty and sections to empty
//! lists. A key that is present with the wrong JSON type is a schema error.

use serde_json::{Map, Value};

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::error::MzQcError;
use crate::value::json_kind;

/// Default limit on nested `unit` parameters
pub const DEFAULT_MAX_UNIT_DEPTH: usize = 32;

/// Options controlling how documents are read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of nested `unit` links below any CV parameter
    pub max_unit_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_unit_depth: DEFAULT_MAX_UNIT_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Set the maximum unit chain depth (builder pattern)
    pub fn with_max_unit_depth(mut self, depth: usize) -> Self {
        self.max_unit_depth = depth;
        self
    }
}

/// State threaded through a single parse: options plus the diagnostic sink
pub struct ParseContext<'a> {
    options: ParseOptions,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> ParseContext<'a> {
    /// Create a context reporting diagnostics to `sink`
    pub fn new(options: ParseOptions, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self { options, sink }
    }

    /// Options in effect for this parse
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Sink receiving recoverable diagnostics
    pub fn sink(&mut self) -> &mut dyn DiagnosticSink {
        &mut *self.sink
    }
}

/// Run `f` with a default-option context that logs diagnostics
pub(crate) fn with_log_context<T>(f: impl FnOnce(&mut ParseContext<'_>) -> T) -> T {
    let mut sink = LogSink;
    let mut ctx = ParseContext::new(ParseOptions::default(), &mut sink);
    f(&mut ctx)
}

pub(crate) fn child_path(path: &str, key: &str) -> String {
    format!("{}.{}", path, key)
}

pub(crate) fn index_path(path: &str, key: &str, index: usize) -> String {
    format!("{}.{}[{}]", path, key, index)
}

pub(crate) fn expect_object<'j>(json: &'j Value, path: &str) -> Result<&'j Map<String, Value>, MzQcError> {
    json.as_object()
        .ok_or_else(|| MzQcError::schema(path, format!("expected an object, found {}", json_kind(json))))
}

/// Read an optional string field; missing or `null` yields an empty string
pub(crate) fn string_field(object: &Map<String, Value>, key: &str, path: &str) -> Result<String, MzQcError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(MzQcError::schema(
            child_path(path, key),
            format!("expected a string, found {}", json_kind(other)),
        )),
    }
}

/// Read an optional array section; missing yields an empty slice
pub(crate) fn array_field<'j>(
    object: &'j Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'j [Value], MzQcError> {
    match object.get(key) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(MzQcError::schema(
            child_path(path, key),
            format!("expected an array, found {}", json_kind(other)),
        )),
    }
}

/// Parse every element of an optional array section with `parse`
pub(crate) fn parse_list<T>(
    object: &Map<String, Value>,
    key: &str,
    path: &str,
    ctx: &mut ParseContext<'_>,
    mut parse: impl FnMut(&Value, &str, &mut ParseContext<'_>) -> Result<T, MzQcError>,
) -> Result<Vec<T>, MzQcError> {
    array_field(object, key, path)?
        .iter()
        .enumerate()
        .map(|(index, item)| parse(item, &index_path(path, key, index), ctx))
        .collect()
}

/// Insert `value` under `key` only when `value` is non-empty
pub(crate) fn insert_non_empty(object: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        object.insert(key.to_string(), Value::String(value.to_string()));
    }
}
