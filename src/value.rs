//! # CV Parameter Values
//!
//! Every CV parameter carries one [`CvValue`]. mzQC does not tag the value
//! type on the wire, so the variant is inferred from the JSON shape alone:
//!
//! | JSON | Variant |
//! |------|---------|
//! | integer number (`5`) | [`CvValue::Integer`] |
//! | floating-point number (`5.0`, `1e3`) | [`CvValue::Real`] |
//! | string | [`CvValue::Text`] |
//! | array of numbers | [`CvValue::Series`] |
//! | object of label to array of numbers | [`CvValue::Table`] |
//! | missing, `null`, boolean | [`CvValue::Absent`] |
//!
//! Arrays with non-numeric elements fall back to `Absent` and report a
//! [`Diagnostic`] instead of failing the parse.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};

/// Table value: row label to numeric column, in document order
pub type Table = IndexMap<String, Vec<f64>>;

/// The value held by a CV parameter
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CvValue {
    /// No value; never written to output
    #[default]
    Absent,
    /// Integer-typed JSON number
    Integer(i64),
    /// Floating-point JSON number
    Real(f64),
    /// JSON string
    Text(String),
    /// Ordered sequence of reals
    Series(Vec<f64>),
    /// Labeled rows of reals; rows may differ in length
    Table(Table),
}

impl CvValue {
    /// Infer a value from an untyped JSON node.
    ///
    /// `path` locates the node for diagnostics. Integer and real are told
    /// apart by how the number was written (`5` vs `5.0`), not by its value.
    pub fn infer(json: &Value, path: &str, sink: &mut dyn DiagnosticSink) -> Self {
        match json {
            Value::Number(number) => Self::from_number(number, path, sink),
            Value::String(text) => CvValue::Text(text.clone()),
            Value::Array(items) => match numeric_series(items) {
                Ok(series) => CvValue::Series(series),
                Err(index) => {
                    sink.report(Diagnostic::new(
                        DiagnosticKind::NonNumericSeries,
                        path,
                        format!(
                            "element {} is {}, expected a number; value dropped",
                            index,
                            json_kind(&items[index])
                        ),
                    ));
                    CvValue::Absent
                }
            },
            Value::Object(rows) => Self::table_from_object(rows, path, sink),
            Value::Null | Value::Bool(_) => {
                log::debug!("{}: {} value treated as absent", path, json_kind(json));
                CvValue::Absent
            }
        }
    }

    fn from_number(number: &Number, path: &str, sink: &mut dyn DiagnosticSink) -> Self {
        if let Some(integer) = number.as_i64() {
            return CvValue::Integer(integer);
        }

        let Some(real) = number.as_f64() else {
            return CvValue::Absent;
        };

        if number.is_u64() {
            sink.report(Diagnostic::new(
                DiagnosticKind::IntegerOutOfRange,
                path,
                format!("{} exceeds the integer range; stored as real", number),
            ));
        }

        CvValue::Real(real)
    }

    fn table_from_object(rows: &Map<String, Value>, path: &str, sink: &mut dyn DiagnosticSink) -> Self {
        let mut table = Table::with_capacity(rows.len());

        for (label, row) in rows {
            let Value::Array(items) = row else {
                log::debug!("{}: skipping non-array table entry '{}'", path, label);
                continue;
            };

            match numeric_series(items) {
                Ok(series) => {
                    table.insert(label.clone(), series);
                }
                Err(index) => {
                    sink.report(Diagnostic::new(
                        DiagnosticKind::NonNumericTableRow,
                        format!("{}.{}", path, label),
                        format!(
                            "element {} is {}, expected a number; table dropped",
                            index,
                            json_kind(&items[index])
                        ),
                    ));
                    return CvValue::Absent;
                }
            }
        }

        if table.is_empty() {
            CvValue::Absent
        } else {
            CvValue::Table(table)
        }
    }

    /// Emit the JSON form of this value, or `None` for [`CvValue::Absent`].
    ///
    /// JSON has no NaN or infinity. A non-finite real, or a series holding
    /// one, emits `None`; a table drops only the rows holding one, and emits
    /// `None` once no row is left. Each omission is logged as a warning.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            CvValue::Absent => None,
            CvValue::Integer(v) => Some(Value::from(*v)),
            CvValue::Real(v) => {
                let number = Number::from_f64(*v).map(Value::Number);
                if number.is_none() {
                    log::warn!("non-finite real {} has no JSON form; value omitted", v);
                }
                number
            }
            CvValue::Text(v) => Some(Value::String(v.clone())),
            CvValue::Series(values) => {
                let array = finite_array(values);
                if array.is_none() {
                    log::warn!("series holds a non-finite real; value omitted");
                }
                array
            }
            CvValue::Table(rows) => {
                let object: Map<String, Value> = rows
                    .iter()
                    .filter_map(|(label, series)| match finite_array(series) {
                        Some(array) => Some((label.clone(), array)),
                        None => {
                            log::warn!("table row '{}' holds a non-finite real; row omitted", label);
                            None
                        }
                    })
                    .collect();

                if object.is_empty() {
                    None
                } else {
                    Some(Value::Object(object))
                }
            }
        }
    }

    /// Check whether no value is present
    pub fn is_absent(&self) -> bool {
        matches!(self, CvValue::Absent)
    }

    /// Numeric scalar widened to `f64`, if this is an integer or real
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CvValue::Integer(v) => Some(*v as f64),
            CvValue::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// Text content, if this is a text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CvValue::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Series content, if this is a series value
    pub fn as_series(&self) -> Option<&[f64]> {
        match self {
            CvValue::Series(v) => Some(v),
            _ => None,
        }
    }

    /// Table content, if this is a table value
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            CvValue::Table(v) => Some(v),
            _ => None,
        }
    }

    /// Name of the active variant, for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            CvValue::Absent => "absent",
            CvValue::Integer(_) => "integer",
            CvValue::Real(_) => "real",
            CvValue::Text(_) => "text",
            CvValue::Series(_) => "series",
            CvValue::Table(_) => "table",
        }
    }
}

/// Convert every element to `f64`, or return the index of the first non-number
fn numeric_series(items: &[Value]) -> Result<Vec<f64>, usize> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| item.as_f64().ok_or(index))
        .collect()
}

/// JSON array of `values`, or `None` if any of them is NaN or infinite
fn finite_array(values: &[f64]) -> Option<Value> {
    values
        .iter()
        .map(|v| Number::from_f64(*v).map(Value::Number))
        .collect::<Option<Vec<Value>>>()
        .map(Value::Array)
}

pub(crate) fn json_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<i64> for CvValue {
    fn from(v: i64) -> Self {
        CvValue::Integer(v)
    }
}

impl From<i32> for CvValue {
    fn from(v: i32) -> Self {
        CvValue::Integer(i64::from(v))
    }
}

impl From<f64> for CvValue {
    fn from(v: f64) -> Self {
        CvValue::Real(v)
    }
}

impl From<&str> for CvValue {
    fn from(v: &str) -> Self {
        CvValue::Text(v.to_string())
    }
}

impl From<String> for CvValue {
    fn from(v: String) -> Self {
        CvValue::Text(v)
    }
}

impl From<Vec<f64>> for CvValue {
    fn from(v: Vec<f64>) -> Self {
        CvValue::Series(v)
    }
}

impl From<Table> for CvValue {
    fn from(v: Table) -> Self {
        CvValue::Table(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn infer(json: &Value) -> (CvValue, Vec<Diagnostic>) {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let value = CvValue::infer(json, "value", &mut sink);
        (value, sink)
    }

    #[test]
    fn test_integer_and_real_follow_number_encoding() {
        assert_eq!(infer(&json!(5)).0, CvValue::Integer(5));
        assert_eq!(infer(&json!(-3)).0, CvValue::Integer(-3));
        assert_eq!(infer(&json!(5.0)).0, CvValue::Real(5.0));

        let parsed: Value = serde_json::from_str("1e3").unwrap();
        assert_eq!(infer(&parsed).0, CvValue::Real(1000.0));
    }

    #[test]
    fn test_text() {
        assert_eq!(infer(&json!("Orbitrap")).0, CvValue::Text("Orbitrap".to_string()));
    }

    #[test]
    fn test_series_accepts_mixed_number_kinds() {
        let (value, diagnostics) = infer(&json!([1, 2.5, 3]));
        assert_eq!(value, CvValue::Series(vec![1.0, 2.5, 3.0]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_empty_array_is_empty_series() {
        assert_eq!(infer(&json!([])).0, CvValue::Series(Vec::new()));
    }

    #[test]
    fn test_non_numeric_series_falls_back_to_absent() {
        let (value, diagnostics) = infer(&json!([1.0, "x", 3.0]));
        assert_eq!(value, CvValue::Absent);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::NonNumericSeries);
        assert!(diagnostics[0].message.contains("element 1"));
    }

    #[test]
    fn test_table_skips_non_array_entries() {
        let (value, diagnostics) = infer(&json!({"RT": [1.0, 2.0], "label": "not-an-array"}));

        let table = value.as_table().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table["RT"], vec![1.0, 2.0]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_table_keeps_document_order_and_ragged_rows() {
        let (value, _) = infer(&json!({"z": [1.0], "a": [1.0, 2.0, 3.0], "m": []}));
        let table = value.as_table().unwrap();

        let labels: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["z", "a", "m"]);
        assert_eq!(table["a"].len(), 3);
        assert!(table["m"].is_empty());
    }

    #[test]
    fn test_table_without_rows_is_absent() {
        assert_eq!(infer(&json!({})).0, CvValue::Absent);
        assert_eq!(infer(&json!({"a": "b", "c": 1})).0, CvValue::Absent);
    }

    #[test]
    fn test_table_row_with_non_number_drops_table() {
        let (value, diagnostics) = infer(&json!({"RT": [1.0], "bad": [1.0, null]}));
        assert_eq!(value, CvValue::Absent);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::NonNumericTableRow);
        assert_eq!(diagnostics[0].path, "value.bad");
    }

    #[test]
    fn test_null_and_bool_are_absent() {
        assert_eq!(infer(&json!(null)).0, CvValue::Absent);
        assert_eq!(infer(&json!(true)).0, CvValue::Absent);
    }

    #[test]
    fn test_large_unsigned_becomes_real() {
        let (value, diagnostics) = infer(&json!(u64::MAX));
        assert_eq!(value, CvValue::Real(u64::MAX as f64));
        assert_eq!(diagnostics[0].kind, DiagnosticKind::IntegerOutOfRange);
    }

    #[test]
    fn test_absent_emits_nothing() {
        assert_eq!(CvValue::Absent.to_json(), None);
    }

    #[test]
    fn test_emit_preserves_shape() {
        for input in [
            json!(42),
            json!(0.25),
            json!("text"),
            json!([1.5, 2.5]),
            json!({"b": [1.0], "a": [2.0, 3.0]}),
        ] {
            let (value, _) = infer(&input);
            assert_eq!(value.to_json(), Some(input));
        }
    }

    #[test]
    fn test_non_finite_scalar_and_series_are_omitted() {
        assert_eq!(CvValue::Real(f64::NAN).to_json(), None);
        assert_eq!(CvValue::Real(f64::INFINITY).to_json(), None);
        assert_eq!(CvValue::Series(vec![1.0, f64::NEG_INFINITY]).to_json(), None);
        assert_eq!(CvValue::Series(vec![1.0, 2.0]).to_json(), Some(json!([1.0, 2.0])));
    }

    #[test]
    fn test_non_finite_table_row_is_dropped_alone() {
        let mut table = Table::new();
        table.insert("RT".to_string(), vec![1.0, 2.0]);
        table.insert("ratio".to_string(), vec![0.5, f64::NAN]);

        assert_eq!(CvValue::Table(table).to_json(), Some(json!({"RT": [1.0, 2.0]})));

        let mut all_bad = Table::new();
        all_bad.insert("ratio".to_string(), vec![f64::NAN]);
        assert_eq!(CvValue::Table(all_bad).to_json(), None);
        assert_eq!(CvValue::Table(Table::new()).to_json(), None);
    }

    #[test]
    fn test_real_with_integral_value_stays_real() {
        let text = serde_json::to_string(&CvValue::Real(5.0).to_json().unwrap()).unwrap();
        assert_eq!(text, "5.0");
    }

    #[test]
    fn test_numeric_narrowing() {
        assert_eq!(CvValue::Integer(5).as_f64(), Some(5.0));
        assert_eq!(CvValue::Real(0.5).as_f64(), Some(0.5));
        assert_eq!(CvValue::from("5").as_f64(), None);
    }
}
