//! # Controlled Vocabulary Parameters
//!
//! Every named quantity in an mzQC document is a CV parameter: an accession
//! from a controlled vocabulary (PSI-MS, UO, ...), a human-readable name, an
//! optional description and [`CvValue`], and an optional unit which is itself
//! a CV parameter.
//!
//! Reading is permissive (any missing field defaults to empty/absent) and
//! writing is conservative (empty optional fields are omitted), so a parsed
//! parameter re-serializes to the same semantic content without gaining
//! `"description": ""` or `"value": null` entries.
//!
//! ## Reference
//! - PSI-MS OBO: https://github.com/HUPO-PSI/psi-ms-CV
//! - Unit Ontology: https://github.com/bio-ontology-research-group/unit-ontology

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::MzQcError;
use crate::parse::{
    child_path, expect_object, insert_non_empty, string_field, with_log_context, ParseContext,
};
use crate::schema::{KEY_ACCESSION, KEY_DESCRIPTION, KEY_NAME, KEY_UNIT, KEY_URI, KEY_VALUE, KEY_VERSION};
use crate::value::CvValue;

/// A controlled vocabulary parameter with optional value and unit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CvParameter {
    /// CV accession (e.g., "MS:4000059")
    pub accession: String,
    /// Human-readable name
    pub name: String,
    /// Free-text description; empty means not present
    pub description: String,
    /// Inferred value
    pub value: CvValue,
    /// Unit of the value, itself a CV parameter
    pub unit: Option<Box<CvParameter>>,
}

impl CvParameter {
    /// Create a new CV parameter with accession and name
    pub fn new(accession: &str, name: &str) -> Self {
        Self {
            accession: accession.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Add a description (builder pattern)
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Add a value (builder pattern)
    pub fn with_value(mut self, value: impl Into<CvValue>) -> Self {
        self.value = value.into();
        self
    }

    /// Add a unit (builder pattern)
    pub fn with_unit(mut self, unit: CvParameter) -> Self {
        self.unit = Some(Box::new(unit));
        self
    }

    /// Iterate over the unit chain, starting with this parameter's unit
    pub fn unit_chain(&self) -> impl Iterator<Item = &CvParameter> {
        std::iter::successors(self.unit.as_deref(), |unit| unit.unit.as_deref())
    }

    /// Parse a CV parameter with default options, logging value diagnostics
    pub fn from_json(json: &Value) -> Result<Self, MzQcError> {
        with_log_context(|ctx| Self::parse(json, "$", ctx))
    }

    /// Parse a CV parameter located at `path`.
    ///
    /// Fails if `json` is not an object, a string field holds another type,
    /// or the unit chain nests deeper than `ParseOptions::max_unit_depth`.
    pub fn parse(json: &Value, path: &str, ctx: &mut ParseContext<'_>) -> Result<Self, MzQcError> {
        Self::parse_at_depth(json, path, 0, ctx)
    }

    fn parse_at_depth(
        json: &Value,
        path: &str,
        depth: usize,
        ctx: &mut ParseContext<'_>,
    ) -> Result<Self, MzQcError> {
        let object = expect_object(json, path)?;

        // Everything fallible is read before `value` reports any diagnostic
        let accession = string_field(object, KEY_ACCESSION, path)?;
        let name = string_field(object, KEY_NAME, path)?;
        let description = string_field(object, KEY_DESCRIPTION, path)?;

        let unit = match object.get(KEY_UNIT) {
            Some(unit) => {
                let unit_path = child_path(path, KEY_UNIT);
                let max_depth = ctx.options().max_unit_depth;
                if depth >= max_depth {
                    return Err(MzQcError::UnitDepthExceeded {
                        path: unit_path,
                        max_depth,
                    });
                }
                Some(Box::new(Self::parse_at_depth(unit, &unit_path, depth + 1, ctx)?))
            }
            None => None,
        };

        let value = match object.get(KEY_VALUE) {
            Some(value) => CvValue::infer(value, &child_path(path, KEY_VALUE), ctx.sink()),
            None => CvValue::Absent,
        };

        Ok(Self {
            accession,
            name,
            description,
            value,
            unit,
        })
    }

    /// Serialize to a JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(self.to_json_map())
    }

    /// Serialize to a JSON map, for types that add their own keys.
    ///
    /// The unit chain is built innermost first, so arbitrarily long chains
    /// do not recurse.
    pub fn to_json_map(&self) -> Map<String, Value> {
        let units: Vec<&CvParameter> = self.unit_chain().collect();

        let mut unit_json = None;
        for unit in units.into_iter().rev() {
            unit_json = Some(Value::Object(unit.fields_to_json(unit_json)));
        }

        self.fields_to_json(unit_json)
    }

    fn fields_to_json(&self, unit: Option<Value>) -> Map<String, Value> {
        let mut object = Map::new();
        object.insert(KEY_ACCESSION.to_string(), Value::String(self.accession.clone()));
        object.insert(KEY_NAME.to_string(), Value::String(self.name.clone()));
        insert_non_empty(&mut object, KEY_DESCRIPTION, &self.description);

        if let Some(value) = self.value.to_json() {
            object.insert(KEY_VALUE.to_string(), value);
        }

        if let Some(unit) = unit {
            object.insert(KEY_UNIT.to_string(), unit);
        }

        object
    }
}

impl Serialize for CvParameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_map().serialize(serializer)
    }
}

impl fmt::Display for CvParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.to_json() {
            Some(v) => write!(f, "[{}: {}={}]", self.accession, self.name, v)?,
            None => write!(f, "[{}: {}]", self.accession, self.name)?,
        }
        if let Some(unit) = &self.unit {
            write!(f, " {}", unit.name)?;
        }
        Ok(())
    }
}

/// A controlled vocabulary referenced by the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ControlledVocabulary {
    /// Full vocabulary name
    pub name: String,
    /// Location of the vocabulary file
    pub uri: String,
    /// Vocabulary release; empty means not present
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl ControlledVocabulary {
    /// Create a new registry entry
    pub fn new(name: &str, uri: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            uri: uri.to_string(),
            version: version.to_string(),
        }
    }

    /// PSI-MS ontology at the given release
    pub fn psi_ms(version: &str) -> Self {
        Self::new(
            "Proteomics Standards Initiative Mass Spectrometry Ontology",
            &format!(
                "https://github.com/HUPO-PSI/psi-ms-CV/releases/download/{}/psi-ms.obo",
                version
            ),
            version,
        )
    }

    /// Unit Ontology (unversioned)
    pub fn unit_ontology() -> Self {
        Self::new("Unit Ontology", "http://purl.obolibrary.org/obo/uo.owl", "")
    }

    /// Parse a registry entry located at `path`
    pub fn parse(json: &Value, path: &str, _ctx: &mut ParseContext<'_>) -> Result<Self, MzQcError> {
        let object = expect_object(json, path)?;
        Ok(Self {
            name: string_field(object, KEY_NAME, path)?,
            uri: string_field(object, KEY_URI, path)?,
            version: string_field(object, KEY_VERSION, path)?,
        })
    }

    /// Serialize to a JSON object; `version` only when non-empty
    pub fn to_json(&self) -> Result<Value, MzQcError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Unit ontology terms commonly used with QC metrics
pub mod unit_terms {
    use super::CvParameter;

    /// UO:0000010 - second
    pub fn second() -> CvParameter {
        CvParameter::new("UO:0000010", "second")
    }

    /// UO:0000031 - minute
    pub fn minute() -> CvParameter {
        CvParameter::new("UO:0000031", "minute")
    }

    /// UO:0000028 - millisecond
    pub fn millisecond() -> CvParameter {
        CvParameter::new("UO:0000028", "millisecond")
    }

    /// UO:0000169 - parts per million
    pub fn ppm() -> CvParameter {
        CvParameter::new("UO:0000169", "parts per million")
    }

    /// UO:0000187 - percent
    pub fn percent() -> CvParameter {
        CvParameter::new("UO:0000187", "percent")
    }

    /// UO:0000189 - count unit
    pub fn count() -> CvParameter {
        CvParameter::new("UO:0000189", "count unit")
    }

    /// MS:1000040 - m/z
    pub fn mz() -> CvParameter {
        CvParameter::new("MS:1000040", "m/z")
    }
}

/// PSI-MS terms describing input files
pub mod file_terms {
    use super::CvParameter;

    /// MS:1000584 - mzML format
    pub fn mzml_format() -> CvParameter {
        CvParameter::new("MS:1000584", "mzML format")
    }

    /// MS:1000569 - SHA-1 checksum of the file
    pub fn sha1(checksum: &str) -> CvParameter {
        CvParameter::new("MS:1000569", "SHA-1").with_value(checksum)
    }

    /// MS:1000747 - completion time of the acquisition
    pub fn completion_time(timestamp: &str) -> CvParameter {
        CvParameter::new("MS:1000747", "completion time").with_value(timestamp)
    }
}

/// PSI-MS QC metric terms
pub mod qc_terms {
    use super::{unit_terms, CvParameter};

    /// MS:4000053 - chromatography duration
    pub fn chromatography_duration(seconds: f64) -> CvParameter {
        CvParameter::new("MS:4000053", "chromatography duration")
            .with_value(seconds)
            .with_unit(unit_terms::second())
    }

    /// MS:4000059 - number of MS1 spectra
    pub fn ms1_spectra_count(count: i64) -> CvParameter {
        CvParameter::new("MS:4000059", "number of MS1 spectra").with_value(count)
    }

    /// MS:4000060 - number of MS2 spectra
    pub fn ms2_spectra_count(count: i64) -> CvParameter {
        CvParameter::new("MS:4000060", "number of MS2 spectra").with_value(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Diagnostic, DiagnosticKind};
    use crate::parse::ParseOptions;
    use serde_json::json;

    fn parse_with(json: &Value, options: ParseOptions) -> (Result<CvParameter, MzQcError>, Vec<Diagnostic>) {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let result = {
            let mut ctx = ParseContext::new(options, &mut sink);
            CvParameter::parse(json, "param", &mut ctx)
        };
        (result, sink)
    }

    #[test]
    fn test_parse_full_node() {
        let json = json!({
            "accession": "MS:4000053",
            "name": "chromatography duration",
            "description": "The retention time duration of the chromatography",
            "value": 3600.5,
            "unit": {"accession": "UO:0000010", "name": "second"}
        });

        let param = CvParameter::from_json(&json).unwrap();
        assert_eq!(param.accession, "MS:4000053");
        assert_eq!(param.value, CvValue::Real(3600.5));
        assert_eq!(param.unit.as_ref().unwrap().name, "second");
        assert_eq!(param.to_json(), json);
    }

    #[test]
    fn test_parse_is_permissive() {
        let param = CvParameter::from_json(&json!({})).unwrap();
        assert_eq!(param, CvParameter::default());
    }

    #[test]
    fn test_emit_omits_empty_optionals() {
        let param = CvParameter::new("MS:1", "");
        assert_eq!(param.to_json(), json!({"accession": "MS:1", "name": ""}));
    }

    #[test]
    fn test_emit_keeps_key_order() {
        let param = CvParameter::new("MS:4000059", "number of MS1 spectra")
            .with_description("d")
            .with_value(10)
            .with_unit(unit_terms::count());

        let keys: Vec<String> = param.to_json_map().keys().cloned().collect();
        assert_eq!(keys, vec!["accession", "name", "description", "value", "unit"]);
    }

    #[test]
    fn test_nested_unit_chain_roundtrip() {
        let param = CvParameter::new("A", "a")
            .with_value(1)
            .with_unit(CvParameter::new("B", "b").with_unit(CvParameter::new("C", "c")));

        let names: Vec<&str> = param.unit_chain().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);

        let restored = CvParameter::from_json(&param.to_json()).unwrap();
        assert_eq!(restored, param);
    }

    #[test]
    fn test_unit_depth_guard() {
        let json = json!({"accession": "A", "unit": {"accession": "B", "unit": {"accession": "C"}}});

        let (ok, _) = parse_with(&json, ParseOptions::default().with_max_unit_depth(2));
        assert!(ok.is_ok());

        let (err, _) = parse_with(&json, ParseOptions::default().with_max_unit_depth(1));
        match err.unwrap_err() {
            MzQcError::UnitDepthExceeded { path, max_depth } => {
                assert_eq!(path, "param.unit.unit");
                assert_eq!(max_depth, 1);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_long_unit_chain_emits_without_recursion() {
        let mut param = CvParameter::new("U0", "u0");
        for i in 1..2_000 {
            param = CvParameter::new(&format!("U{}", i), "u").with_unit(param);
        }

        let json = param.to_json();
        assert_eq!(json["accession"], "U1999");
        assert_eq!(json["unit"]["unit"]["accession"], "U1997");
    }

    #[test]
    fn test_malformed_value_reports_diagnostic() {
        let json = json!({"accession": "A", "name": "a", "value": [1.0, "x", 3.0]});
        let (result, diagnostics) = parse_with(&json, ParseOptions::default());

        let param = result.unwrap();
        assert!(param.value.is_absent());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::NonNumericSeries);
        assert_eq!(diagnostics[0].path, "param.value");
        assert!(!param.to_json_map().contains_key("value"));
    }

    #[test]
    fn test_failed_node_reports_no_value_diagnostics() {
        let bad_name = json!({"accession": "A", "name": 7, "value": [1.0, "x"]});
        let (result, diagnostics) = parse_with(&bad_name, ParseOptions::default());
        assert!(matches!(result, Err(MzQcError::Schema { ref path, .. }) if path == "param.name"));
        assert!(diagnostics.is_empty());

        let too_deep = json!({"accession": "A", "value": [1.0, "x"], "unit": {"accession": "B"}});
        let (result, diagnostics) = parse_with(&too_deep, ParseOptions::default().with_max_unit_depth(0));
        assert!(matches!(result, Err(MzQcError::UnitDepthExceeded { .. })));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_non_object_node_is_schema_error() {
        let err = CvParameter::from_json(&json!("MS:1")).unwrap_err();
        assert!(matches!(err, MzQcError::Schema { .. }));
    }

    #[test]
    fn test_controlled_vocabulary_version_optional() {
        let cv = ControlledVocabulary::unit_ontology();
        assert!(cv.to_json().unwrap().get("version").is_none());

        let cv = ControlledVocabulary::psi_ms("4.1.129");
        assert_eq!(cv.to_json().unwrap()["version"], "4.1.129");
        assert!(cv.uri.contains("4.1.129"));
    }

    #[test]
    fn test_display() {
        let term = qc_terms::chromatography_duration(60.5);
        assert_eq!(term.to_string(), "[MS:4000053: chromatography duration=60.5] second");
    }
}
