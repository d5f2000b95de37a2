//! Property-based tests for value inference and CV parameter round trips

use mzqc::controlled_vocabulary::CvParameter;
use mzqc::diagnostics::Diagnostic;
use mzqc::value::{CvValue, Table};
use proptest::prelude::*;

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

fn present_value() -> impl Strategy<Value = CvValue> {
    prop_oneof![
        any::<i64>().prop_map(CvValue::Integer),
        finite_f64().prop_map(CvValue::Real),
        ".*".prop_map(CvValue::Text),
        prop::collection::vec(finite_f64(), 0..16).prop_map(CvValue::Series),
        prop::collection::vec(("[A-Z]{2}:[0-9]{7}", prop::collection::vec(finite_f64(), 0..8)), 1..4)
            .prop_map(|rows| CvValue::Table(rows.into_iter().collect::<Table>())),
    ]
}

fn any_value() -> impl Strategy<Value = CvValue> {
    prop_oneof![Just(CvValue::Absent), present_value()]
}

fn unit() -> impl Strategy<Value = CvParameter> {
    ("UO:[0-9]{7}", "[a-z ]{1,12}").prop_map(|(accession, name)| CvParameter::new(&accession, &name))
}

fn cv_parameter() -> impl Strategy<Value = CvParameter> {
    (
        "MS:[0-9]{7}",
        "[a-zA-Z0-9 ]{1,24}",
        "[a-zA-Z ]{0,24}",
        any_value(),
        prop::option::of(unit()),
    )
        .prop_map(|(accession, name, description, value, unit)| {
            let mut param = CvParameter::new(&accession, &name).with_description(&description);
            param.value = value;
            param.unit = unit.map(Box::new);
            param
        })
}

proptest! {
    /// Emitting a present value and inferring it back yields the same value
    #[test]
    fn test_value_roundtrip(value in present_value()) {
        let json = value.to_json().unwrap();

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let inferred = CvValue::infer(&json, "value", &mut diagnostics);

        prop_assert!(diagnostics.is_empty());
        prop_assert_eq!(inferred, value);
    }

    /// Integers stay integers and reals stay reals through JSON text
    #[test]
    fn test_number_kind_survives_text(value in prop_oneof![
        any::<i64>().prop_map(CvValue::Integer),
        finite_f64().prop_map(CvValue::Real),
    ]) {
        let text = serde_json::to_string(&value.to_json().unwrap()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let inferred = CvValue::infer(&json, "value", &mut diagnostics);
        prop_assert_eq!(inferred.kind_name(), value.kind_name());
        prop_assert_eq!(inferred, value);
    }

    /// A parameter parsed from its own output equals the original
    #[test]
    fn test_cv_parameter_roundtrip(param in cv_parameter()) {
        let text = serde_json::to_string(&param.to_json()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        let restored = CvParameter::from_json(&json).unwrap();
        prop_assert_eq!(restored, param);
    }

    /// Emission never writes empty placeholders
    #[test]
    fn test_no_empty_placeholders(param in cv_parameter()) {
        let json = param.to_json();
        let object = json.as_object().unwrap();

        prop_assert_eq!(object.contains_key("description"), !param.description.is_empty());
        prop_assert_eq!(object.contains_key("value"), !param.value.is_absent());
        prop_assert_eq!(object.contains_key("unit"), param.unit.is_some());
    }
}
