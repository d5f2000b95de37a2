use serde_json::Value;

use crate::diagnostics::Diagnostic;
use crate::document::MzQcDocument;
use crate::parse::{ParseContext, ParseOptions};
use crate::schema::MZQC_ROOT_KEY;

use super::{ValidationCheck, ValidationReport};

/// Step 1: Structure validation; returns the parsed document when usable
pub(crate) fn check_structure(
    text: &str,
    options: ParseOptions,
    report: &mut ValidationReport,
) -> Option<MzQcDocument> {
    let json: Value = match serde_json::from_str(text) {
        Ok(json) => {
            report.add_check(ValidationCheck::ok("Valid JSON"));
            json
        }
        Err(e) => {
            report.add_check(ValidationCheck::failed("Valid JSON", e.to_string()));
            return None;
        }
    };

    if json.get(MZQC_ROOT_KEY).is_none() {
        report.add_check(ValidationCheck::failed(
            "mzQC root element",
            format!("Missing top-level '{}' key", MZQC_ROOT_KEY),
        ));
        return None;
    }
    report.add_check(ValidationCheck::ok("mzQC root element"));

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let parsed = {
        let mut ctx = ParseContext::new(options, &mut diagnostics);
        MzQcDocument::parse(&json, &mut ctx)
    };

    let document = match parsed {
        Ok(document) => {
            report.add_check(ValidationCheck::ok("Document structure"));
            document
        }
        Err(e) => {
            report.add_check(ValidationCheck::failed("Document structure", e.to_string()));
            return None;
        }
    };

    if diagnostics.is_empty() {
        report.add_check(ValidationCheck::ok("Value shapes recognized"));
    }
    for diagnostic in diagnostics {
        report.add_check(ValidationCheck::warning("Value shape", diagnostic.to_string()));
    }

    Some(document)
}
