use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::document::{BaseQuality, MzQcDocument};
use crate::schema::{KEY_RUN_QUALITIES, KEY_SET_QUALITIES, MZQC_FORMAT_VERSION};

use super::{ValidationCheck, ValidationReport};

/// Step 2: Content validation on a parsed document
pub(crate) fn check_content(document: &MzQcDocument, report: &mut ValidationReport) {
    check_version(&document.version, report);
    check_creation_date(&document.creation_date, report);

    if document.controlled_vocabularies.is_empty() {
        report.add_check(ValidationCheck::warning(
            "Controlled vocabularies",
            "No controlled vocabularies declared",
        ));
    } else {
        report.add_check(ValidationCheck::ok(format!(
            "Controlled vocabularies ({})",
            document.controlled_vocabularies.len()
        )));
    }

    if document.run_qualities.is_empty() && document.set_qualities.is_empty() {
        report.add_check(ValidationCheck::warning(
            "Quality records",
            "Document has neither runQualities nor setQualities",
        ));
    } else {
        report.add_check(ValidationCheck::ok(format!(
            "Quality records ({} run, {} set)",
            document.run_qualities.len(),
            document.set_qualities.len()
        )));
    }

    let mut complete = true;
    let groups = [
        (KEY_RUN_QUALITIES, &document.run_qualities),
        (KEY_SET_QUALITIES, &document.set_qualities),
    ];
    for (key, qualities) in groups {
        for (i, quality) in qualities.iter().enumerate() {
            complete &= check_quality(&format!("{}[{}]", key, i), quality, report);
        }
    }
    if complete {
        report.add_check(ValidationCheck::ok("Quality record provenance and metrics"));
    }
}

fn check_version(version: &str, report: &mut ValidationReport) {
    if version.is_empty() {
        report.add_check(ValidationCheck::warning("Format version", "version is missing"));
    } else if version == MZQC_FORMAT_VERSION {
        report.add_check(ValidationCheck::ok(format!("Format version ({})", version)));
    } else {
        report.add_check(ValidationCheck::warning(
            "Format version",
            format!("Expected {}, found {}", MZQC_FORMAT_VERSION, version),
        ));
    }
}

fn check_creation_date(date: &str, report: &mut ValidationReport) {
    if date.is_empty() {
        report.add_check(ValidationCheck::warning("Creation date", "creationDate is missing"));
    } else if is_iso8601(date) {
        report.add_check(ValidationCheck::ok("Creation date is ISO 8601"));
    } else {
        report.add_check(ValidationCheck::warning(
            "Creation date",
            format!("'{}' is not an ISO 8601 date-time", date),
        ));
    }
}

fn is_iso8601(date: &str) -> bool {
    DateTime::parse_from_rfc3339(date).is_ok()
        || NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// Returns true when the record raised no warnings
fn check_quality(location: &str, quality: &BaseQuality, report: &mut ValidationReport) -> bool {
    let before = report.warning_count();

    if quality.metadata.input_files.is_empty() {
        report.add_check(ValidationCheck::warning(
            format!("{} input files", location),
            "No input files listed",
        ));
    }

    if quality.metadata.analysis_software.is_empty() {
        report.add_check(ValidationCheck::warning(
            format!("{} analysis software", location),
            "No analysis software listed",
        ));
    }

    if quality.quality_metrics.is_empty() {
        report.add_check(ValidationCheck::warning(
            format!("{} metrics", location),
            "No quality metrics",
        ));
    }

    for (j, metric) in quality.quality_metrics.iter().enumerate() {
        if metric.accession.is_empty() || metric.name.is_empty() {
            report.add_check(ValidationCheck::warning(
                format!("{}.qualityMetrics[{}]", location, j),
                "Metric is missing its accession or name",
            ));
        }
    }

    report.warning_count() == before
}
