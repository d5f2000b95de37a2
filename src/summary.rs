//! Human-readable overview of a document, as printed by `mzqc info`.

use std::fmt;

use crate::document::{BaseQuality, MzQcDocument, QualityMetric};
use crate::value::CvValue;

/// Series longer than this are shown truncated
const SERIES_PREVIEW_LIMIT: usize = 4;

/// Elements shown before truncating a long series
const SERIES_PREVIEW_HEAD: usize = 3;

/// Display adapter summarizing an [`MzQcDocument`]
pub struct DocumentSummary<'a> {
    document: &'a MzQcDocument,
}

impl<'a> DocumentSummary<'a> {
    /// Summarize `document`
    pub fn new(document: &'a MzQcDocument) -> Self {
        Self { document }
    }
}

impl fmt::Display for DocumentSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.document;

        writeln!(f, "Version: {}", doc.version)?;
        writeln!(f, "Creation date: {}", doc.creation_date)?;
        writeln!(f, "Run qualities: {}", doc.run_qualities.len())?;
        writeln!(f, "Set qualities: {}", doc.set_qualities.len())?;
        writeln!(f, "Controlled vocabularies: {}", doc.controlled_vocabularies.len())?;

        write_group(f, "Run Qualities", "Run", &doc.run_qualities)?;
        write_group(f, "Set Qualities", "Set", &doc.set_qualities)?;

        Ok(())
    }
}

fn write_group(
    f: &mut fmt::Formatter<'_>,
    heading: &str,
    fallback_label: &str,
    qualities: &[BaseQuality],
) -> fmt::Result {
    if qualities.is_empty() {
        return Ok(());
    }

    writeln!(f)?;
    writeln!(f, "{}:", heading)?;

    for (i, quality) in qualities.iter().enumerate() {
        match quality.label() {
            Some(label) => write!(f, "  {}", label)?,
            None => write!(f, "  {} {}", fallback_label, i + 1)?,
        }
        writeln!(f, ": {} metrics", quality.quality_metrics.len())?;

        for metric in &quality.quality_metrics {
            write_metric(f, metric)?;
        }
    }

    Ok(())
}

fn write_metric(f: &mut fmt::Formatter<'_>, metric: &QualityMetric) -> fmt::Result {
    write!(f, "    - {} ({})", metric.name, metric.accession)?;

    match &metric.value {
        CvValue::Absent => {}
        CvValue::Integer(v) => write!(f, ": {}", v)?,
        CvValue::Real(v) => write!(f, ": {}", v)?,
        CvValue::Text(v) => write!(f, ": \"{}\"", v)?,
        CvValue::Series(values) => {
            write!(f, ": [")?;
            for (j, v) in values.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
                if j + 1 >= SERIES_PREVIEW_HEAD && values.len() > SERIES_PREVIEW_LIMIT {
                    write!(f, ", ...")?;
                    break;
                }
            }
            write!(f, "]")?;
        }
        CvValue::Table(_) => write!(f, ": Table data")?,
    }

    if let Some(unit) = &metric.unit {
        write!(f, " {}", unit.name)?;
    }

    writeln!(f)
}
