use serde::Serialize;
use serde_json::Value;
use std::ops::Deref;

use crate::controlled_vocabulary::CvParameter;
use crate::error::MzQcError;
use crate::parse::{child_path, expect_object, parse_list, ParseContext};
use crate::schema::{KEY_METADATA, KEY_QUALITY_METRICS};

use super::Metadata;

/// A QC metric: a CV parameter whose value is usually numeric
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QualityMetric {
    /// Metric term, value and unit
    pub cv: CvParameter,
}

impl QualityMetric {
    /// Wrap a CV parameter as a metric
    pub fn new(cv: CvParameter) -> Self {
        Self { cv }
    }

    /// The metric value widened to `f64`.
    ///
    /// Fails with [`MzQcError::TypeMismatch`] unless the value is an
    /// integer or real.
    pub fn numeric_value(&self) -> Result<f64, MzQcError> {
        self.cv.value.as_f64().ok_or_else(|| MzQcError::TypeMismatch {
            accession: self.cv.accession.clone(),
            found: self.cv.value.kind_name(),
        })
    }

    /// Parse a metric located at `path`
    pub fn parse(json: &Value, path: &str, ctx: &mut ParseContext<'_>) -> Result<Self, MzQcError> {
        CvParameter::parse(json, path, ctx).map(Self::new)
    }

    /// Serialize to a JSON object
    pub fn to_json(&self) -> Value {
        self.cv.to_json()
    }
}

impl From<CvParameter> for QualityMetric {
    fn from(cv: CvParameter) -> Self {
        Self::new(cv)
    }
}

impl Deref for QualityMetric {
    type Target = CvParameter;

    fn deref(&self) -> &CvParameter {
        &self.cv
    }
}

/// One run quality or set quality record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseQuality {
    /// Provenance of the metrics
    pub metadata: Metadata,
    /// Computed metrics
    pub quality_metrics: Vec<QualityMetric>,
}

impl BaseQuality {
    /// Create a record with the given metadata and no metrics
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            quality_metrics: Vec::new(),
        }
    }

    /// Add a metric (builder pattern)
    pub fn with_metric(mut self, metric: impl Into<QualityMetric>) -> Self {
        self.add_metric(metric);
        self
    }

    /// Add a metric
    pub fn add_metric(&mut self, metric: impl Into<QualityMetric>) {
        self.quality_metrics.push(metric.into());
    }

    /// Find a metric by accession
    pub fn metric(&self, accession: &str) -> Option<&QualityMetric> {
        self.quality_metrics.iter().find(|m| m.accession == accession)
    }

    /// Label from the metadata, if set
    pub fn label(&self) -> Option<&str> {
        Some(self.metadata.label.as_str()).filter(|l| !l.is_empty())
    }

    /// Parse a record located at `path`; missing `metadata` yields empty metadata
    pub fn parse(json: &Value, path: &str, ctx: &mut ParseContext<'_>) -> Result<Self, MzQcError> {
        let object = expect_object(json, path)?;

        let metadata = match object.get(KEY_METADATA) {
            Some(metadata) => Metadata::parse(metadata, &child_path(path, KEY_METADATA), ctx)?,
            None => Metadata::default(),
        };

        Ok(Self {
            metadata,
            quality_metrics: parse_list(object, KEY_QUALITY_METRICS, path, ctx, QualityMetric::parse)?,
        })
    }

    /// Serialize to a JSON object; `qualityMetrics` is written even when empty
    pub fn to_json(&self) -> Result<Value, MzQcError> {
        Ok(serde_json::to_value(self)?)
    }
}
