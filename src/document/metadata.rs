use serde::Serialize;
use serde_json::Value;
use std::ops::Deref;

use crate::controlled_vocabulary::CvParameter;
use crate::error::MzQcError;
use crate::parse::{child_path, expect_object, parse_list, string_field, ParseContext};
use crate::schema::*;

/// Provenance block of a run or set quality record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Optional label; empty means not present
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Files the metrics were computed from
    pub input_files: Vec<InputFile>,
    /// Software that computed the metrics
    pub analysis_software: Vec<AnalysisSoftware>,
    /// Additional free-form CV parameters
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cv_parameters: Vec<CvParameter>,
}

impl Metadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label (builder pattern)
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Add an input file (builder pattern)
    pub fn with_input_file(mut self, input_file: InputFile) -> Self {
        self.input_files.push(input_file);
        self
    }

    /// Add analysis software (builder pattern)
    pub fn with_software(mut self, software: AnalysisSoftware) -> Self {
        self.analysis_software.push(software);
        self
    }

    /// Add a free-form CV parameter (builder pattern)
    pub fn with_cv_parameter(mut self, param: CvParameter) -> Self {
        self.cv_parameters.push(param);
        self
    }

    /// Find analysis software by accession
    pub fn software(&self, accession: &str) -> Option<&AnalysisSoftware> {
        self.analysis_software.iter().find(|s| s.accession == accession)
    }

    /// Parse a metadata block located at `path`
    pub fn parse(json: &Value, path: &str, ctx: &mut ParseContext<'_>) -> Result<Self, MzQcError> {
        let object = expect_object(json, path)?;

        Ok(Self {
            label: string_field(object, KEY_LABEL, path)?,
            input_files: parse_list(object, KEY_INPUT_FILES, path, ctx, InputFile::parse)?,
            analysis_software: parse_list(
                object,
                KEY_ANALYSIS_SOFTWARE,
                path,
                ctx,
                AnalysisSoftware::parse,
            )?,
            cv_parameters: parse_list(object, KEY_CV_PARAMETERS, path, ctx, CvParameter::parse)?,
        })
    }

    /// Serialize to a JSON object.
    ///
    /// `inputFiles` and `analysisSoftware` are always written; `label` and
    /// `cvParameters` only when non-empty.
    pub fn to_json(&self) -> Result<Value, MzQcError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// An input file that QC metrics were derived from
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFile {
    /// File name
    pub name: String,
    /// File location (URI or path)
    pub location: String,
    /// File format term (e.g. MS:1000584 mzML format)
    pub file_format: CvParameter,
    /// Additional file properties (checksums, completion time, ...)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_properties: Vec<CvParameter>,
}

impl InputFile {
    /// Create a new input file entry
    pub fn new(name: &str, location: &str, file_format: CvParameter) -> Self {
        Self {
            name: name.to_string(),
            location: location.to_string(),
            file_format,
            file_properties: Vec::new(),
        }
    }

    /// Add a file property (builder pattern)
    pub fn with_property(mut self, property: CvParameter) -> Self {
        self.file_properties.push(property);
        self
    }

    /// Parse an input file located at `path`; a missing `fileFormat` is left empty
    pub fn parse(json: &Value, path: &str, ctx: &mut ParseContext<'_>) -> Result<Self, MzQcError> {
        let object = expect_object(json, path)?;

        let file_format = match object.get(KEY_FILE_FORMAT) {
            Some(format) => CvParameter::parse(format, &child_path(path, KEY_FILE_FORMAT), ctx)?,
            None => CvParameter::default(),
        };

        Ok(Self {
            name: string_field(object, KEY_NAME, path)?,
            location: string_field(object, KEY_LOCATION, path)?,
            file_format,
            file_properties: parse_list(object, KEY_FILE_PROPERTIES, path, ctx, CvParameter::parse)?,
        })
    }

    /// Serialize to a JSON object; `fileProperties` only when non-empty
    pub fn to_json(&self) -> Result<Value, MzQcError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Software that produced the QC metrics: a CV parameter plus version and URI
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisSoftware {
    /// Software term
    #[serde(flatten)]
    pub cv: CvParameter,
    /// Software version
    pub version: String,
    /// Software home page or repository
    pub uri: String,
}

impl AnalysisSoftware {
    /// Create a new software entry
    pub fn new(cv: CvParameter, version: &str, uri: &str) -> Self {
        Self {
            cv,
            version: version.to_string(),
            uri: uri.to_string(),
        }
    }

    /// Parse a software entry located at `path`
    pub fn parse(json: &Value, path: &str, ctx: &mut ParseContext<'_>) -> Result<Self, MzQcError> {
        let cv = CvParameter::parse(json, path, ctx)?;
        let object = expect_object(json, path)?;

        Ok(Self {
            cv,
            version: string_field(object, KEY_VERSION, path)?,
            uri: string_field(object, KEY_URI, path)?,
        })
    }

    /// Serialize to a JSON object; `version` and `uri` are always written
    pub fn to_json(&self) -> Result<Value, MzQcError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Deref for AnalysisSoftware {
    type Target = CvParameter;

    fn deref(&self) -> &CvParameter {
        &self.cv
    }
}
