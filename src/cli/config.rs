//! TOML configuration file support.
//!
//! Settings shared across invocations can live in a config file instead of
//! being repeated as flags:
//!
//! ```toml
//! # mzqc.toml
//! [parse]
//! max_unit_depth = 8
//!
//! [output]
//! pretty = false
//! ```
//!
//! Command-line flags take precedence over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use mzqc::parse::ParseOptions;
use mzqc::writer::WriterConfig;

/// Root configuration structure for mzqc.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Input parsing settings.
    #[serde(default)]
    pub parse: ParseConfig,

    /// Output formatting settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for reading documents.
#[derive(Debug, Default, Deserialize)]
pub struct ParseConfig {
    /// Maximum nesting of unit parameters.
    pub max_unit_depth: Option<usize>,
}

/// Configuration for writing documents.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Indent output (true) or write a single line (false).
    pub pretty: Option<bool>,
}

impl Config {
    /// Load configuration from an optional TOML file; no file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Parse options, with a command-line depth taking precedence.
    pub fn parse_options(&self, max_unit_depth: Option<usize>) -> ParseOptions {
        let defaults = ParseOptions::default();
        let depth = max_unit_depth
            .or(self.parse.max_unit_depth)
            .unwrap_or(defaults.max_unit_depth);
        defaults.with_max_unit_depth(depth)
    }

    /// Writer settings; `--compact` always wins over the file.
    pub fn writer_config(&self, compact: bool) -> WriterConfig {
        if compact {
            WriterConfig::compact()
        } else {
            WriterConfig {
                pretty: self.output.pretty.unwrap_or(WriterConfig::default().pretty),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [parse]
            max_unit_depth = 8

            [output]
            pretty = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.parse.max_unit_depth, Some(8));
        assert_eq!(config.output.pretty, Some(false));
        assert_eq!(config.parse_options(None).max_unit_depth, 8);
        assert!(!config.writer_config(false).pretty);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::from_str("[parse]\nmax_unit_depth = 8\n").unwrap();
        assert_eq!(config.parse_options(Some(2)).max_unit_depth, 2);
        assert!(!config.writer_config(true).pretty);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.parse_options(None), ParseOptions::default());
        assert!(config.writer_config(false).pretty);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[parse]\nmax_unit_depth = \"deep\"").is_err());
    }
}
