//! Check results and their rendering for `mzqc validate`.

use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Nothing to report
    Ok,
    /// Readable, but something a consumer may trip over
    Warning(String),
    /// The document cannot be used
    Failed(String),
}

impl CheckStatus {
    fn tag(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning(_) => "WARN",
            CheckStatus::Failed(_) => "FAIL",
        }
    }

    fn detail(&self) -> Option<&str> {
        match self {
            CheckStatus::Ok => None,
            CheckStatus::Warning(msg) | CheckStatus::Failed(msg) => Some(msg),
        }
    }
}

/// A named check and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationCheck {
    /// What was checked, e.g. `Creation date` or `runQualities[0] metrics`
    pub name: String,
    /// Outcome
    pub status: CheckStatus,
}

impl ValidationCheck {
    pub(crate) fn ok(name: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Ok)
    }

    pub(crate) fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Warning(message.into()))
    }

    pub(crate) fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Failed(message.into()))
    }

    fn with_status(name: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// Checks run against one mzQC document, in the order they ran
#[derive(Debug)]
pub struct ValidationReport {
    /// Check results
    pub checks: Vec<ValidationCheck>,
    /// File path, or the label given to `validate_mzqc_str`
    pub source: String,
}

impl ValidationReport {
    /// Start an empty report for `source`
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            source: source.into(),
        }
    }

    /// Record a check result
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// True if any check failed
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// True if any check warned
    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    /// Number of checks that passed
    pub fn success_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Ok))
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Warning(_)))
    }

    /// Number of failed checks
    pub fn failure_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&CheckStatus) -> bool) -> usize {
        self.checks.iter().filter(|c| pred(&c.status)).count()
    }

    fn verdict(&self) -> &'static str {
        if self.has_failures() {
            "Validation FAILED"
        } else if self.has_warnings() {
            "Validation PASSED with warnings"
        } else {
            "Validation PASSED"
        }
    }

    fn summary_line(&self) -> String {
        format!(
            "{} passed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )
    }

    /// Render for a terminal; same text as `Display`, styled when the
    /// `colorized_output` feature is on
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let paint = |status: &CheckStatus, text: &str| match status {
                CheckStatus::Ok => style(text).green().to_string(),
                CheckStatus::Warning(_) => style(text).yellow().to_string(),
                CheckStatus::Failed(_) => style(text).red().to_string(),
            };

            let mut output = format!(
                "{}\nFile: {}\n\n",
                style("mzQC Validation Report").bold().cyan(),
                self.source
            );

            for check in &self.checks {
                output.push_str(&format!(
                    "[{}] {}",
                    paint(&check.status, check.status.tag()),
                    check.name
                ));
                if let Some(detail) = check.status.detail() {
                    output.push_str(&format!(" - {}", detail));
                }
                output.push('\n');
            }

            let overall = if self.has_failures() {
                style(self.verdict()).red()
            } else if self.has_warnings() {
                style(self.verdict()).yellow()
            } else {
                style(self.verdict()).green()
            };
            output.push_str(&format!("\nSummary: {}\n{}\n", self.summary_line(), overall.bold()));

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mzQC Validation Report")?;
        writeln!(f, "File: {}", self.source)?;
        writeln!(f)?;

        for check in &self.checks {
            write!(f, "[{}] {}", check.status.tag(), check.name)?;
            if let Some(detail) = check.status.detail() {
                write!(f, " - {}", detail)?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Summary: {}", self.summary_line())?;
        writeln!(f, "{}", self.verdict())
    }
}
