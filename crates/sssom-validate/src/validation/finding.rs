//! Findings and per-stage reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::status::Status;

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only, not counted.
    Info,
    /// Potential issue that should be reviewed.
    Warning,
    /// Definite issue that should be addressed.
    Error,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// The three validation stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Row/column conventions of the TSV.
    Structural,
    /// Conformance to the SSSOM data model.
    Schema,
    /// Conversion to RDF and JSON-LD.
    Conversion,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Structural, Stage::Schema, Stage::Conversion];

    /// Section heading.
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Structural => "TSV structure validation",
            Stage::Schema => "SSSOM schema validation",
            Stage::Conversion => "SSSOM sample conversions",
        }
    }

    /// Text on the stage badge.
    pub fn badge_label(&self) -> &'static str {
        match self {
            Stage::Structural => "TSV structure",
            Stage::Schema => "SSSOM Validation",
            Stage::Conversion => "SSSOM Conversion",
        }
    }
}

/// A single problem found by a stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    /// Stage-specific rule code, e.g. `E1` or `S7`.
    pub code: String,
    /// 1-based line in the evaluated text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Column or metadata key involved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    pub message: String,
}

impl Finding {
    /// Create a finding.
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            line: None,
            slot: None,
            message: message.into(),
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Set the line number.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the column or metadata key.
    pub fn in_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}** `{}`", self.severity.label().to_uppercase(), self.code)?;
        match (self.line, &self.slot) {
            (Some(line), Some(slot)) => write!(f, " (line {}, `{}`)", line, slot)?,
            (Some(line), None) => write!(f, " (line {})", line)?,
            (None, Some(slot)) => write!(f, " (`{}`)", slot)?,
            (None, None) => {}
        }
        write!(f, ": {}", self.message)
    }
}

/// Outcome of one stage: counts plus a human-readable report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageReport {
    pub stage: Stage,
    pub errors: usize,
    pub warnings: usize,
    /// Markdown report text.
    pub report: String,
    /// Individual findings behind the counts, when the stage provides them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub findings: Vec<Finding>,
}

impl StageReport {
    /// Build a report from counts and free text, for stages that do not
    /// itemise their findings.
    pub fn new(stage: Stage, errors: usize, warnings: usize, report: impl Into<String>) -> Self {
        Self {
            stage,
            errors,
            warnings,
            report: report.into(),
            findings: Vec::new(),
        }
    }

    /// Build a report by counting findings; info findings are not counted.
    pub fn from_findings(stage: Stage, findings: Vec<Finding>) -> Self {
        let errors = findings.iter().filter(|f| f.severity == Severity::Error).count();
        let warnings = findings.iter().filter(|f| f.severity == Severity::Warning).count();

        let report = if findings.is_empty() {
            "No issues found.".to_string()
        } else {
            findings
                .iter()
                .map(|f| format!("- {}", f))
                .collect::<Vec<_>>()
                .join("\n")
        };

        Self {
            stage,
            errors,
            warnings,
            report,
            findings,
        }
    }

    /// Badge status for this stage.
    pub fn status(&self) -> Status {
        Status::from_counts(self.errors, self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_severity() {
        let report = StageReport::from_findings(
            Stage::Structural,
            vec![
                Finding::error("E1", "wrong column count").at_line(3),
                Finding::warning("W1", "whitespace").at_line(4).in_slot("subject_id"),
                Finding::warning("W2", "carriage return"),
                Finding::new(Severity::Info, "I1", "note"),
            ],
        );

        assert_eq!(report.errors, 1);
        assert_eq!(report.warnings, 2);
        assert_eq!(report.status(), Status::Unsuccessful);
        assert!(report.report.contains("- **ERROR** `E1` (line 3): wrong column count"));
        assert!(report.report.contains("(line 4, `subject_id`)"));
    }

    #[test]
    fn test_empty_report() {
        let report = StageReport::from_findings(Stage::Schema, Vec::new());
        assert_eq!(report.report, "No issues found.");
        assert_eq!(report.status(), Status::Successful);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }
}
