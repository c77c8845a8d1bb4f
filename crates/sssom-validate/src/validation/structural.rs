//! Row/column conventions of tab-separated files.
//!
//! Lines starting with `#` are comments and skipped. The first other line is
//! the header; every later line must have the same number of fields.
//!
//! | Code | Severity | Rule |
//! |------|----------|------|
//! | E1 | error | row field count differs from the header |
//! | E2 | error | empty line inside the table |
//! | E3 | error | duplicate column name |
//! | E4 | error | empty column name |
//! | E5 | error | no header row |
//! | W1 | warning | leading or trailing whitespace in a field |
//! | W2 | warning | Windows line ending |
//! | W3 | warning | last line not terminated by a newline |
//! | W4 | warning | double quote in a field |
//! | W5 | warning | empty line at the end of the file |

use std::collections::HashSet;

use super::finding::{Finding, Stage, StageReport};
use super::Validator;

/// Structural checker for TSV files with `#` comment lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvValidator;

impl TsvValidator {
    pub fn new() -> Self {
        Self
    }

    fn check_header(&self, line_no: usize, fields: &[&str], findings: &mut Vec<Finding>) {
        let mut seen = HashSet::new();
        for (index, name) in fields.iter().enumerate() {
            if name.trim().is_empty() {
                findings.push(
                    Finding::error("E4", format!("column {} has an empty name", index + 1))
                        .at_line(line_no),
                );
            } else if !seen.insert(*name) {
                findings.push(
                    Finding::error("E3", format!("column name '{}' appears more than once", name))
                        .at_line(line_no)
                        .in_slot(*name),
                );
            }
        }
    }

    fn check_fields(
        &self,
        line_no: usize,
        fields: &[&str],
        header: &[String],
        findings: &mut Vec<Finding>,
    ) {
        for (index, field) in fields.iter().enumerate() {
            let column = header.get(index).cloned().unwrap_or_else(|| format!("#{}", index + 1));

            if field.trim() != *field {
                findings.push(
                    Finding::warning("W1", "field has leading or trailing whitespace")
                        .at_line(line_no)
                        .in_slot(column.clone()),
                );
            }
            if field.contains('"') {
                findings.push(
                    Finding::warning("W4", "field contains a double quote")
                        .at_line(line_no)
                        .in_slot(column),
                );
            }
        }
    }
}

impl Validator for TsvValidator {
    fn validate(&self, text: &str) -> StageReport {
        let mut findings = Vec::new();
        let lines: Vec<&str> = text.split_inclusive('\n').collect();

        // Blank lines after this index are trailing rather than interior
        let last_content = lines
            .iter()
            .rposition(|l| !l.trim_end_matches(['\r', '\n']).is_empty());

        let mut header: Option<Vec<String>> = None;

        for (index, &raw) in lines.iter().enumerate() {
            let line_no = index + 1;
            let terminated = raw.ends_with('\n');
            let mut line = raw.strip_suffix('\n').unwrap_or(raw);

            if let Some(stripped) = line.strip_suffix('\r') {
                findings.push(Finding::warning("W2", "line ends with a carriage return").at_line(line_no));
                line = stripped;
            }

            if !terminated && index + 1 == lines.len() {
                findings.push(
                    Finding::warning("W3", "last line is not terminated by a newline").at_line(line_no),
                );
            }

            if line.starts_with('#') {
                continue;
            }

            if line.is_empty() {
                if last_content.is_some_and(|last| index < last) {
                    findings.push(Finding::error("E2", "empty line inside the table").at_line(line_no));
                } else {
                    findings.push(Finding::warning("W5", "empty line at the end of the file").at_line(line_no));
                }
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            match &header {
                None => {
                    self.check_header(line_no, &fields, &mut findings);
                    self.check_fields(line_no, &fields, &[], &mut findings);
                    header = Some(fields.iter().map(|f| f.to_string()).collect());
                }
                Some(names) => {
                    if fields.len() != names.len() {
                        findings.push(
                            Finding::error(
                                "E1",
                                format!(
                                    "row has {} fields but the header has {}",
                                    fields.len(),
                                    names.len()
                                ),
                            )
                            .at_line(line_no),
                        );
                    }
                    self.check_fields(line_no, &fields, names, &mut findings);
                }
            }
        }

        if header.is_none() {
            findings.push(Finding::error("E5", "no header row found"));
        }

        StageReport::from_findings(Stage::Structural, findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Severity;

    fn codes(report: &StageReport) -> Vec<&str> {
        report.findings.iter().map(|f| f.code.as_str()).collect()
    }

    #[test]
    fn test_clean_file() {
        let text = "#mapping_set_id: x\nsubject_id\tobject_id\nA:1\tB:1\nA:2\tB:2\n";
        let report = TsvValidator::new().validate(text);

        assert_eq!(report.errors, 0);
        assert_eq!(report.warnings, 0);
        assert_eq!(report.report, "No issues found.");
    }

    #[test]
    fn test_wrong_column_count() {
        let text = "a\tb\tc\n1\t2\n1\t2\t3\t4\n";
        let report = TsvValidator::new().validate(text);

        assert_eq!(codes(&report), vec!["E1", "E1"]);
        assert_eq!(report.findings[0].line, Some(2));
        assert_eq!(report.findings[1].line, Some(3));
    }

    #[test]
    fn test_interior_and_trailing_empty_lines() {
        let text = "a\tb\n1\t2\n\n3\t4\n\n";
        let report = TsvValidator::new().validate(text);

        assert_eq!(codes(&report), vec!["E2", "W5"]);
        assert_eq!(report.findings[0].line, Some(3));
        assert_eq!(report.findings[1].severity, Severity::Warning);
    }

    #[test]
    fn test_header_problems() {
        let report = TsvValidator::new().validate("a\t\ta\n1\t2\t3\n");
        assert_eq!(codes(&report), vec!["E4", "E3"]);
    }

    #[test]
    fn test_field_warnings() {
        let report = TsvValidator::new().validate("a\tb\n 1\t\"2\"\r\n3\t4");

        assert_eq!(report.errors, 0);
        assert_eq!(codes(&report), vec!["W2", "W1", "W4", "W3"]);
        assert_eq!(report.findings[1].slot.as_deref(), Some("a"));
        assert_eq!(report.findings[2].slot.as_deref(), Some("b"));
    }

    #[test]
    fn test_comments_only() {
        let report = TsvValidator::new().validate("#a: b\n#c: d\n");
        assert_eq!(codes(&report), vec!["E5"]);
    }
}
