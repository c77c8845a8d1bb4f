//! Conversion of mapping sets to RDF and JSON-LD, plus the preview table.

mod jsonld;
mod preview;
mod turtle;

pub use jsonld::{write_json_ld, write_mapping_json_ld};
pub use preview::{PreviewRow, PreviewTable};
pub use turtle::{write_mapping_turtle, write_turtle};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{MappingRow, MappingSetDocument};
use crate::validation::{Finding, Stage, StageReport};

/// Slots that must expand to IRIs for a mapping to be serialised.
const TRIPLE_SLOTS: [&str; 3] = ["subject_id", "predicate_id", "object_id"];

/// Outcome of the conversion stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    pub report: StageReport,
    /// Graph (Turtle) serialisation, absent when it could not be produced.
    pub turtle: Option<String>,
    /// Linked-data (JSON-LD) serialisation, absent when it could not be produced.
    pub json_ld: Option<String>,
    pub preview: PreviewTable,
}

impl Conversion {
    fn failed(finding: Finding, preview: PreviewTable) -> Self {
        Self {
            report: StageReport::from_findings(Stage::Conversion, vec![finding]),
            turtle: None,
            json_ld: None,
            preview,
        }
    }
}

/// Re-serialises the first mappings of a mapping set.
pub trait Converter: Send + Sync {
    /// Convert the first `preview_lines` mappings of `text`.
    ///
    /// Never fails: a serialisation that cannot be produced is `None` and the
    /// reason is recorded in the report.
    fn convert(&self, text: &str, preview_lines: usize) -> Conversion;
}

/// Converter producing Turtle and JSON-LD.
#[derive(Debug, Clone, Copy, Default)]
pub struct SssomConverter;

impl SssomConverter {
    pub fn new() -> Self {
        Self
    }
}

impl Converter for SssomConverter {
    fn convert(&self, text: &str, preview_lines: usize) -> Conversion {
        let doc = match MappingSetDocument::parse(text) {
            Ok(doc) => doc,
            Err(e) => {
                return Conversion::failed(
                    Finding::error("C1", format!("could not parse the mapping set: {}", e)),
                    PreviewTable::default(),
                );
            }
        };

        let mut preview = PreviewTable::from_document(&doc, preview_lines);

        let missing: Vec<&str> = TRIPLE_SLOTS
            .iter()
            .copied()
            .filter(|slot| !doc.has_column(slot))
            .collect();
        if !missing.is_empty() {
            return Conversion::failed(
                Finding::error("C2", format!("cannot convert without columns: {}", missing.join(", ")))
                    .at_line(doc.header_line),
                preview,
            );
        }

        let prefixes = doc.prefix_map();
        let mut findings = Vec::new();
        let mut sample: Vec<&MappingRow> = Vec::new();

        for row in doc.rows.iter().take(preview_lines) {
            let unresolved = TRIPLE_SLOTS
                .iter()
                .find(|slot| row.get(slot).and_then(|v| prefixes.expand(v)).is_none());
            match unresolved {
                Some(slot) => findings.push(
                    Finding::warning("C3", "mapping skipped: value cannot be expanded to an IRI")
                        .at_line(row.line)
                        .in_slot(*slot),
                ),
                None => sample.push(row),
            }
        }

        let (turtle, json_ld) = if sample.is_empty() {
            findings.push(Finding::warning("C4", "no mappings could be converted"));
            (None, None)
        } else {
            let turtle = write_turtle(&doc, &prefixes, &sample);
            let json_ld = match write_json_ld(&doc, &prefixes, &sample) {
                Ok(json) => Some(json),
                Err(e) => {
                    findings.push(Finding::error("C5", format!("JSON-LD serialisation failed: {}", e)));
                    None
                }
            };
            (Some(turtle), json_ld)
        };

        for (index, row) in sample.iter().enumerate() {
            if let Some(previewed) = preview.row_at_line_mut(row.line) {
                previewed.turtle = Some(write_mapping_turtle(&format!("_:m{}", index + 1), row, &prefixes));
                previewed.json_ld = write_mapping_json_ld(&doc, row).ok();
            }
        }

        debug!(converted = sample.len(), preview_lines, "conversion finished");

        Conversion {
            report: StageReport::from_findings(Stage::Conversion, findings),
            turtle,
            json_ld,
            preview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "#curie_map:\n\
                          #  HP: http://purl.obolibrary.org/obo/HP_\n\
                          #  MP: http://purl.obolibrary.org/obo/MP_\n\
                          #mapping_set_id: https://example.org/set.sssom.tsv\n\
                          subject_id\tpredicate_id\tobject_id\tmapping_justification\n";

    #[test]
    fn test_converts_preview_rows_only() {
        let body: String = (1..=8)
            .map(|i| format!("HP:{i}\tskos:exactMatch\tMP:{i}\tsemapv:LexicalMatching\n"))
            .collect();
        let conversion = SssomConverter::new().convert(&format!("{}{}", HEADER, body), 5);

        assert_eq!(conversion.report.errors, 0);
        assert_eq!(conversion.report.warnings, 0);
        assert_eq!(conversion.preview.rows.len(), 5);
        let turtle = conversion.turtle.unwrap();
        assert!(turtle.contains("_:m5 a owl:Axiom"));
        assert!(!turtle.contains("_:m6"));
        assert!(conversion.json_ld.unwrap().contains("\"HP:5\""));
    }

    #[test]
    fn test_unexpandable_rows_are_skipped() {
        let text = format!(
            "{}HP:1\tskos:exactMatch\tGO:1\tsemapv:LexicalMatching\n\
             HP:2\tskos:exactMatch\tMP:2\tsemapv:LexicalMatching\n",
            HEADER
        );
        let conversion = SssomConverter::new().convert(&text, 5);

        assert_eq!(conversion.report.warnings, 1);
        assert_eq!(conversion.report.findings[0].code, "C3");
        assert_eq!(conversion.report.findings[0].slot.as_deref(), Some("object_id"));
        assert!(conversion.turtle.unwrap().contains("MP_2"));
    }

    #[test]
    fn test_nothing_convertible() {
        let text = format!("{}X:1\tskos:exactMatch\tY:1\tsemapv:LexicalMatching\n", HEADER);
        let conversion = SssomConverter::new().convert(&text, 5);

        assert!(conversion.turtle.is_none());
        assert!(conversion.json_ld.is_none());
        assert_eq!(conversion.report.warnings, 2);
        assert_eq!(conversion.preview.rows.len(), 1);
    }

    #[test]
    fn test_missing_triple_columns() {
        let conversion = SssomConverter::new().convert("subject_id\tobject_id\nHP:1\tMP:1\n", 5);

        assert_eq!(conversion.report.errors, 1);
        assert_eq!(conversion.report.findings[0].code, "C2");
        assert!(conversion.report.report.contains("predicate_id"));
        assert!(conversion.turtle.is_none());
    }

    #[test]
    fn test_unparseable_document() {
        let conversion = SssomConverter::new().convert("#curie_map: [\nsubject_id\n", 5);

        assert_eq!(conversion.report.errors, 1);
        assert_eq!(conversion.report.findings[0].code, "C1");
        assert!(conversion.preview.is_empty());
    }

    #[test]
    fn test_each_previewed_row_carries_all_formats() {
        let text = format!(
            "{}HP:1\tskos:exactMatch\tMP:1\tsemapv:LexicalMatching\n\
             HP:2\tskos:exactMatch\tGO:2\tsemapv:LexicalMatching\n\
             HP:3\tskos:exactMatch\tMP:3\tsemapv:LexicalMatching\n",
            HEADER
        );
        let conversion = SssomConverter::new().convert(&text, 5);
        let rows = &conversion.preview.rows;

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].line, 6);
        assert_eq!(rows[0].tsv(), "HP:1\tskos:exactMatch\tMP:1\tsemapv:LexicalMatching");
        assert!(rows[0].turtle.as_deref().unwrap().starts_with("_:m1 a owl:Axiom ;"));
        assert!(rows[0].json_ld.as_deref().unwrap().contains("\"subject_id\":\"HP:1\""));

        assert!(!rows[1].is_converted());

        // Node labels follow the full Turtle document
        assert!(rows[2].turtle.as_deref().unwrap().starts_with("_:m2 a owl:Axiom ;"));
        assert!(conversion.turtle.unwrap().contains(rows[2].turtle.as_deref().unwrap()));
        assert!(rows[2].json_ld.as_deref().unwrap().contains("\"object_id\":\"MP:3\""));
    }
}
