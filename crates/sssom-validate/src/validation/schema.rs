//! Conformance of a mapping set to the SSSOM data model.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde_yaml::Value;

use crate::model::{
    MappingSetDocument, PrefixMap, SEMAPV_JUSTIFICATIONS, SlotKind, SlotSpec, MAPPING_SET_SLOTS,
    MAPPING_SLOTS, mapping_set_slot, mapping_slot, split_curie,
};

use super::finding::{Finding, Stage, StageReport};
use super::Validator;

/// Checks required slots, value types, enums and CURIE prefixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl SchemaValidator {
    pub fn new() -> Self {
        Self
    }

    fn check_metadata(
        &self,
        doc: &MappingSetDocument,
        prefixes: &PrefixMap,
        findings: &mut Vec<Finding>,
    ) {
        for spec in MAPPING_SET_SLOTS.iter().filter(|s| s.required) {
            if !doc.metadata.contains_key(spec.name) {
                findings.push(
                    Finding::error("S1", format!("required mapping set slot '{}' is missing", spec.name))
                        .in_slot(spec.name),
                );
            }
        }

        for (key, value) in &doc.metadata {
            let Some(spec) = mapping_set_slot(key) else {
                findings.push(
                    Finding::warning("S2", format!("unknown mapping set slot '{}'", key)).in_slot(key),
                );
                continue;
            };

            match spec.name {
                "curie_map" => check_curie_map(value, findings),
                "extension_definitions" => {}
                _ => match scalar_values(value) {
                    Some(values) => {
                        if values.len() > 1 && !spec.multivalued {
                            findings.push(
                                Finding::error("S3", "slot takes a single value but a list was given")
                                    .in_slot(key),
                            );
                        }
                        for v in values {
                            findings.extend(
                                check_value(spec, &v, prefixes).into_iter().map(|f| f.in_slot(key)),
                            );
                        }
                    }
                    None => findings.push(
                        Finding::error("S3", "expected a value or a list of values").in_slot(key),
                    ),
                },
            }
        }
    }

    fn check_columns(&self, doc: &MappingSetDocument, findings: &mut Vec<Finding>) {
        for spec in MAPPING_SLOTS.iter().filter(|s| s.required) {
            if !doc.has_column(spec.name) {
                findings.push(
                    Finding::error("S5", format!("required column '{}' is missing", spec.name))
                        .at_line(doc.header_line)
                        .in_slot(spec.name),
                );
            }
        }

        let extensions = doc.extension_slots();
        for column in &doc.columns {
            if mapping_slot(column).is_none() && !extensions.contains(column) {
                findings.push(
                    Finding::warning(
                        "S6",
                        format!("column '{}' is neither an SSSOM slot nor a declared extension", column),
                    )
                    .at_line(doc.header_line)
                    .in_slot(column.clone()),
                );
            }
        }
    }

    fn check_rows(
        &self,
        doc: &MappingSetDocument,
        prefixes: &PrefixMap,
        findings: &mut Vec<Finding>,
    ) {
        let mut seen: HashMap<(String, String, String, String), usize> = HashMap::new();

        for row in &doc.rows {
            for spec in MAPPING_SLOTS.iter().filter(|s| s.required) {
                if doc.has_column(spec.name) && row.get(spec.name).is_none() {
                    findings.push(
                        Finding::error("S7", "required value is empty")
                            .at_line(row.line)
                            .in_slot(spec.name),
                    );
                }
            }

            for (column, raw) in &row.values {
                let Some(spec) = mapping_slot(column) else {
                    continue;
                };
                let raw = raw.trim();
                if raw.is_empty() {
                    continue;
                }

                let values: Vec<&str> = if spec.multivalued {
                    raw.split('|').map(str::trim).filter(|v| !v.is_empty()).collect()
                } else {
                    vec![raw]
                };
                for value in values {
                    findings.extend(
                        check_value(spec, value, prefixes)
                            .into_iter()
                            .map(|f| f.at_line(row.line).in_slot(column.clone())),
                    );
                }
            }

            let key = (
                row.get("subject_id").unwrap_or_default().to_string(),
                row.get("predicate_id").unwrap_or_default().to_string(),
                row.get("object_id").unwrap_or_default().to_string(),
                row.get("predicate_modifier").unwrap_or_default().to_string(),
            );
            if let Some(first) = seen.get(&key) {
                findings.push(
                    Finding::warning("S15", format!("duplicates the mapping on line {}", first))
                        .at_line(row.line),
                );
            } else {
                seen.insert(key, row.line);
            }
        }
    }
}

impl Validator for SchemaValidator {
    fn validate(&self, text: &str) -> StageReport {
        let doc = match MappingSetDocument::parse(text) {
            Ok(doc) => doc,
            Err(e) => {
                return StageReport::from_findings(
                    Stage::Schema,
                    vec![Finding::error("S0", format!("could not read the mapping set: {}", e))],
                );
            }
        };

        let prefixes = doc.prefix_map();
        let mut findings = Vec::new();
        self.check_metadata(&doc, &prefixes, &mut findings);
        self.check_columns(&doc, &mut findings);
        self.check_rows(&doc, &prefixes, &mut findings);

        StageReport::from_findings(Stage::Schema, findings)
    }
}

fn check_curie_map(value: &Value, findings: &mut Vec<Finding>) {
    let Value::Mapping(curie_map) = value else {
        findings.push(Finding::error("S3", "curie_map must map prefixes to namespaces").in_slot("curie_map"));
        return;
    };

    for (prefix, namespace) in curie_map {
        match (prefix.as_str(), namespace.as_str()) {
            (Some(prefix), Some(namespace)) if is_uri(namespace) => {
                if prefix.contains(':') {
                    findings.push(
                        Finding::error("S3", format!("prefix '{}' must not contain ':'", prefix))
                            .in_slot("curie_map"),
                    );
                }
            }
            (Some(prefix), _) => findings.push(
                Finding::error("S3", format!("namespace of prefix '{}' is not a URI", prefix))
                    .in_slot("curie_map"),
            ),
            (None, _) => findings.push(
                Finding::error("S3", format!("prefix {:?} is not a string", prefix)).in_slot("curie_map"),
            ),
        }
    }
}

/// Flatten a scalar or a list of scalars to strings.
fn scalar_values(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Null => Some(Vec::new()),
        Value::String(s) => Some(vec![s.clone()]),
        Value::Number(n) => Some(vec![n.to_string()]),
        Value::Bool(b) => Some(vec![b.to_string()]),
        Value::Sequence(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        _ => None,
    }
}

fn is_uri(value: &str) -> bool {
    !value.chars().any(char::is_whitespace) && (value.contains("://") || value.starts_with("urn:"))
}

/// Check a single value against its slot type.
fn check_value(spec: &SlotSpec, value: &str, prefixes: &PrefixMap) -> Vec<Finding> {
    let mut findings = Vec::new();

    match spec.kind {
        SlotKind::Text | SlotKind::Structured => {}
        SlotKind::Curie => match split_curie(value) {
            None => findings.push(Finding::error("S8", format!("'{}' is not a valid CURIE", value))),
            Some((prefix, _)) if !prefixes.contains(prefix) => findings.push(Finding::error(
                "S9",
                format!("prefix '{}' of '{}' is not declared in the curie_map", prefix, value),
            )),
            Some((prefix, local)) if spec.name == "mapping_justification" => {
                if prefix != "semapv" {
                    findings.push(Finding::error(
                        "S10",
                        format!("'{}' is not a SEMAPV matching process", value),
                    ));
                } else if !SEMAPV_JUSTIFICATIONS.contains(&local) {
                    findings.push(Finding::warning(
                        "S11",
                        format!("'{}' is not a known SEMAPV justification", value),
                    ));
                }
            }
            Some(_) => {}
        },
        SlotKind::Uri => {
            if !is_uri(value) {
                findings.push(Finding::error("S4", format!("'{}' is not an absolute URI", value)));
            }
        }
        SlotKind::Score => match value.parse::<f64>() {
            Ok(score) if (0.0..=1.0).contains(&score) => {}
            Ok(_) => findings.push(Finding::error("S12", format!("{} is outside the range 0 to 1", value))),
            Err(_) => findings.push(Finding::error("S12", format!("'{}' is not a number", value))),
        },
        SlotKind::Date => {
            if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                findings.push(Finding::error("S13", format!("'{}' is not a YYYY-MM-DD date", value)));
            }
        }
        SlotKind::Enum(permitted) => {
            if !permitted.contains(&value) {
                findings.push(Finding::error(
                    "S14",
                    format!("'{}' is not one of: {}", value, permitted.join(", ")),
                ));
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Severity;

    const HEADER: &str = "#curie_map:\n\
                          #  HP: http://purl.obolibrary.org/obo/HP_\n\
                          #  MP: http://purl.obolibrary.org/obo/MP_\n\
                          #mapping_set_id: https://example.org/set.sssom.tsv\n\
                          #license: https://creativecommons.org/publicdomain/zero/1.0/\n";

    fn validate(body: &str) -> StageReport {
        SchemaValidator::new().validate(&format!("{}{}", HEADER, body))
    }

    fn codes(report: &StageReport) -> Vec<&str> {
        report.findings.iter().map(|f| f.code.as_str()).collect()
    }

    #[test]
    fn test_valid_mapping_set() {
        let report = validate(
            "subject_id\tpredicate_id\tobject_id\tmapping_justification\tconfidence\tmapping_date\n\
             HP:1\tskos:exactMatch\tMP:1\tsemapv:ManualMappingCuration\t0.95\t2024-03-01\n",
        );
        assert_eq!(report.errors, 0, "{}", report.report);
        assert_eq!(report.warnings, 0, "{}", report.report);
    }

    #[test]
    fn test_missing_metadata_and_columns() {
        let report = SchemaValidator::new().validate("subject_id\tobject_id\nHP:1\tMP:1\n");

        assert_eq!(codes(&report), vec!["S1", "S1", "S5", "S5", "S9", "S9"]);
        assert_eq!(report.findings[2].slot.as_deref(), Some("predicate_id"));
    }

    #[test]
    fn test_value_types() {
        let report = validate(
            "subject_id\tpredicate_id\tobject_id\tmapping_justification\tconfidence\tmapping_date\tmapping_cardinality\n\
             HP 1\tskos:exactMatch\tGO:1\tsemapv:Guessing\t1.5\t01/02/2024\t2:2\n",
        );

        assert_eq!(codes(&report), vec!["S8", "S9", "S11", "S12", "S13", "S14"]);
        assert!(report.findings.iter().all(|f| f.line == Some(7)));
        assert_eq!(report.findings[2].severity, Severity::Warning);
    }

    #[test]
    fn test_empty_required_value_and_justification_prefix() {
        let report = validate(
            "subject_id\tpredicate_id\tobject_id\tmapping_justification\n\
             HP:1\t\tMP:1\tskos:exactMatch\n",
        );
        assert_eq!(codes(&report), vec!["S7", "S10"]);
    }

    #[test]
    fn test_unknown_slots_and_duplicates() {
        let report = SchemaValidator::new().validate(&format!(
            "{}#favourite_colour: blue\n\
             subject_id\tpredicate_id\tobject_id\tmapping_justification\tnote\n\
             HP:1\tskos:exactMatch\tMP:1\tsemapv:LexicalMatching\ta\n\
             HP:1\tskos:exactMatch\tMP:1\tsemapv:LexicalMatching\tb\n",
            HEADER
        ));

        assert_eq!(report.errors, 0);
        assert_eq!(codes(&report), vec!["S2", "S6", "S15"]);
    }

    #[test]
    fn test_multivalued_slot_checks_each_value() {
        let report = validate(
            "subject_id\tpredicate_id\tobject_id\tmapping_justification\tauthor_id\n\
             HP:1\tskos:exactMatch\tMP:1\tsemapv:LexicalMatching\tHP:2|orcid:123\n",
        );
        assert_eq!(codes(&report), vec!["S9"]);
    }

    #[test]
    fn test_unreadable_metadata() {
        let report = SchemaValidator::new().validate("#curie_map: [a\nsubject_id\n");
        assert_eq!(codes(&report), vec!["S0"]);
    }
}
