//! Turtle serialisation of mapping sets.
//!
//! Each mapping becomes an `owl:Axiom` annotating the subject/predicate/object
//! triple; the mapping set links to its mappings through `sssom:mappings`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;

use crate::model::{
    BUILTIN_PREFIXES, MappingRow, MappingSetDocument, PrefixMap, SlotKind, SlotSpec, mapping_set_slot,
    mapping_slot,
};

static PREFIX_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_\-]*$").unwrap());

/// Write the mapping set metadata and `mappings` as Turtle.
pub fn write_turtle(doc: &MappingSetDocument, prefixes: &PrefixMap, mappings: &[&MappingRow]) -> String {
    let mut out = String::new();

    // The writer's own vocabulary keeps its standard bindings whatever the curie_map says
    for (prefix, namespace) in BUILTIN_PREFIXES {
        out.push_str(&format!("@prefix {}: <{}> .\n", prefix, namespace));
    }
    for (prefix, namespace) in prefixes.iter() {
        let builtin = BUILTIN_PREFIXES.iter().any(|(p, _)| *p == prefix);
        if !builtin && PREFIX_NAME.is_match(prefix) && is_iri(namespace) {
            out.push_str(&format!("@prefix {}: <{}> .\n", prefix, namespace));
        }
    }
    out.push('\n');

    let set_node = doc
        .metadata_str("mapping_set_id")
        .filter(|id| is_iri(id))
        .map(|id| format!("<{}>", id))
        .unwrap_or_else(|| "_:set".to_string());

    let mut statements = vec!["a sssom:MappingSet".to_string()];
    for (key, value) in &doc.metadata {
        let Some(spec) = mapping_set_slot(key) else {
            continue;
        };
        if matches!(spec.kind, SlotKind::Structured) || spec.name == "mapping_set_id" {
            continue;
        }
        let objects: Vec<String> = yaml_scalars(value)
            .iter()
            .map(|v| term(spec, v, prefixes))
            .collect();
        if !objects.is_empty() {
            statements.push(format!("{} {}", spec.property, objects.join(", ")));
        }
    }
    let nodes: Vec<String> = (1..=mappings.len()).map(|i| format!("_:m{}", i)).collect();
    if !nodes.is_empty() {
        statements.push(format!("sssom:mappings {}", nodes.join(", ")));
    }
    push_subject(&mut out, &set_node, &statements);

    for (node, row) in nodes.iter().zip(mappings) {
        out.push_str(&write_mapping_turtle(node, row, prefixes));
    }

    out
}

/// Write a single mapping as an `owl:Axiom` node labelled `node`.
pub fn write_mapping_turtle(node: &str, row: &MappingRow, prefixes: &PrefixMap) -> String {
    let mut statements = vec!["a owl:Axiom".to_string()];
    for (column, raw) in &row.values {
        let Some(spec) = mapping_slot(column) else {
            continue;
        };
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let objects: Vec<String> = if spec.multivalued {
            raw.split('|')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| term(spec, v, prefixes))
                .collect()
        } else {
            vec![term(spec, raw, prefixes)]
        };
        statements.push(format!("{} {}", spec.property, objects.join(", ")));
    }

    let mut out = String::new();
    push_subject(&mut out, node, &statements);
    out
}

fn push_subject(out: &mut String, subject: &str, statements: &[String]) {
    out.push_str(subject);
    out.push(' ');
    out.push_str(&statements.join(" ;\n    "));
    out.push_str(" .\n\n");
}

fn yaml_scalars(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Number(n) => vec![n.to_string()],
        Value::Bool(b) => vec![b.to_string()],
        Value::Sequence(items) => items.iter().flat_map(yaml_scalars).collect(),
        _ => Vec::new(),
    }
}

/// Render a slot value as a Turtle term.
fn term(spec: &SlotSpec, value: &str, prefixes: &PrefixMap) -> String {
    match spec.kind {
        SlotKind::Curie => match prefixes.expand(value) {
            Some(iri) if is_iri(&iri) => format!("<{}>", iri),
            _ => literal(value),
        },
        SlotKind::Uri if is_iri(value) => format!("<{}>", value),
        SlotKind::Score if value.parse::<f64>().is_ok() => format!("{}^^xsd:double", literal(value)),
        SlotKind::Date => format!("{}^^xsd:date", literal(value)),
        _ => literal(value),
    }
}

/// Whether `value` can be written between angle brackets.
fn is_iri(value: &str) -> bool {
    value.contains(':')
        && !value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\'))
}

fn literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped.push('"');
    escaped
}
