//! JSON-LD serialisation of mapping sets.

use serde_json::{Map, Number, Value, json};

use crate::error::Result;
use crate::model::{MAPPING_SLOTS, MappingRow, MappingSetDocument, PrefixMap, SlotKind, mapping_slot};

/// Write the mapping set metadata and `mappings` as a JSON-LD document.
///
/// CURIEs are kept compact; the `@context` carries the prefix map so they
/// expand under JSON-LD processing.
pub fn write_json_ld(
    doc: &MappingSetDocument,
    prefixes: &PrefixMap,
    mappings: &[&MappingRow],
) -> Result<String> {
    let mut context = Map::new();
    context.insert("@vocab".to_string(), json!("https://w3id.org/sssom/"));
    for (prefix, namespace) in prefixes.iter() {
        context.insert(prefix.to_string(), json!(namespace));
    }
    for spec in MAPPING_SLOTS {
        if matches!(spec.kind, SlotKind::Curie | SlotKind::Uri) {
            context.insert(spec.name.to_string(), json!({ "@type": "@id" }));
        }
    }

    let mut root = Map::new();
    root.insert("@context".to_string(), Value::Object(context));
    root.insert("@type".to_string(), json!("MappingSet"));
    for (key, value) in &doc.metadata {
        if key == "curie_map" {
            continue;
        }
        root.insert(key.clone(), serde_json::to_value(value)?);
    }

    let extensions = doc.extension_slots();
    let objects: Vec<Value> = mappings
        .iter()
        .map(|row| mapping_object(row, &extensions))
        .collect();
    root.insert("mappings".to_string(), Value::Array(objects));

    Ok(serde_json::to_string_pretty(&Value::Object(root))?)
}

/// Write a single mapping as a compact JSON-LD object, without the context.
pub fn write_mapping_json_ld(doc: &MappingSetDocument, row: &MappingRow) -> Result<String> {
    Ok(serde_json::to_string(&mapping_object(row, &doc.extension_slots()))?)
}

fn mapping_object(row: &MappingRow, extensions: &[String]) -> Value {
    let mut object = Map::new();

    for (column, raw) in &row.values {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let value = match mapping_slot(column) {
            Some(spec) if spec.multivalued => Value::Array(
                raw.split('|')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| json!(v))
                    .collect(),
            ),
            Some(spec) if spec.kind == SlotKind::Score => raw
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| json!(raw)),
            Some(_) => json!(raw),
            None if extensions.iter().any(|e| e == column) => json!(raw),
            None => continue,
        };
        object.insert(column.clone(), value);
    }

    Value::Object(object)
}
