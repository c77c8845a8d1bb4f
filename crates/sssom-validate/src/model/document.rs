//! Parsing of SSSOM/TSV documents.
//!
//! An SSSOM/TSV file is a YAML metadata block, each line prefixed with `#`,
//! followed by a tab-separated table with one mapping per row.

use indexmap::IndexMap;
use serde_yaml::Value;

use crate::error::{Result, ValidateError};

use super::curie::PrefixMap;

/// One mapping row of the table.
#[derive(Debug, Clone)]
pub struct MappingRow {
    /// 1-based line number in the source text.
    pub line: usize,
    /// Cell values keyed by column name, in column order.
    pub values: IndexMap<String, String>,
}

impl MappingRow {
    /// Value of `slot`, or `None` when the column is absent or the cell blank.
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.values
            .get(slot)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

/// A parsed mapping set.
#[derive(Debug, Clone)]
pub struct MappingSetDocument {
    /// Mapping-set metadata from the `#` block, in declaration order.
    pub metadata: IndexMap<String, Value>,
    /// Table column names.
    pub columns: Vec<String>,
    /// Line number of the header row.
    pub header_line: usize,
    /// Mapping rows.
    pub rows: Vec<MappingRow>,
}

impl MappingSetDocument {
    /// Parse SSSOM/TSV text.
    ///
    /// Rows with a wrong number of fields are padded or cut to the header
    /// width; reporting those is the structural check's job.
    pub fn parse(text: &str) -> Result<Self> {
        let mut yaml = String::new();
        let mut comment_lines = 0;
        let mut body_start = 0;

        for line in text.split_inclusive('\n') {
            let Some(stripped) = line.strip_prefix('#') else {
                break;
            };
            yaml.push_str(stripped);
            comment_lines += 1;
            body_start += line.len();
        }

        let metadata = parse_metadata(&yaml)?;
        let body = &text[body_start..];

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .quoting(false)
            .flexible(true)
            .from_reader(body.as_bytes());

        let headers = reader.headers()?.clone();
        let header_line = comment_lines + headers.position().map(|p| p.line() as usize).unwrap_or(1);
        let columns: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        if columns.iter().all(|c| c.trim().is_empty()) {
            return Err(ValidateError::Parse {
                line: comment_lines + 1,
                message: "no header row found after the metadata block".to_string(),
            });
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = comment_lines + record.position().map(|p| p.line() as usize).unwrap_or(0);
            let values = columns
                .iter()
                .enumerate()
                .map(|(i, column)| (column.clone(), record.get(i).unwrap_or("").to_string()))
                .collect();
            rows.push(MappingRow { line, values });
        }

        Ok(Self {
            metadata,
            columns,
            header_line,
            rows,
        })
    }

    /// Prefix map built from `curie_map` and the built-in prefixes.
    pub fn prefix_map(&self) -> PrefixMap {
        PrefixMap::from_metadata(&self.metadata)
    }

    /// Scalar metadata value as a string.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        match self.metadata.get(key) {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Column names declared in `extension_definitions`.
    pub fn extension_slots(&self) -> Vec<String> {
        let Some(Value::Sequence(definitions)) = self.metadata.get("extension_definitions") else {
            return Vec::new();
        };

        definitions
            .iter()
            .filter_map(|d| d.get("slot_name"))
            .filter_map(|name| name.as_str().map(|s| s.to_string()))
            .collect()
    }

    /// Whether the table has a column named `slot`.
    pub fn has_column(&self, slot: &str) -> bool {
        self.columns.iter().any(|c| c == slot)
    }
}

fn parse_metadata(yaml: &str) -> Result<IndexMap<String, Value>> {
    if yaml.trim().is_empty() {
        return Ok(IndexMap::new());
    }

    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Null => Ok(IndexMap::new()),
        Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, value)| match key {
                Value::String(key) => Ok((key, value)),
                other => Err(ValidateError::Parse {
                    line: 1,
                    message: format!("metadata key {:?} is not a string", other),
                }),
            })
            .collect(),
        _ => Err(ValidateError::Parse {
            line: 1,
            message: "metadata block is not a key/value mapping".to_string(),
        }),
    }
}
