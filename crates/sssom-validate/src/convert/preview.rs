//! Multi-format preview of the first mappings.
//!
//! Each previewed mapping is shown three ways: the TSV row as submitted, its
//! Turtle block and its JSON-LD object.

use serde::{Deserialize, Serialize};

use crate::model::MappingSetDocument;

/// One previewed mapping in every format it could be written in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewRow {
    /// 1-based line number in the submitted text.
    pub line: usize,
    pub cells: Vec<String>,
    /// `None` when the mapping could not be converted.
    pub turtle: Option<String>,
    pub json_ld: Option<String>,
}

impl PreviewRow {
    /// The row as tab-separated text.
    pub fn tsv(&self) -> String {
        self.cells.join("\t")
    }

    pub fn is_converted(&self) -> bool {
        self.turtle.is_some() && self.json_ld.is_some()
    }
}

/// The first rows of a mapping set, as displayed to the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewTable {
    pub headers: Vec<String>,
    pub rows: Vec<PreviewRow>,
}

impl PreviewTable {
    /// Take the header and the first `limit` rows of `doc`, without conversions.
    pub fn from_document(doc: &MappingSetDocument, limit: usize) -> Self {
        Self {
            headers: doc.columns.clone(),
            rows: doc
                .rows
                .iter()
                .take(limit)
                .map(|row| PreviewRow {
                    line: row.line,
                    cells: row.values.values().cloned().collect(),
                    turtle: None,
                    json_ld: None,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Row previewing source line `line`.
    pub fn row_at_line_mut(&mut self, line: usize) -> Option<&mut PreviewRow> {
        self.rows.iter_mut().find(|row| row.line == line)
    }

    /// Render as a Markdown pipe table, one row per mapping and one column
    /// per format. Empty when there is no header.
    pub fn to_markdown(&self) -> String {
        if self.headers.is_empty() {
            return String::new();
        }

        let mut out = format!("Columns: {}\n\n", code_cell(&self.headers.join("\t")));
        out.push_str("| Line | TSV | RDF (Turtle) | JSON-LD |\n|---|---|---|---|\n");
        for row in &self.rows {
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                row.line,
                code_cell(&row.tsv()),
                row.turtle.as_deref().map(code_cell).unwrap_or_else(|| NOT_CONVERTED.to_string()),
                row.json_ld.as_deref().map(code_cell).unwrap_or_else(|| NOT_CONVERTED.to_string()),
            ));
        }
        out
    }
}

const NOT_CONVERTED: &str = "_not converted_";

/// Inline code fitting in one table cell.
fn code_cell(text: &str) -> String {
    let flat = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    format!("`{}`", flat.replace('|', "\\|"))
}
