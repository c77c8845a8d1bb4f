//! Presentation adapters for validation reports.
//!
//! The pipeline produces a [`ValidationReport`]; a [`Render`] implementation
//! turns it into a document. Rendering makes no decisions beyond the badge
//! status already carried by the report.

mod html;
mod markdown;

pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;

use crate::error::Result;
use crate::input::PRECEDENCE_NOTICE;
use crate::model::SSSOM_VERSION;
use crate::pipeline::ValidationReport;
use crate::validation::{Stage, Status};

pub const MONARCH_URL: &str = "https://monarchinitiative.org/";
pub const ISSUE_TRACKER_URL: &str = "https://github.com/mapping-commons/sssom-validate-ui";
pub const TSV_FORMAT_URL: &str = "https://mapping-commons.github.io/sssom/spec-formats-tsv/";

/// Badge label for the overall status.
pub const OVERALL_BADGE_LABEL: &str = "Validation status overall";

/// Components listed in the version banner, as (display name, lookup key).
///
/// One entry per validation stage, after the tool itself.
pub const TOOL_COMPONENTS: &[(&str, &str)] = &[
    ("sssom-validate", "sssom-validate"),
    ("TSV structure checker", "tsv-structure"),
    ("SSSOM data model", "sssom"),
    ("SSSOM converter", "sssom-conversion"),
];

/// Turns a validation report into a displayable document.
pub trait Render {
    /// Render the results of one request.
    fn render(&self, report: &ValidationReport) -> Result<String>;

    /// Render the static sections: version banner and contact details.
    fn render_about(&self) -> Result<String>;
}

/// Version of a component named in the banner.
pub fn version_of(component: &str) -> Option<&'static str> {
    match component {
        "sssom-validate" | "tsv-structure" | "sssom-conversion" => Some(env!("CARGO_PKG_VERSION")),
        "sssom" => Some(SSSOM_VERSION),
        _ => None,
    }
}

/// shields.io badge image URL.
pub fn badge_url(label: &str, status: Status) -> String {
    let label = label.replace('-', "--").replace('_', "__").replace(' ', "%20");
    format!(
        "https://img.shields.io/badge/{}-{}-{}?style=flat",
        label,
        status.label(),
        status.color()
    )
}

/// Documentation link of a stage, as (label, URL).
pub fn stage_docs(stage: Stage) -> (&'static str, &'static str) {
    match stage {
        Stage::Structural => ("SSSOM TSV format documentation", TSV_FORMAT_URL),
        Stage::Schema => (
            "SSSOM documentation",
            "https://mapping-commons.github.io/sssom/linkml-index/",
        ),
        Stage::Conversion => (
            "SSSOM documentation",
            "https://mapping-commons.github.io/sssom/spec-formats/",
        ),
    }
}

/// Title of the expandable report panel of a stage.
pub fn report_title(stage: Stage) -> &'static str {
    match stage {
        Stage::Structural => "Validation report",
        Stage::Schema => "Report",
        Stage::Conversion => "Conversion report",
    }
}

/// Shown instead of a serialisation that could not be produced.
pub fn unavailable_notice(format: &str) -> String {
    format!("{} rendering is not available for this file, see log.", format)
}

/// Introduction of the conversion preview.
pub fn preview_intro(lines: usize) -> String {
    format!(
        "This is how the first {} lines of your SSSOM file look like when rendered in various formats.",
        lines
    )
}

/// Disclosures about how the input was obtained.
pub fn input_notices(report: &ValidationReport) -> Vec<String> {
    let mut notices = Vec::new();
    if let Some(input) = &report.input {
        if input.url_precedence {
            notices.push(PRECEDENCE_NOTICE.to_string());
        }
        if input.truncated {
            notices.push(format!(
                "Your file is too long ({} lines), only the first {} lines were evaluated.",
                input.line_count, report.config.limit_lines_evaluated
            ));
        }
    }
    notices
}

/// Serialisations shown after the conversion report, as
/// (display name, code block language, content).
fn serialisations(report: &ValidationReport) -> [(&'static str, &'static str, Option<&str>); 2] {
    [
        ("RDF", "turtle", usable(&report.turtle)),
        ("JSON-LD", "json", usable(&report.json_ld)),
    ]
}

fn usable(content: &Option<String>) -> Option<&str> {
    content.as_deref().filter(|s| !s.trim().is_empty())
}
