//! Markdown presentation.

use crate::error::Result;
use crate::pipeline::ValidationReport;
use crate::validation::{Stage, StageReport};

use super::{
    ISSUE_TRACKER_URL, MONARCH_URL, OVERALL_BADGE_LABEL, Render, TOOL_COMPONENTS, badge_url,
    input_notices, preview_intro, report_title, serialisations, stage_docs, unavailable_notice,
    version_of,
};

/// Renders reports as Markdown, with shields.io badges.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    fn badge(label: &str, stage: &StageReport) -> String {
        format!(
            "![Badge]({}) ({} errors and {} warnings)\n\n",
            badge_url(label, stage.status()),
            stage.errors,
            stage.warnings
        )
    }
}

impl Render for MarkdownRenderer {
    fn render(&self, report: &ValidationReport) -> Result<String> {
        let mut out = String::new();

        for notice in input_notices(report) {
            out.push_str(&format!("> {}\n\n", notice));
        }

        out.push_str(&format!(
            "![Badge]({}) ({} errors and {} warnings)\n\n",
            badge_url(OVERALL_BADGE_LABEL, report.status),
            report.total_errors,
            report.total_warnings
        ));

        for stage in report.stages() {
            let (docs_label, docs_url) = stage_docs(stage.stage);

            out.push_str(&format!("## {}\n\n", stage.stage.title()));
            out.push_str(&Self::badge(stage.stage.badge_label(), stage));
            if stage.stage == Stage::Conversion {
                out.push_str(&format!("{}\n\n", preview_intro(report.config.limit_lines_displayed)));
            }
            out.push_str(&format!("For more information see [{}]({})\n\n", docs_label, docs_url));

            if stage.stage == Stage::Conversion && !report.preview.is_empty() {
                out.push_str(&report.preview.to_markdown());
                out.push('\n');
            }

            out.push_str(&format!("### {}\n\n{}\n\n", report_title(stage.stage), stage.report));

            if stage.stage == Stage::Conversion {
                for (format, language, content) in serialisations(report) {
                    let section = match content {
                        Some(content) => format!(
                            "### {}\n\n```{}\n{}\n```\n\n",
                            format,
                            language,
                            content.trim_end()
                        ),
                        None => format!("{}\n\n", unavailable_notice(format)),
                    };
                    out.push_str(&section);
                }
            }
        }

        Ok(out)
    }

    fn render_about(&self) -> Result<String> {
        let mut out = String::from("### Validation info report\n\n");
        for (name, key) in TOOL_COMPONENTS {
            out.push_str(&format!(
                "**{}** version: {}\n\n",
                name,
                version_of(key).unwrap_or("unknown")
            ));
        }

        out.push_str(&format!(
            "### Contact\n\nPresented by the [Monarch Initiative]({})\n\n\
             For feedback use our [issue tracker]({}).\n",
            MONARCH_URL, ISSUE_TRACKER_URL
        ));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{Conversion, PreviewRow, PreviewTable};
    use crate::input::{InputOrigin, InputSummary};
    use crate::pipeline::ValidatorConfig;
    use crate::validation::Stage;

    fn report(turtle: Option<&str>, json_ld: Option<&str>) -> ValidationReport {
        ValidationReport::assemble(
            StageReport::new(Stage::Structural, 0, 0, "No issues found."),
            StageReport::new(Stage::Schema, 0, 3, "- three warnings"),
            Conversion {
                report: StageReport::new(Stage::Conversion, 0, 0, "No issues found."),
                turtle: turtle.map(String::from),
                json_ld: json_ld.map(String::from),
                preview: PreviewTable {
                    headers: vec!["subject_id".into()],
                    rows: vec![PreviewRow {
                        line: 2,
                        cells: vec!["HP:1".into()],
                        turtle: Some("_:m1 a owl:Axiom .\n".into()),
                        json_ld: Some("{\"subject_id\":\"HP:1\"}".into()),
                    }],
                },
            },
            ValidatorConfig::default(),
        )
    }

    #[test]
    fn test_render_badges_and_sections() {
        let out = MarkdownRenderer::new().render(&report(Some("<a> <b> <c> ."), None)).unwrap();

        assert!(out.contains("Validation%20status%20overall-WARNINGS-yellow"));
        assert!(out.contains("(0 errors and 3 warnings)"));
        assert!(out.contains("## TSV structure validation"));
        assert!(out.contains("SSSOM%20Validation-WARNINGS-yellow"));
        assert!(out.contains("This is how the first 5 lines"));
        assert!(out.contains("| Line | TSV | RDF (Turtle) | JSON-LD |"));
        assert!(out.contains("| 2 | `HP:1` | `_:m1 a owl:Axiom .` | `{\"subject_id\":\"HP:1\"}` |"));
    }

    #[test]
    fn test_missing_serialisation_shows_notice() {
        let out = MarkdownRenderer::new()
            .render(&report(None, Some("{\"a\": 1}")))
            .unwrap();

        assert!(out.contains("RDF rendering is not available for this file, see log."));
        assert!(!out.contains("```turtle"));
        assert!(out.contains("```json\n{\"a\": 1}\n```"));
    }

    #[test]
    fn test_empty_serialisation_shows_notice() {
        let out = MarkdownRenderer::new().render(&report(Some("  \n"), Some(""))).unwrap();

        assert!(out.contains("RDF rendering is not available"));
        assert!(out.contains("JSON-LD rendering is not available"));
    }

    #[test]
    fn test_input_notices() {
        let mut report = report(None, None);
        report.input = Some(InputSummary {
            origin: InputOrigin::Url("https://example.org/m.tsv".into()),
            line_count: 1500,
            truncated: true,
            url_precedence: true,
            hash: "sha256:0".into(),
        });

        let out = MarkdownRenderer::new().render(&report).unwrap();
        assert!(out.contains("> Both SSSOM text and URL provided. URL will be used."));
        assert!(out.contains("only the first 1000 lines were evaluated"));
    }

    #[test]
    fn test_render_about() {
        let out = MarkdownRenderer::new().render_about().unwrap();
        assert!(out.contains("**SSSOM data model** version: 1.0"));
        assert!(out.contains(&format!("**TSV structure checker** version: {}", env!("CARGO_PKG_VERSION"))));
        assert!(out.contains("**SSSOM converter** version:"));
        assert!(out.contains("[issue tracker](https://github.com/mapping-commons/sssom-validate-ui)"));
    }
}
