//! HTML presentation through handlebars templates.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{Result, ValidateError};
use crate::pipeline::ValidationReport;
use crate::validation::{Finding, Stage, StageReport};

use super::{
    ISSUE_TRACKER_URL, MONARCH_URL, OVERALL_BADGE_LABEL, Render, TOOL_COMPONENTS, badge_url,
    input_notices, preview_intro, report_title, serialisations, stage_docs, unavailable_notice,
    version_of,
};

const REPORT_TEMPLATE: &str = include_str!("templates/report.hbs");
const ABOUT_TEMPLATE: &str = include_str!("templates/about.hbs");

#[derive(Serialize)]
struct BadgeView {
    url: String,
    errors: usize,
    warnings: usize,
}

#[derive(Serialize)]
struct FindingView<'a> {
    severity: &'static str,
    severity_class: String,
    code: &'a str,
    location: Option<String>,
    message: &'a str,
}

#[derive(Serialize)]
struct SerialisationView<'a> {
    format: &'static str,
    language: &'static str,
    content: Option<&'a str>,
    notice: String,
}

#[derive(Serialize)]
struct PreviewRowView<'a> {
    line: usize,
    tsv: String,
    turtle: Option<&'a str>,
    json_ld: Option<&'a str>,
}

#[derive(Serialize)]
struct ConversionView<'a> {
    intro: String,
    preview_columns: String,
    preview_rows: Vec<PreviewRowView<'a>>,
    serialisations: Vec<SerialisationView<'a>>,
}

#[derive(Serialize)]
struct StageView<'a> {
    title: &'static str,
    badge: BadgeView,
    docs_label: &'static str,
    docs_url: &'static str,
    report_title: &'static str,
    report: &'a str,
    findings: Vec<FindingView<'a>>,
    conversion: Option<ConversionView<'a>>,
}

#[derive(Serialize)]
struct ReportView<'a> {
    notices: Vec<String>,
    overall: BadgeView,
    stages: Vec<StageView<'a>>,
}

#[derive(Serialize)]
struct ComponentView {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct AboutView<'a> {
    asset_base: &'a str,
    components: Vec<ComponentView>,
    monarch_url: &'static str,
    issue_url: &'static str,
}

/// Renders reports as HTML fragments meant to be embedded in a page.
pub struct HtmlRenderer {
    registry: Handlebars<'static>,
    asset_base: String,
}

impl HtmlRenderer {
    /// Create a renderer; images are referenced under `asset_base`.
    pub fn new(asset_base: impl Into<String>) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string("report", REPORT_TEMPLATE)
            .map_err(|e| ValidateError::Render(e.to_string()))?;
        registry
            .register_template_string("about", ABOUT_TEMPLATE)
            .map_err(|e| ValidateError::Render(e.to_string()))?;

        Ok(Self {
            registry,
            asset_base: asset_base.into().trim_end_matches('/').to_string(),
        })
    }

    fn render_template<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.registry
            .render(name, data)
            .map_err(|e| ValidateError::Render(e.to_string()))
    }

    fn stage_view<'a>(report: &'a ValidationReport, stage: &'a StageReport) -> StageView<'a> {
        let (docs_label, docs_url) = stage_docs(stage.stage);

        let conversion = (stage.stage == Stage::Conversion).then(|| ConversionView {
            intro: preview_intro(report.config.limit_lines_displayed),
            preview_columns: report.preview.headers.join("\t"),
            preview_rows: report
                .preview
                .rows
                .iter()
                .map(|row| PreviewRowView {
                    line: row.line,
                    tsv: row.tsv(),
                    turtle: row.turtle.as_deref().map(str::trim_end),
                    json_ld: row.json_ld.as_deref(),
                })
                .collect(),
            serialisations: serialisations(report)
                .into_iter()
                .map(|(format, language, content)| SerialisationView {
                    format,
                    language,
                    content,
                    notice: unavailable_notice(format),
                })
                .collect(),
        });

        StageView {
            title: stage.stage.title(),
            badge: BadgeView {
                url: badge_url(stage.stage.badge_label(), stage.status()),
                errors: stage.errors,
                warnings: stage.warnings,
            },
            docs_label,
            docs_url,
            report_title: report_title(stage.stage),
            report: &stage.report,
            findings: stage.findings.iter().map(finding_view).collect(),
            conversion,
        }
    }
}

fn finding_view(finding: &Finding) -> FindingView<'_> {
    let location = match (finding.line, finding.slot.as_deref()) {
        (Some(line), Some(slot)) => Some(format!("line {}, {}", line, slot)),
        (Some(line), None) => Some(format!("line {}", line)),
        (None, Some(slot)) => Some(slot.to_string()),
        (None, None) => None,
    };

    FindingView {
        severity: finding.severity.label(),
        severity_class: finding.severity.label().to_lowercase(),
        code: &finding.code,
        location,
        message: &finding.message,
    }
}

impl Render for HtmlRenderer {
    fn render(&self, report: &ValidationReport) -> Result<String> {
        let view = ReportView {
            notices: input_notices(report),
            overall: BadgeView {
                url: badge_url(OVERALL_BADGE_LABEL, report.status),
                errors: report.total_errors,
                warnings: report.total_warnings,
            },
            stages: report
                .stages()
                .into_iter()
                .map(|stage| Self::stage_view(report, stage))
                .collect(),
        };

        self.render_template("report", &view)
    }

    fn render_about(&self) -> Result<String> {
        let view = AboutView {
            asset_base: &self.asset_base,
            components: TOOL_COMPONENTS
                .iter()
                .map(|&(name, key)| ComponentView {
                    name,
                    version: version_of(key).unwrap_or("unknown"),
                })
                .collect(),
            monarch_url: MONARCH_URL,
            issue_url: ISSUE_TRACKER_URL,
        };

        self.render_template("about", &view)
    }
}
