//! The form page wrapping the validation results.

use handlebars::Handlebars;
use serde::Serialize;
use sssom_validate::{HtmlRenderer, Render, ValidateError};

const PAGE_TEMPLATE: &str = include_str!("../../templates/page.hbs");

/// What the form page shows for one request.
#[derive(Debug, Default, Serialize)]
pub struct PageView {
    /// Value of the text area.
    pub sssom_text: String,
    /// Value of the URL field.
    pub sssom_url: String,
    /// Acquisition problem shown above the form.
    pub error: Option<String>,
    /// Pre-rendered results fragment.
    pub results: Option<String>,
}

#[derive(Serialize)]
struct PageContext<'a> {
    asset_base: &'a str,
    view: &'a PageView,
    about: &'a str,
}

pub struct PageRenderer {
    registry: Handlebars<'static>,
    asset_base: String,
    about: String,
}

impl PageRenderer {
    pub fn new(asset_base: &str) -> Result<Self, ValidateError> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string("page", PAGE_TEMPLATE)
            .map_err(|e| ValidateError::Render(e.to_string()))?;

        // The banner does not depend on the request
        let about = HtmlRenderer::new(asset_base)?.render_about()?;

        Ok(Self {
            registry,
            asset_base: asset_base.to_string(),
            about,
        })
    }

    pub fn render(&self, view: &PageView) -> Result<String, ValidateError> {
        let context = PageContext {
            asset_base: &self.asset_base,
            view,
            about: &self.about,
        };

        self.registry
            .render("page", &context)
            .map_err(|e| ValidateError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keeps_submitted_values() {
        let page = PageRenderer::new("/assets").unwrap();
        let html = page
            .render(&PageView {
                sssom_text: "subject_id\t<b>".into(),
                sssom_url: "https://example.org/m.tsv".into(),
                ..Default::default()
            })
            .unwrap();

        assert!(html.contains("subject_id\t&lt;b&gt;</textarea>"));
        assert!(html.contains("https://example.org/m.tsv"));
        assert!(html.contains("/assets/sssom-logo.svg"));
        assert!(html.contains("Validation info report"));
    }

    #[test]
    fn test_page_shows_error_and_results() {
        let page = PageRenderer::new("/assets").unwrap();
        let html = page
            .render(&PageView {
                error: Some("No SSSOM text or URL provided.".into()),
                results: Some("<section class=\"stage\"></section>".into()),
                ..Default::default()
            })
            .unwrap();

        assert!(html.contains("<div class=\"error\">No SSSOM text or URL provided.</div>"));
        assert!(html.contains("<section class=\"stage\"></section>"));
    }
}
