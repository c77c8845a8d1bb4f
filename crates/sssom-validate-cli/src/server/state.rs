//! Application state for the web server.

use std::sync::Arc;

use sssom_validate::{HtmlRenderer, ValidateError, ValidationPipeline};

use super::page::PageRenderer;
use crate::web::ASSET_BASE;

/// Shared application state. Nothing in it changes after startup.
#[derive(Clone)]
pub struct AppState {
    /// The validation pipeline run for every request.
    pub pipeline: Arc<ValidationPipeline>,
    /// Renders validation results as an HTML fragment.
    pub results: Arc<HtmlRenderer>,
    /// Renders the surrounding form page.
    pub page: Arc<PageRenderer>,
}

impl AppState {
    /// Create application state; fails when a template does not compile.
    pub fn new(pipeline: ValidationPipeline) -> Result<Self, ValidateError> {
        Ok(Self {
            pipeline: Arc::new(pipeline),
            results: Arc::new(HtmlRenderer::new(ASSET_BASE)?),
            page: Arc::new(PageRenderer::new(ASSET_BASE)?),
        })
    }
}
