//! Request handlers.

mod api;
mod form;

pub use api::*;
pub use form::*;

use std::sync::Arc;

use sssom_validate::ValidationReport;
use tracing::error;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Run the pipeline off the async executor.
///
/// A panic inside the pipeline becomes a generic internal error; its details
/// only go to the log.
async fn run_pipeline(
    state: &AppState,
    text: Option<String>,
    url: Option<String>,
) -> Result<ValidationReport, ApiError> {
    let pipeline = Arc::clone(&state.pipeline);
    let report = tokio::task::spawn_blocking(move || pipeline.run(text.as_deref(), url.as_deref()))
        .await
        .map_err(|e| {
            error!(error = %e, "validation task failed");
            ApiError::Internal("Validation failed unexpectedly.".to_string())
        })??;

    Ok(report)
}
