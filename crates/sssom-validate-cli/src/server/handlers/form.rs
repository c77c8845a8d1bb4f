//! HTML form handlers.

use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use sssom_validate::{Render, generate_example};

use super::run_pipeline;
use crate::server::error::ApiError;
use crate::server::page::PageView;
use crate::server::state::AppState;

/// Fields of the validation form.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateForm {
    #[serde(default)]
    pub sssom_text: String,
    #[serde(default)]
    pub sssom_url: String,
}

/// The form, pre-filled with an example mapping set.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let view = PageView {
        sssom_text: generate_example(),
        ..Default::default()
    };

    Ok(Html(state.page.render(&view)?))
}

/// Validate the submitted form and show the results below it.
pub async fn validate_form(
    State(state): State<AppState>,
    Form(form): Form<ValidateForm>,
) -> Result<Response, ApiError> {
    let outcome = run_pipeline(
        &state,
        Some(form.sssom_text.clone()),
        Some(form.sssom_url.clone()),
    )
    .await;

    let mut view = PageView {
        sssom_text: form.sssom_text,
        sssom_url: form.sssom_url,
        ..Default::default()
    };

    match outcome {
        Ok(report) => {
            view.results = Some(state.results.render(&report)?);
            Ok(Html(state.page.render(&view)?).into_response())
        }
        Err(err) => {
            let (status, _) = err.status();
            view.error = Some(err.message());
            Ok((status, Html(state.page.render(&view)?)).into_response())
        }
    }
}
