//! Embedded static files for the web UI.

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use crate::server::error::ApiError;

/// URL prefix the assets are served under.
pub const ASSET_BASE: &str = "/assets";

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Serve an embedded asset.
pub async fn static_handler(Path(path): Path<String>) -> Response {
    match Assets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => ApiError::NotFound(format!("No asset named '{}'", path)).into_response(),
    }
}
