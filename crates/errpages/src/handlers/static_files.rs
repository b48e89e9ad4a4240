//! Static file serving handler for the compiled client assets.

use std::path::{Component, Path as FsPath};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Serve a file from the build's `assets/` directory.
pub async fn serve_static(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    if !is_safe_relative(&filename) {
        tracing::warn!(%filename, "Rejected asset path");
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }

    match tokio::fs::read(state.assets_dir.join(&filename)).await {
        Ok(contents) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type(&filename)),
                (header::CACHE_CONTROL, cache_control(&filename)),
            ],
            contents,
        )
            .into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

/// Only plain relative paths below the assets directory are served.
fn is_safe_relative(filename: &str) -> bool {
    !filename.is_empty()
        && FsPath::new(filename)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

fn content_type(filename: &str) -> &'static str {
    match filename.rsplit_once('.').map(|(_, ext)| ext) {
        Some("js") => "application/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("map") | Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("woff2") => "font/woff2",
        Some("html") => "text/html; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Hashed build files never change, so they can be cached forever.
fn cache_control(filename: &str) -> &'static str {
    if filename.contains('-') && !filename.ends_with(".map") {
        "public, max-age=31536000, immutable"
    } else {
        "public, max-age=3600"
    }
}
