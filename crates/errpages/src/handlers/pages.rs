use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use errpages_core::DEFAULT_CODE;
use errpages_render::{
    ComponentDocument, ErrorPageComponent, PageMeta, RenderTarget, StandaloneRenderer,
};

use crate::{error::AppError, state::AppState};

/// Render the standalone page for `code` with the matching HTTP status.
///
/// Codes outside the catalogue get the 404 page and a 404 status.
fn standalone_response(state: &AppState, code: &str) -> Result<Response, AppError> {
    let entry = state
        .catalogue
        .get(code)
        .unwrap_or_else(|| state.catalogue.default_entry());
    let status = StatusCode::from_u16(entry.status()).unwrap_or(StatusCode::NOT_FOUND);

    let html = StandaloneRenderer::new(state.catalogue, &state.styles).render_entry(entry)?;
    Ok((status, Html(html)).into_response())
}

/// Render the interactive component page for `code`.
///
/// `meta` replaces the title and description derived from the entry.
fn interactive_response(
    state: &AppState,
    code: &str,
    meta: Option<PageMeta>,
) -> Result<Response, AppError> {
    let mut document = match &state.stylesheet_href {
        Some(href) => ComponentDocument::new().with_stylesheet(href.to_string()),
        None => ComponentDocument::new(),
    };
    if let Some(meta) = meta {
        document = document.with_meta(meta);
    }

    let html = ErrorPageComponent::for_code(state.catalogue, code, RenderTarget::Interactive)
        .render_html(&document)?;
    Ok(Html(html).into_response())
}

/// Handler for the root page (GET /): the interactive 404 page.
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    interactive_response(&state, DEFAULT_CODE, Some(PageMeta::for_root()))
}

/// Handler for a standalone page (GET /{code} or GET /{code}.html).
pub async fn standalone(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Response, AppError> {
    let code = page.strip_suffix(".html").unwrap_or(&page);
    tracing::debug!(code, "Serving standalone page");
    standalone_response(&state, code)
}

/// Handler for the interactive route without a code (GET /app).
pub async fn app_index(State(state): State<AppState>) -> Result<Response, AppError> {
    interactive_response(&state, DEFAULT_CODE, None)
}

/// Handler for the interactive route (GET /app/{error_code}).
pub async fn app_page(
    State(state): State<AppState>,
    Path(error_code): Path<String>,
) -> Result<Response, AppError> {
    interactive_response(&state, &error_code, None)
}

/// Fallback for unmatched paths: the standalone 404 page.
pub async fn not_found(State(state): State<AppState>) -> Result<Response, AppError> {
    standalone_response(&state, DEFAULT_CODE)
}
