//! Preview and export handlers. These operate on the currently rendered
//! view of the active document; export failures surface as error responses,
//! never silently.

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::export;
use crate::models::cv::TemplateId;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    /// Optional template override; unknown values fall back to the default
    /// template at the deserialization boundary.
    pub template: Option<TemplateId>,
}

/// GET /api/v1/preview?template=modern
///
/// Full print-ready HTML page of the current document. The override lets
/// the template picker preview styles without mutating the document.
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> Html<String> {
    let mut doc = state.store.get();
    if let Some(template) = params.template {
        doc.template = template;
    }
    Html(export::print_document(&doc))
}

/// GET /api/v1/export/print
///
/// The print artifact as a download, for the host's print-to-PDF path.
pub async fn handle_export_print(State(state): State<AppState>) -> impl IntoResponse {
    let doc = state.store.get();
    let html = export::print_document(&doc);
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::file_name(&doc, "html")
    );
    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        html,
    )
}

/// GET /api/v1/export/word
///
/// Word-compatible document bytes, served as `.doc`.
pub async fn handle_export_word(State(state): State<AppState>) -> impl IntoResponse {
    let doc = state.store.get();
    let bytes = export::word_document(&doc);
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::file_name(&doc, "doc")
    );
    (
        [
            (header::CONTENT_TYPE, "application/msword".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
}
