pub mod assist;
pub mod cv;
pub mod health;
pub mod preview;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document API
        .route("/api/v1/cv", get(cv::handle_get_cv))
        .route("/api/v1/cv", patch(cv::handle_update_cv))
        .route("/api/v1/cv/reset", post(cv::handle_reset_cv))
        .route("/api/v1/cv/step", put(cv::handle_set_step))
        .route("/api/v1/cv/saved", get(cv::handle_list_saved))
        .route("/api/v1/cv/saved/:id", delete(cv::handle_delete_saved))
        .route("/api/v1/cv/saved/:id/load", post(cv::handle_load_saved))
        // Content-assist API
        .route("/api/v1/assist/generate-cv", post(assist::handle_generate_cv))
        .route(
            "/api/v1/assist/enhance-description",
            post(assist::handle_enhance_description),
        )
        .route(
            "/api/v1/assist/generate-summary",
            post(assist::handle_generate_summary),
        )
        .route(
            "/api/v1/assist/suggest-achievements",
            post(assist::handle_suggest_achievements),
        )
        .route(
            "/api/v1/assist/suggest-skills",
            post(assist::handle_suggest_skills),
        )
        // Preview & export
        .route("/api/v1/preview", get(preview::handle_preview))
        .route("/api/v1/export/print", get(preview::handle_export_print))
        .route("/api/v1/export/word", get(preview::handle_export_word))
        .with_state(state)
}
