//! Axum route handlers for the content-assist API.
//!
//! Every handler is a thin boundary: validate input, make one assist call,
//! return the result. Nothing here writes to the store — accepted
//! suggestions come back through `PATCH /api/v1/cv` from the caller, so a
//! failed call always leaves the document exactly as it was.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::cv::{CvPatch, Education, Skill, WorkExperience};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateCvRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCvResponse {
    /// Ready-to-apply document fragment: fresh entry ids assigned, loose
    /// proficiency strings mapped onto the closed enums.
    pub cv_data: CvPatch,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleContextRequest {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceDescriptionResponse {
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummaryRequest {
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Serialize)]
pub struct GenerateSummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestAchievementsResponse {
    pub achievements: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestSkillsRequest {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub industry: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestSkillsResponse {
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/assist/generate-cv
///
/// Full-document generation from a free-text description. All-or-nothing:
/// a malformed or schema-failing response rejects the whole fragment and
/// the current document is left unmodified.
pub async fn handle_generate_cv(
    State(state): State<AppState>,
    Json(request): Json<GenerateCvRequest>,
) -> Result<Json<GenerateCvResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let fragment = state.assist.generate_cv(&request.prompt).await?;

    Ok(Json(GenerateCvResponse {
        cv_data: fragment.into_patch(),
    }))
}

/// POST /api/v1/assist/enhance-description
pub async fn handle_enhance_description(
    State(state): State<AppState>,
    Json(request): Json<RoleContextRequest>,
) -> Result<Json<EnhanceDescriptionResponse>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("jobTitle cannot be empty".to_string()));
    }

    let description = state
        .assist
        .enhance_description(&request.job_title, &request.company, &request.description)
        .await?;

    Ok(Json(EnhanceDescriptionResponse { description }))
}

/// POST /api/v1/assist/generate-summary
///
/// Builds a professional summary from the entries the caller already has.
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    Json(request): Json<GenerateSummaryRequest>,
) -> Result<Json<GenerateSummaryResponse>, AppError> {
    if request.work_experience.is_empty() && request.education.is_empty() {
        return Err(AppError::Validation(
            "add work experience or education before generating a summary".to_string(),
        ));
    }

    let summary = state
        .assist
        .generate_summary(&request.work_experience, &request.education, &request.skills)
        .await?;

    Ok(Json(GenerateSummaryResponse { summary }))
}

/// POST /api/v1/assist/suggest-achievements
pub async fn handle_suggest_achievements(
    State(state): State<AppState>,
    Json(request): Json<RoleContextRequest>,
) -> Result<Json<SuggestAchievementsResponse>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("jobTitle cannot be empty".to_string()));
    }

    let achievements = state
        .assist
        .suggest_achievements(&request.job_title, &request.company, &request.description)
        .await?;

    Ok(Json(SuggestAchievementsResponse { achievements }))
}

/// POST /api/v1/assist/suggest-skills
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(request): Json<SuggestSkillsRequest>,
) -> Result<Json<SuggestSkillsResponse>, AppError> {
    let skills = state
        .assist
        .suggest_skills(&request.job_title, &request.industry)
        .await?;

    Ok(Json(SuggestSkillsResponse { skills }))
}
