//! Handlers for resume-vs-role analysis: job matching and skill gaps.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::job_matcher::{match_resume_to_job, JobMatchReport};
use crate::assistant::skill_gap::analyze_skill_gap;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobMatchRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub user_skills: String,
    pub target_role: String,
}

#[derive(Debug, Serialize)]
pub struct SkillGapResponse {
    pub skill_gap_advice: String,
}

/// POST /job-matcher/
pub async fn handle_job_match(
    State(state): State<AppState>,
    Json(request): Json<JobMatchRequest>,
) -> Result<Json<JobMatchReport>, AppError> {
    let report = match_resume_to_job(
        state.llm.as_ref(),
        &request.resume_text,
        &request.job_description,
    )
    .await?;

    Ok(Json(report))
}

/// POST /skill-gap/
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<SkillGapResponse>, AppError> {
    let skill_gap_advice =
        analyze_skill_gap(state.llm.as_ref(), &request.user_skills, &request.target_role).await?;

    Ok(Json(SkillGapResponse { skill_gap_advice }))
}
