use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::assistant::writer::generate_resume_text;

#[derive(Debug, Deserialize)]
pub struct ResumeRequest {
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub resume: String,
    pub user_id: i64,
}

/// POST /resume/generate
pub async fn handle_generate(Json(request): Json<ResumeRequest>) -> Json<ResumeResponse> {
    Json(ResumeResponse {
        resume: generate_resume_text(&request.title, &request.content),
        user_id: request.user_id,
    })
}

/// GET /resume/
pub async fn handle_index() -> Json<Value> {
    Json(json!({ "message": "Resume route working" }))
}
