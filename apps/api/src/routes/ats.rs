use axum::Json;
use serde::Deserialize;

use crate::matching::{extract_keywords, match_keywords, KeywordMatch};

/// A job description given either as free text or as an explicit keyword list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JobKeywords {
    List(Vec<String>),
    Text(String),
}

impl JobKeywords {
    fn into_keywords(self) -> Vec<String> {
        match self {
            JobKeywords::List(keywords) => keywords,
            JobKeywords::Text(text) => extract_keywords(&text),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AtsRequest {
    pub resume_text: String,
    pub job_description: JobKeywords,
}

/// POST /ats-score/
pub async fn handle_ats_score(Json(request): Json<AtsRequest>) -> Json<KeywordMatch> {
    let keywords = request.job_description.into_keywords();
    Json(match_keywords(&request.resume_text, &keywords))
}
