//! Job matcher — keyword score for a resume against a job description, plus
//! model-written suggestions for closing the gap.

use serde::Serialize;
use tracing::info;

use crate::assistant::prompts::{
    fill_template, ANALYSIS_MODEL, DEFAULT_TEMPERATURE, JOB_MATCH_PROMPT_TEMPLATE,
};
use crate::llm_client::{CompletionRequest, CompletionService, LlmError};
use crate::matching::{extract_keywords, match_keywords, KeywordMatch};

#[derive(Debug, Clone, Serialize)]
pub struct JobMatchReport {
    #[serde(flatten)]
    pub keyword_match: KeywordMatch,
    pub ai_suggestions: String,
}

/// Scores the resume against keywords pulled from the job description, then
/// asks the model for missing skills and alignment advice.
pub async fn match_resume_to_job(
    llm: &dyn CompletionService,
    resume_text: &str,
    job_description: &str,
) -> Result<JobMatchReport, LlmError> {
    let keywords = extract_keywords(job_description);
    let keyword_match = match_keywords(resume_text, &keywords);

    info!(
        "Job match keyword score {} ({} of {} keywords)",
        keyword_match.score,
        keyword_match.matched.len(),
        keywords.len()
    );

    let prompt = build_job_match_prompt(resume_text, job_description);
    let ai_suggestions = llm
        .complete(CompletionRequest {
            model: ANALYSIS_MODEL,
            prompt: &prompt,
            temperature: DEFAULT_TEMPERATURE,
        })
        .await?;

    Ok(JobMatchReport {
        keyword_match,
        ai_suggestions,
    })
}

fn build_job_match_prompt(resume_text: &str, job_description: &str) -> String {
    fill_template(
        JOB_MATCH_PROMPT_TEMPLATE,
        &[
            ("resume_text", resume_text),
            ("job_description", job_description),
        ],
    )
}
