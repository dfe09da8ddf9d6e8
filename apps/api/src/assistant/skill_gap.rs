use crate::assistant::prompts::{
    fill_template, ANALYSIS_MODEL, DEFAULT_TEMPERATURE, SKILL_GAP_PROMPT_TEMPLATE,
};
use crate::llm_client::{CompletionRequest, CompletionService, LlmError};

/// Asks for the skills, courses, projects and certifications separating a
/// candidate from a target role. Returns the advice text unmodified.
pub async fn analyze_skill_gap(
    llm: &dyn CompletionService,
    user_skills: &str,
    target_role: &str,
) -> Result<String, LlmError> {
    let prompt = build_skill_gap_prompt(user_skills, target_role);

    llm.complete(CompletionRequest {
        model: ANALYSIS_MODEL,
        prompt: &prompt,
        temperature: DEFAULT_TEMPERATURE,
    })
    .await
}

fn build_skill_gap_prompt(user_skills: &str, target_role: &str) -> String {
    fill_template(
        SKILL_GAP_PROMPT_TEMPLATE,
        &[("user_skills", user_skills), ("target_role", target_role)],
    )
}
