// Long-form writing: portfolio and cover letter drafts, plus the template-only
// resume heading (no LLM call).

use crate::assistant::prompts::{
    fill_template, CHAT_MODEL, COVER_LETTER_PROMPT_TEMPLATE, DEFAULT_TEMPERATURE,
    PORTFOLIO_PROMPT_TEMPLATE, RESUME_HEADING_TEMPLATE,
};
use crate::llm_client::{CompletionRequest, CompletionService, LlmError};

pub async fn generate_portfolio(
    llm: &dyn CompletionService,
    user_input: &str,
) -> Result<String, LlmError> {
    write_with_template(llm, PORTFOLIO_PROMPT_TEMPLATE, user_input).await
}

pub async fn generate_cover_letter(
    llm: &dyn CompletionService,
    user_input: &str,
) -> Result<String, LlmError> {
    write_with_template(llm, COVER_LETTER_PROMPT_TEMPLATE, user_input).await
}

async fn write_with_template(
    llm: &dyn CompletionService,
    template: &str,
    user_input: &str,
) -> Result<String, LlmError> {
    let prompt = fill_template(template, &[("user_input", user_input)]);

    llm.complete(CompletionRequest {
        model: CHAT_MODEL,
        prompt: &prompt,
        temperature: DEFAULT_TEMPERATURE,
    })
    .await
}

/// Prefixes the resume body with its ATS-friendly heading.
pub fn generate_resume_text(title: &str, content: &str) -> String {
    format!(
        "{}\n\n{content}",
        fill_template(RESUME_HEADING_TEMPLATE, &[("title", title)])
    )
}
