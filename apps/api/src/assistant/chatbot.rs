use tracing::info;

use crate::assistant::prompts::{CHAT_MODEL, CHAT_TEMPERATURE};
use crate::llm_client::{CompletionRequest, CompletionService, LlmError};

/// Sends the question verbatim and returns the model's answer.
pub async fn ask_chatbot(llm: &dyn CompletionService, question: &str) -> Result<String, LlmError> {
    info!("Chatbot question received ({} chars)", question.len());

    llm.complete(CompletionRequest {
        model: CHAT_MODEL,
        prompt: question,
        temperature: CHAT_TEMPERATURE,
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::testing::{StubCompletion, StubReply};

    #[tokio::test]
    async fn test_question_is_forwarded_verbatim() {
        let llm = StubCompletion::replying("Keep it to one page.");
        let answer = ask_chatbot(&llm, "How long should my resume be?")
            .await
            .unwrap();

        assert_eq!(answer, "Keep it to one page.");
        let calls = llm.recorded();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "How long should my resume be?");
        assert_eq!(calls[0].model, "gpt-4");
        assert_eq!(calls[0].temperature, 0.8);
    }

    #[tokio::test]
    async fn test_timeout_propagates() {
        let llm = StubCompletion::with(StubReply::Timeout);
        let result = ask_chatbot(&llm, "hello").await;
        assert!(matches!(result, Err(LlmError::Timeout)));
    }
}
