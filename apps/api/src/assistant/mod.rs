// Assistant features: each is a single completion call (or none) wrapped in a
// typed function. All LLM calls go through the `CompletionService` seam.

pub mod chatbot;
pub mod job_matcher;
pub mod prompts;
pub mod skill_gap;
pub mod writer;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{CompletionRequest, CompletionService, LlmError};

    /// What the stub should do when called.
    pub enum StubReply {
        Text(String),
        Timeout,
        Upstream(u16),
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedCall {
        pub model: String,
        pub prompt: String,
        pub temperature: f64,
    }

    /// In-memory completion service that records every request.
    pub struct StubCompletion {
        reply: StubReply,
        pub calls: Mutex<Vec<RecordedCall>>,
    }

    impl StubCompletion {
        pub fn replying(text: &str) -> Self {
            Self::with(StubReply::Text(text.to_string()))
        }

        pub fn with(reply: StubReply) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn recorded(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionService for StubCompletion {
        async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
            self.calls.lock().unwrap().push(RecordedCall {
                model: request.model.to_string(),
                prompt: request.prompt.to_string(),
                temperature: request.temperature,
            });
            match &self.reply {
                StubReply::Text(text) => Ok(text.clone()),
                StubReply::Timeout => Err(LlmError::Timeout),
                StubReply::Upstream(status) => Err(LlmError::Api {
                    status: *status,
                    message: "upstream failure".to_string(),
                }),
            }
        }
    }
}
