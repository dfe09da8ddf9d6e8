use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::chatbot::ask_chatbot;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// POST /chatbot/ask
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let answer = ask_chatbot(state.llm.as_ref(), &request.question).await?;
    Ok(Json(ChatResponse { answer }))
}
