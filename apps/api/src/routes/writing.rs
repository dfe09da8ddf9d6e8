//! Portfolio and cover letter handlers.
//!
//! Both accept `user_input` as a query parameter or as a JSON body field; the
//! body wins when both are present.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::assistant::writer::{generate_cover_letter, generate_portfolio};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct UserInput {
    pub user_input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub portfolio: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

/// POST /portfolio/
pub async fn handle_portfolio(
    State(state): State<AppState>,
    Query(query): Query<UserInput>,
    body: Option<Json<UserInput>>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let user_input = resolve_user_input(query, body)?;
    let portfolio = generate_portfolio(state.llm.as_ref(), &user_input).await?;
    Ok(Json(PortfolioResponse { portfolio }))
}

/// POST /cover-letter/
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Query(query): Query<UserInput>,
    body: Option<Json<UserInput>>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let user_input = resolve_user_input(query, body)?;
    let cover_letter = generate_cover_letter(state.llm.as_ref(), &user_input).await?;
    Ok(Json(CoverLetterResponse { cover_letter }))
}

fn resolve_user_input(query: UserInput, body: Option<Json<UserInput>>) -> Result<String, AppError> {
    body.and_then(|Json(body)| body.user_input)
        .or(query.user_input)
        .ok_or_else(|| AppError::Validation("user_input is required".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(value: &str) -> UserInput {
        UserInput {
            user_input: Some(value.to_string()),
        }
    }

    #[test]
    fn test_body_takes_precedence_over_query() {
        let resolved = resolve_user_input(input("from query"), Some(Json(input("from body")))).unwrap();
        assert_eq!(resolved, "from body");
    }

    #[test]
    fn test_falls_back_to_query() {
        let resolved = resolve_user_input(input("from query"), None).unwrap();
        assert_eq!(resolved, "from query");

        let resolved = resolve_user_input(input("from query"), Some(Json(UserInput::default()))).unwrap();
        assert_eq!(resolved, "from query");
    }

    #[test]
    fn test_missing_everywhere_is_validation_error() {
        let result = resolve_user_input(UserInput::default(), None);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
