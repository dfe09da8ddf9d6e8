pub mod ats;
pub mod career;
pub mod chatbot;
pub mod health;
pub mod pdf;
pub mod resume;
pub mod writing;

use anyhow::Result;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::state::AppState;

// Collection routes answer with and without the trailing slash; existing
// clients call both forms.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Keyword scoring
        .route("/ats-score", post(ats::handle_ats_score))
        .route("/ats-score/", post(ats::handle_ats_score))
        // Assistant
        .route("/chatbot/ask", post(chatbot::handle_ask))
        .route("/job-matcher", post(career::handle_job_match))
        .route("/job-matcher/", post(career::handle_job_match))
        .route("/skill-gap", post(career::handle_skill_gap))
        .route("/skill-gap/", post(career::handle_skill_gap))
        .route("/portfolio", post(writing::handle_portfolio))
        .route("/portfolio/", post(writing::handle_portfolio))
        .route("/cover-letter", post(writing::handle_cover_letter))
        .route("/cover-letter/", post(writing::handle_cover_letter))
        // Documents
        .route("/resume", get(resume::handle_index))
        .route("/resume/", get(resume::handle_index))
        .route("/resume/generate", post(resume::handle_generate))
        .route("/pdf/create", post(pdf::handle_create))
        .with_state(state)
}

/// CORS for the single front-end origin, with credentials.
/// Methods and headers mirror the request; wildcards are not allowed alongside credentials.
pub fn cors_layer(frontend_origin: &str) -> Result<CorsLayer> {
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([HeaderValue::from_str(frontend_origin)?]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
