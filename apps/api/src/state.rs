use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Completion collaborator. `OpenAiClient` in production, a stub in tests.
    pub llm: Arc<dyn CompletionService>,
    pub config: Config,
}
