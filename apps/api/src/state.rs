use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::store::CandidateStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CandidateStore>,
    pub llm: LlmClient,
}
