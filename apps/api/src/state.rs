use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// The analyzer holds no per-request state beyond this; every run is independent.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
