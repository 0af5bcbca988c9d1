//! Application state with a shared `AssistantService`.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Every handler holds the lock for the whole of its store
//! call, so mutations never interleave.

use std::sync::Arc;

use persona_storage::AssistantStore;

use crate::config::RunMode;
use crate::service::AssistantService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared assistant service (async Mutex, awaited without blocking
    /// the runtime).
    pub service: Arc<tokio::sync::Mutex<AssistantService>>,
    /// Controls fault detail in 500 responses.
    pub mode: RunMode,
}

impl AppState {
    /// Creates state over a freshly seeded in-memory store.
    pub fn new(mode: RunMode) -> Self {
        Self::with_service(AssistantService::seeded(), mode)
    }

    /// Creates state over a caller-supplied store.
    pub fn with_store(store: impl AssistantStore + Send + 'static, mode: RunMode) -> Self {
        Self::with_service(AssistantService::new(store), mode)
    }

    fn with_service(service: AssistantService, mode: RunMode) -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
            mode,
        }
    }
}
