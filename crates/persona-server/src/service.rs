//! AssistantService: the single coordinator between HTTP handlers and the
//! record store.
//!
//! Handlers are thin wrappers that delegate to these methods. The service
//! owns the store behind the [`AssistantStore`] trait and maps storage
//! failures onto [`ApiError`].

use persona_core::{AssistantDraft, AssistantId, AssistantPatch, AssistantRecord};
use persona_storage::{AssistantStore, InMemoryStore, UpdateMode};

use crate::error::ApiError;

pub struct AssistantService {
    store: Box<dyn AssistantStore + Send>,
}

impl AssistantService {
    pub fn new(store: impl AssistantStore + Send + 'static) -> Self {
        AssistantService {
            store: Box::new(store),
        }
    }

    /// Service over a fresh store holding the two seed records.
    pub fn seeded() -> Self {
        Self::new(InMemoryStore::seeded())
    }

    pub fn list(&self) -> Vec<AssistantRecord> {
        self.store.list()
    }

    pub fn get(&self, id: AssistantId) -> Result<AssistantRecord, ApiError> {
        Ok(self.store.get(id)?)
    }

    pub fn create(&mut self, draft: AssistantDraft) -> Result<AssistantRecord, ApiError> {
        let record = self.store.create(draft).inspect_err(|err| {
            tracing::info!(error = %err, "rejected assistant create");
        })?;
        tracing::info!(id = %record.id, name = %record.name, "assistant created");
        Ok(record)
    }

    /// Full and partial updates share this path; see [`UpdateMode`].
    pub fn update(
        &mut self,
        id: AssistantId,
        patch: AssistantPatch,
        mode: UpdateMode,
    ) -> Result<AssistantRecord, ApiError> {
        let record = self.store.update(id, patch, mode)?;
        tracing::info!(%id, %mode, "assistant updated");
        Ok(record)
    }

    pub fn delete(&mut self, id: AssistantId) -> Result<AssistantRecord, ApiError> {
        let record = self.store.delete(id)?;
        tracing::info!(%id, remaining = self.store.len(), "assistant deleted");
        Ok(record)
    }

    pub fn find_by_role(&self, role: &str) -> Vec<AssistantRecord> {
        self.store.find_by_role(role)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
