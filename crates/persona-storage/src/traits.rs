//! The [`AssistantStore`] trait defining the storage contract.
//!
//! The store is the single source of truth for assistant records and the
//! exclusive owner of the id sequence. The trait is synchronous: every
//! operation is pure in-memory computation, and callers serialize access
//! themselves.

use persona_core::{AssistantDraft, AssistantId, AssistantPatch, AssistantRecord};

use crate::error::StorageError;
use crate::types::UpdateMode;

/// The storage contract for assistant records.
pub trait AssistantStore {
    /// All records in insertion order.
    fn list(&self) -> Vec<AssistantRecord>;

    /// Looks a record up by id.
    fn get(&self, id: AssistantId) -> Result<AssistantRecord, StorageError>;

    /// Validates the draft, assigns the next id, applies defaults, stamps
    /// both timestamps and appends the record.
    ///
    /// On validation failure neither the collection nor the id sequence
    /// changes.
    fn create(&mut self, draft: AssistantDraft) -> Result<AssistantRecord, StorageError>;

    /// Merges `patch` into the record with `id` and re-stamps `updated_at`.
    ///
    /// `id` and `created_at` are always preserved. See [`UpdateMode`] for
    /// how `mode` affects the merge.
    fn update(
        &mut self,
        id: AssistantId,
        patch: AssistantPatch,
        mode: UpdateMode,
    ) -> Result<AssistantRecord, StorageError>;

    /// Removes the record with `id` and returns it.
    fn delete(&mut self, id: AssistantId) -> Result<AssistantRecord, StorageError>;

    /// Records whose role equals `role`, ignoring case, in insertion order.
    fn find_by_role(&self, role: &str) -> Vec<AssistantRecord>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
