//! In-memory implementation of [`AssistantStore`].
//!
//! [`InMemoryStore`] keeps records in a `Vec` so iteration order is
//! insertion order. Lookups are linear scans over that vector; ids are
//! compared by value, never used as positions.

use chrono::Utc;
use persona_core::{
    seed_records, AssistantDraft, AssistantId, AssistantPatch, AssistantRecord,
};

use crate::error::StorageError;
use crate::traits::AssistantStore;
use crate::types::UpdateMode;

/// Process-resident assistant store.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    records: Vec<AssistantRecord>,
    /// Next id to hand out. Only ever increases.
    next_id: AssistantId,
}

impl InMemoryStore {
    /// Empty store; the first created record gets id 1.
    pub fn new() -> Self {
        InMemoryStore {
            records: Vec::new(),
            next_id: AssistantId(1),
        }
    }

    /// Store holding the two seed records; the first created record gets
    /// id 3.
    pub fn seeded() -> Self {
        Self::with_records(seed_records(Utc::now()))
    }

    /// Store pre-populated with `records`. The sequence resumes after the
    /// highest id present.
    pub fn with_records(records: Vec<AssistantRecord>) -> Self {
        let next_id = records
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(AssistantId(1), AssistantId::next);
        InMemoryStore { records, next_id }
    }

    fn position(&self, id: AssistantId) -> Result<usize, StorageError> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StorageError::NotFound(id))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantStore for InMemoryStore {
    fn list(&self) -> Vec<AssistantRecord> {
        self.records.clone()
    }

    fn get(&self, id: AssistantId) -> Result<AssistantRecord, StorageError> {
        let idx = self.position(id)?;
        Ok(self.records[idx].clone())
    }

    fn create(&mut self, draft: AssistantDraft) -> Result<AssistantRecord, StorageError> {
        let new = draft.validate()?;

        let id = self.next_id;
        self.next_id = id.next();

        let record = new.into_record(id, Utc::now());
        self.records.push(record.clone());
        tracing::debug!(%id, role = %record.role, "assistant created");
        Ok(record)
    }

    fn update(
        &mut self,
        id: AssistantId,
        patch: AssistantPatch,
        mode: UpdateMode,
    ) -> Result<AssistantRecord, StorageError> {
        let idx = self.position(id)?;
        let record = &mut self.records[idx];
        record.apply(patch, Utc::now());
        tracing::debug!(%id, %mode, "assistant updated");
        Ok(record.clone())
    }

    fn delete(&mut self, id: AssistantId) -> Result<AssistantRecord, StorageError> {
        let idx = self.position(id)?;
        let removed = self.records.remove(idx);
        tracing::debug!(%id, "assistant deleted");
        Ok(removed)
    }

    fn find_by_role(&self, role: &str) -> Vec<AssistantRecord> {
        self.records
            .iter()
            .filter(|r| r.has_role(role))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use persona_core::ValidationError;
    use proptest::prelude::*;

    use super::*;

    fn ids(records: &[AssistantRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn seeded_store_lists_seeds_in_order() {
        let store = InMemoryStore::seeded();
        let all = store.list();
        assert_eq!(ids(&all), vec![1, 2]);
        assert_eq!(all[0].name, "Alex");
        assert_eq!(all[1].name, "Dr. Sarah");
    }

    #[test]
    fn first_create_after_seeds_gets_id_3() {
        let mut store = InMemoryStore::seeded();
        let record = store
            .create(AssistantDraft::new("Bot", "d", "sales"))
            .unwrap();
        assert_eq!(record.id, AssistantId(3));
        assert_eq!(record.tone, "friendly");
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn empty_store_starts_at_id_1() {
        let mut store = InMemoryStore::new();
        assert!(store.is_empty());
        let record = store.create(AssistantDraft::new("a", "b", "c")).unwrap();
        assert_eq!(record.id, AssistantId(1));
    }

    #[test]
    fn failed_create_does_not_mutate() {
        let mut store = InMemoryStore::seeded();
        let err = store
            .create(AssistantDraft {
                name: Some("Bot".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(
            err,
            StorageError::Validation(ValidationError::MissingFields(vec![
                "description",
                "role"
            ]))
        );
        assert_eq!(store.len(), 2);

        // The rejected draft must not have consumed an id.
        let record = store.create(AssistantDraft::new("a", "b", "c")).unwrap();
        assert_eq!(record.id, AssistantId(3));
    }

    #[test]
    fn get_round_trips_created_record() {
        let mut store = InMemoryStore::seeded();
        let created = store.create(AssistantDraft::new("Bot", "d", "sales")).unwrap();
        assert_eq!(store.get(created.id).unwrap(), created);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = InMemoryStore::seeded();
        assert_eq!(
            store.get(AssistantId(99)),
            Err(StorageError::NotFound(AssistantId(99)))
        );
    }

    #[test]
    fn update_merges_and_preserves_identity() {
        let mut store = InMemoryStore::seeded();
        let before = store.get(AssistantId(1)).unwrap();

        let after = store
            .update(
                AssistantId(1),
                AssistantPatch {
                    humor_level: Some(9),
                    ..Default::default()
                },
                UpdateMode::Merge,
            )
            .unwrap();

        assert_eq!(after.humor_level, 9);
        assert_eq!(after.name, "Alex");
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
        assert_eq!(store.get(AssistantId(1)).unwrap(), after);
    }

    #[test]
    fn replace_mode_merges_like_merge_mode() {
        let mut a = InMemoryStore::seeded();
        let mut b = a.clone();
        let patch = AssistantPatch {
            tone: Some("calm".to_string()),
            ..Default::default()
        };

        let replaced = a.update(AssistantId(2), patch.clone(), UpdateMode::Replace).unwrap();
        let merged = b.update(AssistantId(2), patch, UpdateMode::Merge).unwrap();

        assert_eq!(replaced.tone, merged.tone);
        assert_eq!(replaced.name, "Dr. Sarah");
        assert_eq!(replaced.expertise_areas, merged.expertise_areas);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = InMemoryStore::seeded();
        let err = store
            .update(AssistantId(42), AssistantPatch::default(), UpdateMode::Merge)
            .unwrap_err();
        assert_eq!(err, StorageError::NotFound(AssistantId(42)));
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut store = InMemoryStore::seeded();
        let removed = store.delete(AssistantId(1)).unwrap();
        assert_eq!(removed.name, "Alex");
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(AssistantId(1)),
            Err(StorageError::NotFound(AssistantId(1)))
        );
        assert_eq!(
            store.delete(AssistantId(1)),
            Err(StorageError::NotFound(AssistantId(1)))
        );
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = InMemoryStore::seeded();
        let third = store.create(AssistantDraft::new("a", "b", "c")).unwrap();
        store.delete(third.id).unwrap();
        let fourth = store.create(AssistantDraft::new("a", "b", "c")).unwrap();
        assert_eq!(fourth.id, AssistantId(4));
    }

    #[test]
    fn find_by_role_is_case_insensitive_and_ordered() {
        let mut store = InMemoryStore::seeded();
        store
            .create(AssistantDraft::new("Sam", "second line", "Customer Support"))
            .unwrap();

        let lower = store.find_by_role("customer support");
        let mixed = store.find_by_role("Customer Support");
        assert_eq!(ids(&lower), vec![1, 3]);
        assert_eq!(lower, mixed);
        assert!(store.find_by_role("pirate").is_empty());
    }

    #[test]
    fn with_records_resumes_after_highest_id() {
        let mut seeds = seed_records(Utc::now());
        seeds[1].id = AssistantId(10);
        let mut store = InMemoryStore::with_records(seeds);
        let record = store.create(AssistantDraft::new("a", "b", "c")).unwrap();
        assert_eq!(record.id, AssistantId(11));
    }

    proptest! {
        #[test]
        fn created_ids_strictly_increase(
            ops in prop::collection::vec(any::<bool>(), 1..40)
        ) {
            let mut store = InMemoryStore::seeded();
            let mut highest = AssistantId(2);
            for create in ops {
                if create {
                    let record = store.create(AssistantDraft::new("n", "d", "r")).unwrap();
                    prop_assert!(record.id > highest);
                    highest = record.id;
                } else if let Some(first) = store.list().first() {
                    store.delete(first.id).unwrap();
                }
            }
        }

        #[test]
        fn role_lookup_ignores_ascii_case(role in "[a-zA-Z ]{1,24}") {
            let mut store = InMemoryStore::new();
            store.create(AssistantDraft::new("n", "d", role.clone())).unwrap();
            prop_assert_eq!(store.find_by_role(&role.to_uppercase()).len(), 1);
            prop_assert_eq!(store.find_by_role(&role.to_lowercase()).len(), 1);
        }

        #[test]
        fn count_tracks_creates_and_deletes(creates in 0usize..20, deletes in 0usize..20) {
            let mut store = InMemoryStore::seeded();
            for _ in 0..creates {
                store.create(AssistantDraft::new("n", "d", "r")).unwrap();
            }
            let deletes = deletes.min(store.len());
            for _ in 0..deletes {
                let last = store.list().last().map(|r| r.id).unwrap();
                store.delete(last).unwrap();
            }
            prop_assert_eq!(store.len(), creates + 2 - deletes);
        }
    }
}
