//! Storage error types for persona-storage.

use persona_core::{AssistantId, ValidationError};
use thiserror::Error;

/// Errors produced by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The creation payload was rejected before touching the collection.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record carries the given id.
    #[error("assistant not found: {0}")]
    NotFound(AssistantId),
}
