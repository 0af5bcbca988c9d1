//! Assistant request/response types.
//!
//! Request bodies are the typed input schemas from `persona-core`; responses
//! wrap [`AssistantRecord`] in the standard envelope.

use persona_core::AssistantRecord;

use super::common::ApiResponse;

pub use persona_core::{
    AssistantDraft as CreateAssistantRequest, AssistantPatch as UpdateAssistantRequest,
};

pub const CREATED_MESSAGE: &str = "Assistant created successfully";
pub const UPDATED_MESSAGE: &str = "Assistant updated successfully";
pub const DELETED_MESSAGE: &str = "Assistant deleted successfully";

/// Envelope around a single assistant.
pub type AssistantResponse = ApiResponse<AssistantRecord>;

/// Envelope around a list of assistants, with `count`.
pub type AssistantListResponse = ApiResponse<Vec<AssistantRecord>>;
