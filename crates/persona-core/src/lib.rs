//! Core domain types for the persona assistant-profile service.
//!
//! This crate defines the assistant record, its store-assigned identifier,
//! the typed input schemas accepted from clients, and the seed records a
//! fresh process starts with. It has no knowledge of storage or HTTP.
//!
//! # Modules
//!
//! - [`id`]: AssistantId newtype
//! - [`assistant`]: AssistantRecord and field defaults
//! - [`draft`]: AssistantDraft / NewAssistant (create) and AssistantPatch (update)
//! - [`seed`]: the two records present at startup
//! - [`error`]: ValidationError

pub mod assistant;
pub mod draft;
pub mod error;
pub mod id;
pub mod seed;

pub use assistant::AssistantRecord;
pub use draft::{AssistantDraft, AssistantPatch, NewAssistant};
pub use error::ValidationError;
pub use id::AssistantId;
pub use seed::seed_records;
