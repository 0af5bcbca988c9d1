//! Record store for assistant profiles.
//!
//! Provides the [`AssistantStore`] trait defining the storage contract and
//! [`InMemoryStore`], the process-resident backend the server runs on.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: UpdateMode
//! - [`traits`]: AssistantStore trait definition
//! - [`memory`]: InMemoryStore implementation

pub mod error;
pub mod memory;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use traits::AssistantStore;
pub use types::UpdateMode;
