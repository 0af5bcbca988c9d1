//! HTTP handler modules for the persona API.
//!
//! Each sub-module implements thin handlers that parse requests, acquire the
//! service lock, delegate to [`AssistantService`](crate::service::AssistantService),
//! and return JSON envelopes. No business logic lives in handlers.

pub mod assistants;
pub mod banner;
pub mod fallback;
