//! API schema types for request/response definitions.
//!
//! Every JSON body the server emits is an [`common::ApiResponse`] envelope.

pub mod assistants;
pub mod banner;
pub mod common;
