//! HTTP/JSON API server for AI assistant profiles.
//!
//! Exposes CRUD and role filtering over an in-memory assistant store. This
//! crate contains the router, thin handlers, the response envelope schema,
//! error mapping, configuration, and logging setup.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
