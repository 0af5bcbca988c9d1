//! Validation error for assistant input.

use thiserror::Error;

/// Errors produced while validating client-supplied assistant fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required creation fields were absent, null, or empty.
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}
