//! Storage-layer types.

use std::fmt;

/// How the caller framed an update.
///
/// Both modes currently perform the same shallow merge: a `Replace` does not
/// reset fields the caller left out. The mode travels with the call so the
/// distinction shows up in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Full update (`PUT`).
    Replace,
    /// Partial update (`PATCH`).
    Merge,
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateMode::Replace => f.write_str("replace"),
            UpdateMode::Merge => f.write_str("merge"),
        }
    }
}
