//! Stable ID newtype for assistant records.
//!
//! Ids are opaque integers handed out by the store. They are never array
//! positions and are never reused within a process lifetime.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned assistant identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AssistantId(pub i64);

impl AssistantId {
    /// The id the sequence hands out after this one.
    pub fn next(self) -> Self {
        AssistantId(self.0 + 1)
    }

    /// Reads the integer at the start of `raw`, ignoring whatever follows it.
    ///
    /// Leading whitespace and one `+`/`-` sign are accepted, so `" 12abc"`
    /// yields 12. Returns `None` when no digit follows, or when the digits
    /// overflow `i64`.
    pub fn parse_leading(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_start();
        let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        let sign_len = trimmed.len() - unsigned.len();
        let digits = unsigned
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return None;
        }
        trimmed[..sign_len + digits].parse::<i64>().ok().map(AssistantId)
    }
}

impl fmt::Display for AssistantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AssistantId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(AssistantId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_increments_by_one() {
        assert_eq!(AssistantId(2).next(), AssistantId(3));
    }

    #[test]
    fn parses_plain_integers_only() {
        assert_eq!("42".parse::<AssistantId>().unwrap(), AssistantId(42));
        assert!("abc".parse::<AssistantId>().is_err());
        assert!("4.2".parse::<AssistantId>().is_err());
        assert!("".parse::<AssistantId>().is_err());
    }

    #[test]
    fn parse_leading_reads_the_integer_prefix() {
        assert_eq!(AssistantId::parse_leading("1abc"), Some(AssistantId(1)));
        assert_eq!(AssistantId::parse_leading("2.9"), Some(AssistantId(2)));
        assert_eq!(AssistantId::parse_leading("  7"), Some(AssistantId(7)));
        assert_eq!(AssistantId::parse_leading("+3x"), Some(AssistantId(3)));
        assert_eq!(AssistantId::parse_leading("-4"), Some(AssistantId(-4)));
        assert_eq!(AssistantId::parse_leading("42"), Some(AssistantId(42)));
    }

    #[test]
    fn parse_leading_rejects_segments_without_digits() {
        assert_eq!(AssistantId::parse_leading("abc"), None);
        assert_eq!(AssistantId::parse_leading(""), None);
        assert_eq!(AssistantId::parse_leading("-"), None);
        assert_eq!(AssistantId::parse_leading("x1"), None);
        assert_eq!(AssistantId::parse_leading("99999999999999999999"), None);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&AssistantId(7)).unwrap();
        assert_eq!(json, "7");
    }
}
