//! Typed input schemas for creating and updating assistants.
//!
//! Request bodies deserialize into these types instead of being merged into
//! records as loose JSON. Unknown keys are dropped, so clients can never set
//! `id`, `created_at`, or `updated_at` through a body.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::assistant::{defaults, AssistantRecord};
use crate::error::ValidationError;
use crate::id::AssistantId;

/// Unvalidated creation payload. Every field is optional at this stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssistantDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub role: Option<String>,
    pub tone: Option<String>,
    pub personality: Option<String>,
    pub communication_style: Option<String>,
    pub response_length: Option<String>,
    pub formality_level: Option<i64>,
    pub humor_level: Option<i64>,
    pub empathy_level: Option<i64>,
    pub expertise_areas: Option<Vec<String>>,
    pub language: Option<String>,
    pub use_emojis: Option<bool>,
}

impl AssistantDraft {
    /// Draft with just the three required fields set.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        AssistantDraft {
            name: Some(name.into()),
            description: Some(description.into()),
            role: Some(role.into()),
            ..Default::default()
        }
    }

    /// Checks that `name`, `description` and `role` are present and
    /// non-empty.
    ///
    /// Absent, `null` and `""` all count as missing. The error lists every
    /// missing field in declaration order.
    pub fn validate(self) -> Result<NewAssistant, ValidationError> {
        let required = (
            non_empty(self.name),
            non_empty(self.description),
            non_empty(self.role),
        );

        let (name, description, role) = match required {
            (Some(name), Some(description), Some(role)) => (name, description, role),
            (name, description, role) => {
                let missing = [
                    ("name", name.is_none()),
                    ("description", description.is_none()),
                    ("role", role.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
                return Err(ValidationError::MissingFields(missing));
            }
        };

        Ok(NewAssistant {
            name,
            description,
            role,
            tone: self.tone,
            personality: self.personality,
            communication_style: self.communication_style,
            response_length: self.response_length,
            formality_level: self.formality_level,
            humor_level: self.humor_level,
            empathy_level: self.empathy_level,
            expertise_areas: self.expertise_areas,
            language: self.language,
            use_emojis: self.use_emojis,
        })
    }
}

/// Creation payload whose required fields have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssistant {
    pub name: String,
    pub description: String,
    pub role: String,
    pub tone: Option<String>,
    pub personality: Option<String>,
    pub communication_style: Option<String>,
    pub response_length: Option<String>,
    pub formality_level: Option<i64>,
    pub humor_level: Option<i64>,
    pub empathy_level: Option<i64>,
    pub expertise_areas: Option<Vec<String>>,
    pub language: Option<String>,
    pub use_emojis: Option<bool>,
}

impl NewAssistant {
    /// Builds the stored record, filling defaults and stamping both
    /// timestamps with `now`.
    ///
    /// Empty strings in optional text fields and a level of `0` fall back to
    /// the default, the same as an absent field. `false` is kept.
    pub fn into_record(self, id: AssistantId, now: DateTime<Utc>) -> AssistantRecord {
        AssistantRecord {
            id,
            name: self.name,
            description: self.description,
            role: self.role,
            tone: text_or(self.tone, defaults::TONE),
            personality: text_or(self.personality, defaults::PERSONALITY),
            communication_style: text_or(
                self.communication_style,
                defaults::COMMUNICATION_STYLE,
            ),
            response_length: text_or(self.response_length, defaults::RESPONSE_LENGTH),
            formality_level: level_or(self.formality_level, defaults::FORMALITY_LEVEL),
            humor_level: level_or(self.humor_level, defaults::HUMOR_LEVEL),
            empathy_level: level_or(self.empathy_level, defaults::EMPATHY_LEVEL),
            expertise_areas: self.expertise_areas.unwrap_or_default(),
            language: text_or(self.language, defaults::LANGUAGE),
            use_emojis: self.use_emojis.unwrap_or(defaults::USE_EMOJIS),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Update payload for both full (PUT) and partial (PATCH) updates.
///
/// `None` means "leave unchanged"; an explicit JSON `null` is read the same
/// way. No field-level validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssistantPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub role: Option<String>,
    pub tone: Option<String>,
    pub personality: Option<String>,
    pub communication_style: Option<String>,
    pub response_length: Option<String>,
    pub formality_level: Option<i64>,
    pub humor_level: Option<i64>,
    pub empathy_level: Option<i64>,
    pub expertise_areas: Option<Vec<String>>,
    pub language: Option<String>,
    pub use_emojis: Option<bool>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn text_or(value: Option<String>, default: &str) -> String {
    non_empty(value).unwrap_or_else(|| default.to_string())
}

fn level_or(value: Option<i64>, default: i64) -> i64 {
    value.filter(|v| *v != 0).unwrap_or(default)
}
