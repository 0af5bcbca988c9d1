//! The assistant profile record and its field defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::draft::AssistantPatch;
use crate::id::AssistantId;

/// Defaults applied to optional fields when an assistant is created.
pub mod defaults {
    pub const TONE: &str = "friendly";
    pub const PERSONALITY: &str = "helpful";
    pub const COMMUNICATION_STYLE: &str = "conversational";
    pub const RESPONSE_LENGTH: &str = "medium";
    pub const FORMALITY_LEVEL: i64 = 5;
    pub const HUMOR_LEVEL: i64 = 5;
    pub const EMPATHY_LEVEL: i64 = 5;
    pub const LANGUAGE: &str = "en";
    pub const USE_EMOJIS: bool = true;
}

/// One AI assistant profile.
///
/// `id` and `created_at` are fixed once the store creates the record;
/// `updated_at` moves on every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantRecord {
    pub id: AssistantId,
    pub name: String,
    pub description: String,
    /// Matched case-insensitively by role filtering.
    pub role: String,
    pub tone: String,
    pub personality: String,
    pub communication_style: String,
    pub response_length: String,
    pub formality_level: i64,
    pub humor_level: i64,
    pub empathy_level: i64,
    pub expertise_areas: Vec<String>,
    pub language: String,
    pub use_emojis: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssistantRecord {
    /// Shallow-merges `patch` into this record and stamps `updated_at`.
    ///
    /// Every field present in the patch overwrites the stored value; absent
    /// fields are left alone. `id` and `created_at` are not patchable.
    pub fn apply(&mut self, patch: AssistantPatch, now: DateTime<Utc>) {
        let AssistantPatch {
            name,
            description,
            role,
            tone,
            personality,
            communication_style,
            response_length,
            formality_level,
            humor_level,
            empathy_level,
            expertise_areas,
            language,
            use_emojis,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(role) = role {
            self.role = role;
        }
        if let Some(tone) = tone {
            self.tone = tone;
        }
        if let Some(personality) = personality {
            self.personality = personality;
        }
        if let Some(style) = communication_style {
            self.communication_style = style;
        }
        if let Some(length) = response_length {
            self.response_length = length;
        }
        if let Some(level) = formality_level {
            self.formality_level = level;
        }
        if let Some(level) = humor_level {
            self.humor_level = level;
        }
        if let Some(level) = empathy_level {
            self.empathy_level = level;
        }
        if let Some(areas) = expertise_areas {
            self.expertise_areas = areas;
        }
        if let Some(language) = language {
            self.language = language;
        }
        if let Some(use_emojis) = use_emojis {
            self.use_emojis = use_emojis;
        }

        self.updated_at = now;
    }

    /// Case-insensitive comparison against this record's role.
    pub fn has_role(&self, role: &str) -> bool {
        self.role.to_lowercase() == role.to_lowercase()
    }
}
