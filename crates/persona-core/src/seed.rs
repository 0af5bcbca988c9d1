//! Records present in a freshly started store.

use chrono::{DateTime, Utc};

use crate::assistant::AssistantRecord;
use crate::id::AssistantId;

/// The two example assistants every process starts with, stamped with `now`.
pub fn seed_records(now: DateTime<Utc>) -> Vec<AssistantRecord> {
    vec![
        AssistantRecord {
            id: AssistantId(1),
            name: "Alex".to_string(),
            description: "Friendly customer support assistant".to_string(),
            role: "customer support".to_string(),
            tone: "friendly".to_string(),
            personality: "helpful".to_string(),
            communication_style: "conversational".to_string(),
            response_length: "medium".to_string(),
            formality_level: 5,
            humor_level: 3,
            empathy_level: 8,
            expertise_areas: strings(&["customer service", "product support"]),
            language: "en".to_string(),
            use_emojis: true,
            created_at: now,
            updated_at: now,
        },
        AssistantRecord {
            id: AssistantId(2),
            name: "Dr. Sarah".to_string(),
            description: "Professional medical assistant".to_string(),
            role: "medical advisor".to_string(),
            tone: "professional".to_string(),
            personality: "empathetic".to_string(),
            communication_style: "detailed".to_string(),
            response_length: "long".to_string(),
            formality_level: 9,
            humor_level: 1,
            empathy_level: 10,
            expertise_areas: strings(&["health", "medicine"]),
            language: "en".to_string(),
            use_emojis: false,
            created_at: now,
            updated_at: now,
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
