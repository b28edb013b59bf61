//! Example domain record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skeletor_core::ExampleId;

/// The generic CRUD entity managed by the example feature.
///
/// The repository exclusively owns the backing collection; callers receive
/// copies and never mutate records in place. Serialized camelCase to match
/// the documented storage layout (`createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleItem {
    pub id: ExampleId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl ExampleItem {
    /// Case-insensitive substring match on title or description.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, description: &str) -> ExampleItem {
        ExampleItem {
            id: ExampleId::new(),
            title: title.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn matches_title_and_description_case_insensitively() {
        let it = item("First example", "Some text");
        assert!(it.matches("first"));
        assert!(it.matches("EXAMPLE".to_lowercase().as_str()));
        assert!(it.matches("some t"));
        assert!(!it.matches("second"));
    }

    #[test]
    fn storage_layout_uses_camel_case() {
        let it = item("T", "D");
        let json = serde_json::to_value(&it).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
