//! Key-value storage contract and typed JSON helpers.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage-level error.
///
/// Reads never produce this: a missing or unreadable value degrades to
/// `None` at the typed layer. Only writes can fail visibly.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable string key-value storage.
///
/// Implementations must write each value as one complete unit; a `put_raw`
/// call never leaves a partially-written value behind.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value under `key`, if any. Unreadable values are `None`.
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Overwrite the value under `key` with one complete serialized value.
    fn put_raw(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Load and deserialize the value under `key`.
///
/// This is the named degradation step for corrupt storage: a missing key,
/// unreadable value, or structural mismatch all yield `None` (logged at
/// warn), never an error. Callers supply their own fallback.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get_raw(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding malformed stored value");
            None
        }
    }
}

/// Serialize `value` and persist it under `key` as one complete document.
pub fn save_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.put_raw(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: String,
        count: u32,
    }

    #[test]
    fn load_json_returns_none_for_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(load_json::<Record>(&store, "missing"), None);
    }

    #[test]
    fn load_json_returns_none_for_malformed_value() {
        let store = MemoryStore::new();
        store.put_raw("k", "{not json").unwrap();
        assert_eq!(load_json::<Record>(&store, "k"), None);
    }

    #[test]
    fn load_json_returns_none_for_structural_mismatch() {
        let store = MemoryStore::new();
        store.put_raw("k", r#"{"id": 42}"#).unwrap();
        assert_eq!(load_json::<Record>(&store, "k"), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        let rec = Record {
            id: "a".into(),
            count: 3,
        };
        save_json(&store, "k", &rec).unwrap();
        assert_eq!(load_json::<Record>(&store, "k"), Some(rec));
    }

    #[test]
    fn remove_clears_the_value() {
        let store = MemoryStore::new();
        store.put_raw("k", "\"v\"").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get_raw("k"), None);
        // Removing again is a no-op.
        store.remove("k").unwrap();
    }
}
