//! Persisted session store.

use std::sync::Arc;

use skeletor_store::{KeyValueStore, StoreError, load_json, save_json};

use crate::Identity;

/// Fixed namespaced key holding the serialized identity record.
pub const SESSION_KEY: &str = "skeletor-auth";

/// Durable persistence of a single authenticated identity record.
///
/// Reads degrade: a missing, malformed, or structurally invalid stored record
/// yields `None`, never an error. Only `save` mutates durable storage.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the stored identity, if a valid one is present.
    pub fn load(&self) -> Option<Identity> {
        let identity: Identity = load_json(self.store.as_ref(), SESSION_KEY)?;
        if !identity.is_structurally_valid() {
            tracing::warn!("discarding structurally invalid stored identity");
            return None;
        }
        Some(identity)
    }

    /// Persist the identity; `None` removes the stored record.
    pub fn save(&self, identity: Option<&Identity>) -> Result<(), StoreError> {
        match identity {
            Some(identity) => save_json(self.store.as_ref(), SESSION_KEY, identity),
            None => self.store.remove(SESSION_KEY),
        }
    }
}

impl core::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}
