//! `skeletor-store` — durable local key-value storage.
//!
//! Two independent namespaced keys back the whole application state (the
//! session identity and the example collection). Each value is one complete
//! serialized JSON document; persistence is consistency-by-rewrite, last
//! writer wins at whole-value granularity.

pub mod json_file;
pub mod kv;
pub mod memory;

pub use json_file::JsonFileStore;
pub use kv::{KeyValueStore, StoreError, load_json, save_json};
pub use memory::MemoryStore;
