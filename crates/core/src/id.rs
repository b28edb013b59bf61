//! Opaque string identifiers used across the domain.
//!
//! Identifiers are opaque strings rather than raw UUIDs: freshly generated ids
//! are UUIDv7 strings, but seeded/external data may carry arbitrary opaque
//! values (the example seed uses `"1"` and `"2"`). Equality is by exact string.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of an authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(String);

/// Identifier of an example domain record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExampleId(String);

macro_rules! impl_opaque_id {
    ($t:ty) => {
        impl $t {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing ids explicitly in
            /// tests for determinism.
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            /// Wrap an existing opaque id (seed data, wire input).
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

impl_opaque_id!(IdentityId);
impl_opaque_id!(ExampleId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique_and_non_blank() {
        let a = ExampleId::new();
        let b = ExampleId::new();
        assert_ne!(a, b);
        assert!(!a.is_blank());
    }

    #[test]
    fn opaque_ids_compare_by_exact_string() {
        assert_eq!(ExampleId::from_raw("1"), ExampleId::from("1"));
        assert_ne!(ExampleId::from_raw("1"), ExampleId::from_raw("01"));
    }

    #[test]
    fn serde_is_transparent() {
        let id = IdentityId::from_raw("abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: IdentityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
