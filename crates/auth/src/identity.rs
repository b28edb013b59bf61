//! Authenticated identity record.

use serde::{Deserialize, Serialize};

use skeletor_core::IdentityId;

use crate::Role;

/// The authenticated user's id/email/role tuple.
///
/// Created on login with a freshly generated id; immutable once created
/// except by explicit re-login; cleared on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    pub email: String,
    pub role: Role,
}

impl Identity {
    /// Construct a fresh identity with a newly generated id.
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            id: IdentityId::new(),
            email: email.into(),
            role,
        }
    }

    /// Structural validation applied to records loaded from storage.
    ///
    /// Deserialization already enforces the shape and a known role; this
    /// rejects the degenerate records a permissive encoder could produce.
    pub fn is_structurally_valid(&self) -> bool {
        !self.id.is_blank() && !self.email.trim().is_empty()
    }
}
