//! Session state machine.

use tracing::{info, warn};

use crate::{Identity, Role, SessionStore};

/// Derived snapshot of the current authentication state.
///
/// # Invariants
/// - `authenticated` is true iff `identity` is present.
/// - `role` is present iff `identity` is present, and equals `identity.role`.
///
/// The snapshot is always derived from the machine's identity; it is never
/// mutated independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub role: Option<Role>,
    pub authenticated: bool,
}

impl SessionState {
    fn derive(identity: Option<&Identity>) -> Self {
        Self {
            identity: identity.cloned(),
            role: identity.map(|i| i.role),
            authenticated: identity.is_some(),
        }
    }

    /// The anonymous state (no identity, no role).
    pub fn anonymous() -> Self {
        Self::derive(None)
    }
}

/// In-memory authoritative authentication state.
///
/// Two states: Anonymous (no identity) and Authenticated. The initial state
/// is resolved synchronously at construction from the persisted store, so
/// guard decisions never observe a half-initialized session. The machine has
/// no terminal state; it lives for the process and is re-derived fresh from
/// the store on each start.
#[derive(Debug)]
pub struct Session {
    store: SessionStore,
    identity: Option<Identity>,
}

impl Session {
    /// Construct the session, deriving the initial state from the store.
    pub fn restore(store: SessionStore) -> Self {
        let identity = store.load();
        Self { store, identity }
    }

    /// Transition to Authenticated.
    ///
    /// Credential verification is out of scope for this template: the
    /// password is accepted as-is and login always succeeds. A fresh identity
    /// is generated and persisted; a failed persist is logged and does not
    /// fail the login (the in-memory state stays authoritative).
    pub fn login(&mut self, email: impl Into<String>, _password: &str, role: Role) -> &Identity {
        let identity = Identity::new(email, role);
        if let Err(e) = self.store.save(Some(&identity)) {
            warn!(error = %e, "failed to persist session; continuing in-memory");
        }
        info!(role = %identity.role, "session authenticated");
        self.identity.insert(identity)
    }

    /// Transition to Anonymous, clearing the persisted record.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.save(None) {
            warn!(error = %e, "failed to clear persisted session");
        }
        if self.identity.take().is_some() {
            info!("session logged out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|i| i.role)
    }

    /// Derived snapshot for guard/navigation decisions.
    pub fn state(&self) -> SessionState {
        SessionState::derive(self.identity.as_ref())
    }

    /// Bearer credential derived from the current identity.
    ///
    /// Template semantics: a demo token tied to the identity id, standing in
    /// for a real token issued by an auth backend.
    pub fn token(&self) -> Option<String> {
        self.identity
            .as_ref()
            .map(|identity| format!("fake-token-{}", identity.id))
    }
}
