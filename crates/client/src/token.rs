//! Bearer credential sources.

use std::sync::{Arc, RwLock};

use skeletor_auth::Session;

/// Supplies the bearer credential attached to outgoing requests.
///
/// `None` means the request goes out unauthenticated (anonymous session).
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Token source that never supplies a credential.
#[derive(Debug, Default)]
pub struct NoToken;

impl TokenSource for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Token source wired to a shared session.
///
/// The token is re-derived per request, so login/logout take effect on the
/// next call without re-wiring the client.
#[derive(Clone)]
pub struct SessionTokenSource {
    session: Arc<RwLock<Session>>,
}

impl SessionTokenSource {
    pub fn new(session: Arc<RwLock<Session>>) -> Self {
        Self { session }
    }
}

impl TokenSource for SessionTokenSource {
    fn token(&self) -> Option<String> {
        self.session
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skeletor_auth::{Role, SessionStore};
    use skeletor_store::MemoryStore;

    #[test]
    fn session_token_tracks_login_and_logout() {
        let kv = Arc::new(MemoryStore::new());
        let session = Arc::new(RwLock::new(Session::restore(SessionStore::new(kv))));
        let source = SessionTokenSource::new(session.clone());

        assert_eq!(source.token(), None);

        session
            .write()
            .unwrap()
            .login("a@example.com", "pw", Role::User);
        let token = source.token().unwrap();
        assert!(token.starts_with("fake-token-"));

        session.write().unwrap().logout();
        assert_eq!(source.token(), None);
    }
}
