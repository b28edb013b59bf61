//! Route guard: session state to allow/redirect decisions.

use crate::{SessionState, routes};

/// Outcome of a guard decision.
///
/// The guard does not navigate; the surrounding routing layer interprets the
/// outcome. `Redirect` preserves the origin path so a subsequent login can
/// return the caller to where they were headed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested subtree.
    Allow,
    /// Send the caller to the login route, remembering where they came from.
    Redirect {
        to: &'static str,
        from: String,
    },
}

/// Decide whether navigation to `path` is permitted.
///
/// Allow iff the session is authenticated; anything else (including a session
/// restored from missing or corrupt storage) redirects to login. Never fails.
pub fn guard(state: &SessionState, path: &str) -> GuardOutcome {
    if state.authenticated {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect {
            to: routes::LOGIN,
            from: path.to_string(),
        }
    }
}

/// Resolve the destination after a successful login.
///
/// A preserved origin wins; otherwise fall back to the dashboard.
pub fn post_login_target(preserved: Option<&str>) -> &str {
    preserved.unwrap_or(routes::DASHBOARD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Identity, Role};

    fn authenticated_state() -> SessionState {
        SessionState {
            identity: Some(Identity::new("a@example.com", Role::User)),
            role: Some(Role::User),
            authenticated: true,
        }
    }

    #[test]
    fn anonymous_session_redirects_any_path() {
        let state = SessionState::anonymous();
        for path in [routes::DASHBOARD, routes::EXAMPLE, "/app/anything"] {
            match guard(&state, path) {
                GuardOutcome::Redirect { to, from } => {
                    assert_eq!(to, routes::LOGIN);
                    assert_eq!(from, path);
                }
                GuardOutcome::Allow => panic!("Expected Redirect for {path}"),
            }
        }
    }

    #[test]
    fn authenticated_session_allows_any_path() {
        let state = authenticated_state();
        for path in [routes::DASHBOARD, routes::EXAMPLE, routes::ADMIN] {
            assert_eq!(guard(&state, path), GuardOutcome::Allow);
        }
    }

    #[test]
    fn post_login_prefers_the_preserved_origin() {
        assert_eq!(post_login_target(Some(routes::EXAMPLE)), routes::EXAMPLE);
        assert_eq!(post_login_target(None), routes::DASHBOARD);
    }

    #[test]
    fn redirect_preserves_origin_for_post_login_navigation() {
        let state = SessionState::anonymous();
        let GuardOutcome::Redirect { from, .. } = guard(&state, "/app/example/7") else {
            panic!("Expected Redirect");
        };
        assert_eq!(post_login_target(Some(&from)), "/app/example/7");
    }
}
