//! Role-gated navigation items.

use crate::{Role, SessionState, is_allowed, routes};

/// A navigation entry with an optional role restriction.
///
/// Items without a restriction are visible to any authenticated session; the
/// role predicate is only consulted when `allowed_roles` is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub allowed_roles: Option<Vec<Role>>,
}

impl NavItem {
    pub fn open(path: &'static str, label: &'static str) -> Self {
        Self {
            path,
            label,
            allowed_roles: None,
        }
    }

    pub fn restricted(path: &'static str, label: &'static str, roles: Vec<Role>) -> Self {
        Self {
            path,
            label,
            allowed_roles: Some(roles),
        }
    }

    pub fn is_visible(&self, state: &SessionState) -> bool {
        if !state.authenticated {
            return false;
        }
        match &self.allowed_roles {
            Some(roles) => is_allowed(state.role, roles),
            None => true,
        }
    }
}

/// The template's default sidebar: Dashboard and Example for everyone,
/// Admin restricted to the admin role.
pub fn default_nav() -> Vec<NavItem> {
    vec![
        NavItem::open(routes::DASHBOARD, "Dashboard"),
        NavItem::open(routes::EXAMPLE, "Example"),
        NavItem::restricted(routes::ADMIN, "Admin", vec![Role::Admin]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Identity;

    fn state_with_role(role: Role) -> SessionState {
        SessionState {
            identity: Some(Identity::new("a@example.com", role)),
            role: Some(role),
            authenticated: true,
        }
    }

    #[test]
    fn nothing_is_visible_to_an_anonymous_session() {
        let state = SessionState::anonymous();
        assert!(default_nav().iter().all(|item| !item.is_visible(&state)));
    }

    #[test]
    fn unrestricted_items_are_visible_to_every_role() {
        for role in Role::ALL {
            let state = state_with_role(role);
            assert!(NavItem::open(routes::DASHBOARD, "Dashboard").is_visible(&state));
        }
    }

    #[test]
    fn admin_item_is_visible_only_to_admins() {
        let nav = default_nav();
        let admin_item = nav.iter().find(|i| i.path == routes::ADMIN).unwrap();

        assert!(admin_item.is_visible(&state_with_role(Role::Admin)));
        assert!(!admin_item.is_visible(&state_with_role(Role::User)));
        assert!(!admin_item.is_visible(&state_with_role(Role::Readonly)));
    }
}
