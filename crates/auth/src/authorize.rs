//! Role membership predicate.

use crate::Role;

/// Decide whether the current role may see a role-restricted surface.
///
/// - No IO
/// - No panics
/// - No business logic (pure membership check)
///
/// An absent role (anonymous session) is never allowed. This predicate is
/// only consulted when a restriction is declared; unrestricted surfaces are
/// gated on authentication alone (see [`crate::nav::NavItem::is_visible`]).
pub fn is_allowed(current: Option<Role>, allowed: &[Role]) -> bool {
    match current {
        Some(role) => allowed.contains(&role),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn absent_role_is_never_allowed() {
        assert!(!is_allowed(None, &[]));
        assert!(!is_allowed(None, &Role::ALL));
    }

    #[test]
    fn membership_decides_present_roles() {
        assert!(is_allowed(Some(Role::Admin), &[Role::Admin]));
        assert!(!is_allowed(Some(Role::User), &[Role::Admin]));
        assert!(is_allowed(Some(Role::Readonly), &[Role::User, Role::Readonly]));
        assert!(!is_allowed(Some(Role::Admin), &[]));
    }

    fn role_strategy() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::ALL.to_vec())
    }

    proptest! {
        /// Property: for every role and role set, the predicate is exactly
        /// set membership; absence is always denied.
        #[test]
        fn predicate_is_membership(
            role in role_strategy(),
            allowed in prop::collection::vec(role_strategy(), 0..4),
        ) {
            prop_assert_eq!(is_allowed(Some(role), &allowed), allowed.contains(&role));
            prop_assert!(!is_allowed(None, &allowed));
        }
    }
}
