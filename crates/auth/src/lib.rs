//! `skeletor-auth` — session and authorization boundary.
//!
//! This crate owns the one piece of the template with real invariants: who is
//! authenticated, what role they carry, how that state persists across
//! restarts, and how it gates navigation. It is intentionally decoupled from
//! HTTP and rendering.

pub mod authorize;
pub mod guard;
pub mod identity;
pub mod nav;
pub mod role;
pub mod routes;
pub mod session;
pub mod session_store;

pub use authorize::is_allowed;
pub use guard::{GuardOutcome, guard, post_login_target};
pub use identity::Identity;
pub use nav::NavItem;
pub use role::Role;
pub use session::{Session, SessionState};
pub use session_store::SessionStore;
