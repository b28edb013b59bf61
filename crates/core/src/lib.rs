//! `skeletor-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod text;

pub use error::{DomainError, DomainResult};
pub use id::{ExampleId, IdentityId};
pub use text::{Description, Title};
