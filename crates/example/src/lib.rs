//! `skeletor-example` — the example CRUD feature's data layer.
//!
//! A four-operation repository contract (`list`/`get`/`create`/`update`) over
//! a collection of example records, with a durable local-storage
//! implementation standing in for a real backend. Consumers depend only on
//! the [`ExampleRepository`] trait so the backing can be swapped without
//! touching callers.

pub mod item;
pub mod local;
pub mod payload;
pub mod repository;

pub use item::ExampleItem;
pub use local::LocalExampleRepository;
pub use payload::{CreateExample, UpdateExample};
pub use repository::{ExampleRepository, ListParams, RepositoryError};
