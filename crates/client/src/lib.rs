//! `skeletor-client` — authenticated JSON HTTP boundary.
//!
//! A thin client that attaches a bearer credential derived from the current
//! session, plus an HTTP-backed [`skeletor_example::ExampleRepository`]
//! implementation proving the four-operation contract substitutable for the
//! local-storage stand-in.

pub mod error;
pub mod http;
pub mod remote;
pub mod token;

pub use error::{ApiError, ClientError};
pub use http::HttpClient;
pub use remote::HttpExampleRepository;
pub use token::{NoToken, SessionTokenSource, TokenSource};
