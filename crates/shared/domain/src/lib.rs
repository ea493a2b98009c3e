//! # Domain Models
//!
//! Persisted entities and the results built from them. Types here only describe data; they
//! derive [`Structured`](squadup_structs::Structured) so they can be flattened into API
//! responses.

pub mod metadata;
pub mod user;

pub use metadata::TableMetadata;
pub use user::{LoginResult, User};
