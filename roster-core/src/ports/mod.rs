//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

mod user_source;

pub use user_source::{FetchRequest, UserSource, DEFAULT_NATIONALITY, DEFAULT_RESULTS};
