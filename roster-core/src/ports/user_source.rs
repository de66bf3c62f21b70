//! User source port
//!
//! Defines the interface for fetching the raw batch of users that populates
//! the directory (randomuser.me, offline demo data, etc.)

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::RawUser;

/// Default batch size requested from a source
pub const DEFAULT_RESULTS: usize = 12;

/// Default nationality filter
pub const DEFAULT_NATIONALITY: &str = "us";

/// Parameters of the one fetch issued per session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub results: usize,
    pub nationality: String,
}

impl Default for FetchRequest {
    fn default() -> Self {
        Self {
            results: DEFAULT_RESULTS,
            nationality: DEFAULT_NATIONALITY.to_string(),
        }
    }
}

/// User source trait
///
/// Implementations return the raw batch in response order. The session
/// calls `fetch_users` exactly once and never retries.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Source name (e.g., "randomuser", "demo")
    fn name(&self) -> &str;

    /// Fetch one batch of raw users
    async fn fetch_users(&self, request: &FetchRequest) -> Result<Vec<RawUser>>;
}
