//! Roster Core - Business logic for the employee directory
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core entities (raw and normalized users, errors)
//! - **ports**: Trait definitions for external dependencies (UserSource)
//! - **services**: Directory logic (normalize, store, search, navigate, render, route)
//! - **adapters**: Concrete implementations (randomuser.me, offline demo)

pub mod domain;
pub mod ports;
pub mod services;
pub mod adapters;
pub mod config;
mod log_migrations;

use std::path::{Path, PathBuf};

use anyhow::Result;

use adapters::demo::DemoUserSource;
use adapters::randomuser::RandomUserClient;
use config::Config;
use ports::{FetchRequest, UserSource};

// Re-export commonly used types at crate root
pub use domain::{Direction, RawUser, StreetAddress, UserRecord};
pub use domain::result::{Error, OperationResult};
pub use services::{
    DirectoryEvent, DirectoryLifecycle, DirectorySession, DirectoryStore, GridView, LogEntry,
    LogEvent, LoggingService, ModalView, SearchMode, ViewUpdate,
};

/// Main context for Roster operations
///
/// Resolves configuration and picks the user source a session fetches from.
pub struct RosterContext {
    pub config: Config,
    roster_dir: PathBuf,
}

impl RosterContext {
    pub fn new(roster_dir: &Path) -> Result<Self> {
        let config = Config::load(roster_dir)?;
        Ok(Self {
            config,
            roster_dir: roster_dir.to_path_buf(),
        })
    }

    pub fn roster_dir(&self) -> &Path {
        &self.roster_dir
    }

    /// The configured source: the seeded generator in demo mode, randomuser.me otherwise
    pub fn user_source(&self) -> Result<Box<dyn UserSource>> {
        if self.config.demo_mode {
            return Ok(Box::new(DemoUserSource::default()));
        }
        let client = match &self.config.api_base_url {
            Some(url) => RandomUserClient::new_with_base_url(url)?,
            None => RandomUserClient::new()?,
        };
        Ok(Box::new(client))
    }

    pub fn fetch_request(&self) -> FetchRequest {
        self.config.fetch_request()
    }

    /// A fresh session in the configured search mode
    pub fn new_session(&self) -> DirectorySession {
        DirectorySession::new(self.config.search_mode)
    }
}
