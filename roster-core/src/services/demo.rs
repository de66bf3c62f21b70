//! Demo service - manage demo mode
//!
//! Demo mode swaps the randomuser.me client for the seeded offline
//! generator, so the directory works without network access.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::Config;

/// Demo service for managing demo mode
pub struct DemoService {
    roster_dir: PathBuf,
}

impl DemoService {
    pub fn new(roster_dir: &Path) -> Self {
        Self {
            roster_dir: roster_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.roster_dir)?;
        Ok(config.demo_mode)
    }

    pub fn enable(&self) -> Result<()> {
        let mut config = Config::load(&self.roster_dir).unwrap_or_default();
        config.enable_demo_mode();
        config.save(&self.roster_dir)
    }

    pub fn disable(&self) -> Result<()> {
        let mut config = Config::load(&self.roster_dir).unwrap_or_default();
        config.disable_demo_mode();
        config.save(&self.roster_dir)
    }
}
