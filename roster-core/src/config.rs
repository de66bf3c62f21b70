//! Configuration management
//!
//! Settings live in `settings.json` inside the roster directory:
//! ```json
//! {
//!   "app": { "demoMode": false },
//!   "directory": {
//!     "results": 12,
//!     "nationality": "us",
//!     "apiBaseUrl": "https://randomuser.me/api",
//!     "searchMode": "pattern"
//!   }
//! }
//! ```
//! Keys the CLI does not manage are preserved on save.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::adapters::randomuser::ROSTER_API_URL_ENV;
use crate::ports::{FetchRequest, DEFAULT_NATIONALITY, DEFAULT_RESULTS};
use crate::services::SearchMode;

/// Environment variable that forces demo mode on or off (for CI/testing)
pub const ROSTER_DEMO_MODE_ENV: &str = "ROSTER_DEMO_MODE";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(default)]
    directory: DirectorySettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DirectorySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    results: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search_mode: Option<SearchMode>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Roster configuration (resolved view of settings + environment)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub demo_mode: bool,
    pub results: usize,
    pub nationality: String,
    /// Explicit API base URL; `None` means the adapter default
    pub api_base_url: Option<String>,
    pub search_mode: SearchMode,
    /// Values the environment overrode; `save` keeps the file's own values for these
    #[serde(skip)]
    env_overrides: EnvOverrides,
}

#[derive(Debug, Clone, Copy, Default)]
struct EnvOverrides {
    demo_mode: bool,
    api_base_url: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_mode: false,
            results: DEFAULT_RESULTS,
            nationality: DEFAULT_NATIONALITY.to_string(),
            api_base_url: None,
            search_mode: SearchMode::default(),
            env_overrides: EnvOverrides::default(),
        }
    }
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("true" | "1" | "yes" | "TRUE" | "YES") => Some(true),
        Some("false" | "0" | "no" | "FALSE" | "NO") => Some(false),
        _ => None,
    }
}

fn read_settings(roster_dir: &Path) -> Result<SettingsFile> {
    let settings_path = roster_dir.join("settings.json");
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

impl Config {
    /// Load config from the roster directory
    ///
    /// `ROSTER_DEMO_MODE` overrides the demo flag and `ROSTER_API_URL`
    /// overrides the API base URL.
    pub fn load(roster_dir: &Path) -> Result<Self> {
        Self::load_with_env(roster_dir, |name| std::env::var(name).ok())
    }

    fn load_with_env(roster_dir: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw = read_settings(roster_dir)?;
        let defaults = Config::default();

        let env_api_url = env(ROSTER_API_URL_ENV).filter(|v| !v.trim().is_empty());
        let env_demo_mode = parse_flag(env(ROSTER_DEMO_MODE_ENV).as_deref());

        Ok(Self {
            demo_mode: env_demo_mode.unwrap_or(raw.app.demo_mode),
            results: raw
                .directory
                .results
                .filter(|n| *n > 0)
                .unwrap_or(defaults.results),
            nationality: raw
                .directory
                .nationality
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(defaults.nationality),
            env_overrides: EnvOverrides {
                demo_mode: env_demo_mode.is_some(),
                api_base_url: env_api_url.is_some(),
            },
            api_base_url: env_api_url.or(raw.directory.api_base_url),
            search_mode: raw.directory.search_mode.unwrap_or_default(),
        })
    }

    /// Save managed fields, preserving everything else in settings.json
    ///
    /// Values that came from the environment are not written back.
    pub fn save(&self, roster_dir: &Path) -> Result<()> {
        let settings_path = roster_dir.join("settings.json");
        let mut settings = read_settings(roster_dir)?;

        if !self.env_overrides.demo_mode {
            settings.app.demo_mode = self.demo_mode;
        }
        if !self.env_overrides.api_base_url {
            settings.directory.api_base_url = self.api_base_url.clone();
        }
        settings.directory.results = Some(self.results);
        settings.directory.nationality = Some(self.nationality.clone());
        settings.directory.search_mode = Some(self.search_mode);

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Parameters for the session's fetch
    pub fn fetch_request(&self) -> FetchRequest {
        FetchRequest {
            results: self.results,
            nationality: self.nationality.clone(),
        }
    }

    /// An explicit toggle is persisted even when the environment overrode the flag
    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
        self.env_overrides.demo_mode = false;
    }

    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
        self.env_overrides.demo_mode = false;
    }
}
