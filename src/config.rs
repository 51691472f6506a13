//! Configuration handling for the site

use crate::error::SiteError;
use crate::state::{SectionId, DEFAULT_MENU_BREAKPOINT};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Overrides the configured form action
pub const FORM_ACTION_ENV: &str = "ZANAKI_FORM_ACTION";
/// Overrides the configured site URL
pub const SITE_URL_ENV: &str = "ZANAKI_SITE_URL";
/// Overrides the section shown once the page is ready
pub const START_SECTION_ENV: &str = "ZANAKI_START_SECTION";

/// User configuration for the site
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// URL the contact form posts to
    pub form_action: Option<String>,
    /// Base URL of the published site (offline worker lives under it)
    pub site_url: Option<String>,
    /// Terminal width below which the nav collapses into a menu
    pub menu_breakpoint: Option<u16>,
    /// Start straight on the page without the logo screen
    pub skip_loading_screen: Option<bool>,
    /// Section id (`"about"`, `"contact"`, ...) to open once the page is ready
    pub start_section: Option<String>,
}

impl SiteConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("tz", "zanaki", "zanaki-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                config = Self::parse(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
            }
        }

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Parse a config document
    pub fn parse(content: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(action) = lookup(FORM_ACTION_ENV).filter(|v| !v.trim().is_empty()) {
            self.form_action = Some(action);
        }
        if let Some(url) = lookup(SITE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.site_url = Some(url);
        }
        if let Some(section) = lookup(START_SECTION_ENV).filter(|v| !v.trim().is_empty()) {
            self.start_section = Some(section);
        }
        self
    }

    pub fn menu_breakpoint(&self) -> u16 {
        self.menu_breakpoint.unwrap_or(DEFAULT_MENU_BREAKPOINT)
    }

    pub fn skip_loading_screen(&self) -> bool {
        self.skip_loading_screen.unwrap_or(false)
    }

    /// Configured start section. An unknown id is logged and ignored.
    pub fn start_section(&self) -> Option<SectionId> {
        let raw = self.start_section.as_deref()?;
        match raw.trim().to_ascii_lowercase().parse() {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring start section");
                None
            }
        }
    }

    /// Where the offline worker script would be served from
    pub fn worker_url(&self) -> Option<String> {
        self.site_url
            .as_deref()
            .map(|base| format!("{}/sw.js", base.trim_end_matches('/')))
    }
}
