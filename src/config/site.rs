//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides `backend_url`
pub const BACKEND_URL_ENV: &str = "POCKETBASE_URL";

/// Backend address used when nothing is configured
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8090";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,

    // Backend
    pub backend_url: String,

    // Listing
    pub per_page: u32,
    pub latest_limit: u32,
    pub related_limit: u32,

    // Date format (Moment.js style)
    pub date_format: String,

    // Directory
    pub public_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "espira".to_string(),
            description: "News, tips and insights from our team of experts.".to_string(),

            backend_url: DEFAULT_BACKEND_URL.to_string(),

            per_page: 10,
            latest_limit: 4,
            related_limit: 2,

            date_format: "MMMM D, YYYY".to_string(),

            public_dir: "public".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_backend_override(std::env::var(BACKEND_URL_ENV).ok());
    }

    fn apply_backend_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|url| !url.trim().is_empty()) {
            tracing::debug!("Backend url overridden by {}: {}", BACKEND_URL_ENV, url);
            self.backend_url = url;
        }
    }
}
