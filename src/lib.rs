//! espira: a server-rendered blog front-end
//!
//! Pages are rendered on request from posts held in a PocketBase record
//! store. This crate holds the data-fetching layer (client, query
//! composition, projection), the Tera templates and the axum server.

pub mod backend;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod pages;
pub mod query;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// The main site application
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Static files directory
    pub public_dir: std::path::PathBuf,
    /// Lazily built backend client, shared by everything using this site
    pub backend: Arc<backend::ClientAccessor>,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };
        config.apply_env();

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from an already loaded configuration
    pub fn with_config(base_dir: std::path::PathBuf, config: config::SiteConfig) -> Self {
        let public_dir = base_dir.join(&config.public_dir);
        let backend = Arc::new(backend::ClientAccessor::new(config.backend_url.clone()));

        Self {
            config,
            base_dir,
            public_dir,
            backend,
        }
    }

    /// Post queries backed by the shared client
    pub fn queries(&self) -> query::PostQueries {
        query::PostQueries::new(self.backend.get())
    }
}
