//! Page renderers
//!
//! Each page pulls its data through [`PostQueries`] and renders it with the
//! shared templates. Rendering is independent of HTTP so the views can be
//! exercised without a server; the server maps [`PageError`] to a status.

mod detail;
mod home;
mod list;

use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use std::error::Error as _;
use tera::Context;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{date_xml, format_date, reading_time};
use crate::query::{FetchError, PostQueries};
use crate::templates::{ConfigData, MenuItem, PostData, TemplateRenderer};

/// Why a page could not be rendered
#[derive(Debug, Error)]
pub enum PageError {
    #[error("page not found")]
    NotFound,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to render page")]
    Render(#[from] anyhow::Error),
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Fetch(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Everything a page needs: data access, templates and site settings
pub struct Pages {
    queries: PostQueries,
    renderer: TemplateRenderer,
    config: SiteConfig,
}

impl Pages {
    pub fn new(queries: PostQueries, renderer: TemplateRenderer, config: SiteConfig) -> Self {
        Self {
            queries,
            renderer,
            config,
        }
    }

    /// The 404 page
    pub fn not_found(&self) -> Result<String, PageError> {
        let context = self.base_context("");
        Ok(self.renderer.render("not_found.html", &context)?)
    }

    /// The generic error page, with a retry link back to `path`
    pub fn error(&self, path: &str) -> Result<String, PageError> {
        let mut context = self.base_context("");
        context.insert("retry_path", path);
        Ok(self.renderer.render("error.html", &context)?)
    }

    /// Status and body to send for a failed page at `path`
    pub fn failure(&self, err: &PageError, path: &str) -> (StatusCode, String) {
        let status = err.status();
        let body = match err {
            PageError::NotFound => {
                tracing::debug!("Not found: {}", path);
                self.not_found()
            }
            _ => {
                tracing::error!("Failed to render {}: {}", path, error_chain(err));
                self.error(path)
            }
        };

        match body {
            Ok(html) => (status, html),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                (status, status.canonical_reason().unwrap_or("Error").to_string())
            }
        }
    }

    fn base_context(&self, active: &str) -> Context {
        let mut context = Context::new();
        context.insert(
            "config",
            &ConfigData {
                title: self.config.title.clone(),
                description: self.config.description.clone(),
            },
        );
        context.insert("menu", &menu());
        context.insert("active", active);
        context.insert("year", &Utc::now().year());
        context
    }

    fn post_data(&self, post: &Post) -> PostData {
        PostData {
            id: post.id.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            path: post.path(),
            cover_url: post.cover_url.clone(),
            date: format_date(&post.created, &self.config.date_format),
            datetime: date_xml(&post.created),
            author: post
                .author()
                .map(|a| a.name.clone())
                .filter(|name| !name.is_empty()),
            reading_time: reading_time(&post.content),
        }
    }
}

fn menu() -> Vec<MenuItem> {
    [("Blog", "/blog"), ("About", "/about"), ("Contact", "/contact")]
        .into_iter()
        .map(|(name, path)| MenuItem {
            name: name.to_string(),
            path: path.to_string(),
        })
        .collect()
}

/// Join an error and its sources for the log
fn error_chain(err: &PageError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
