//! Built-in site templates using Tera template engine
//!
//! Every page extends `layout.html`, which owns the header, navigation and
//! footer, so the page templates only fill in their main content.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Paths and asset URLs go out verbatim; free text is escaped in the
        // templates with `| escape`, and post bodies are trusted HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("espira/layout.html")),
            ("home.html", include_str!("espira/home.html")),
            ("blog.html", include_str!("espira/blog.html")),
            ("post.html", include_str!("espira/post.html")),
            ("not_found.html", include_str!("espira/not_found.html")),
            ("error.html", include_str!("espira/error.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("espira/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("espira/partials/footer.html"),
            ),
            (
                "partials/post_card.html",
                include_str!("espira/partials/post_card.html"),
            ),
            (
                "partials/pager.html",
                include_str!("espira/partials/pager.html"),
            ),
        ])?;

        tera.register_filter("placeholder", placeholder_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: substitute a sized placeholder image for a missing cover
///
/// `{{ post.cover_url | placeholder(width=600, height=400) }}`
fn placeholder_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    if let Some(url) = value.as_str().filter(|url| !url.is_empty()) {
        return Ok(tera::Value::String(url.to_string()));
    }

    let width = match args.get("width") {
        Some(val) => tera::try_get_value!("placeholder", "width", u32, val),
        None => 400,
    };
    let height = match args.get("height") {
        Some(val) => tera::try_get_value!("placeholder", "height", u32, val),
        None => 300,
    };

    Ok(tera::Value::String(format!(
        "/placeholder.svg?height={}&width={}",
        height, width
    )))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub path: String,
    pub cover_url: Option<String>,
    pub date: String,
    pub datetime: String,
    pub author: Option<String>,
    pub reading_time: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationData {
    pub current: u32,
    pub total: u32,
    pub prev_link: Option<String>,
    pub next_link: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_filter() {
        let mut args = HashMap::new();
        args.insert("width".to_string(), tera::Value::from(600));
        args.insert("height".to_string(), tera::Value::from(400));

        let missing = placeholder_filter(&tera::Value::Null, &args).unwrap();
        assert_eq!(missing, "/placeholder.svg?height=400&width=600");

        let present = placeholder_filter(&tera::Value::from("http://x/y.png"), &args).unwrap();
        assert_eq!(present, "http://x/y.png");
    }

    #[test]
    fn test_templates_load() {
        assert!(TemplateRenderer::new().is_ok());
    }
}
