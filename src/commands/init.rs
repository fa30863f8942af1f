//! Initialize a new site directory

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="30" viewBox="0 0 100 30"><text x="0" y="22" font-family="sans-serif" font-size="22" font-weight="700" fill="#16a34a">espira</text></svg>
"##;

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="600" viewBox="0 0 1200 600" preserveAspectRatio="xMidYMid slice"><rect width="1200" height="600" fill="#e5e7eb"/><path d="M520 380l80-100 60 70 40-45 80 75z" fill="#cbd5e1"/></svg>
"##;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("public"))?;

    let config_content = r#"# espira configuration

# Site
title: espira
description: News, tips and insights from our team of experts.

# Backend (overridden by POCKETBASE_URL)
backend_url: http://127.0.0.1:8090

# Listing
per_page: 10
latest_limit: 4
related_limit: 2

# Date format
date_format: MMMM D, YYYY

# Directory
public_dir: public
"#;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, config_content)?;
    }

    fs::write(target_dir.join("public/logo.svg"), LOGO_SVG)?;
    fs::write(target_dir.join("public/placeholder.svg"), PLACEHOLDER_SVG)?;

    Ok(())
}
