//! List posts held by the backend

use anyhow::Result;

use crate::query::{PostQuery, Sort};
use crate::Site;

/// Print one page of posts in the given order
pub async fn run(site: &Site, page: u32, per_page: u32, sort: Sort) -> Result<()> {
    let query = PostQuery::new().page(page).per_page(per_page).sort(sort);
    let result = site.queries().list_posts(&query).await?;

    println!(
        "Posts ({} total, page {}/{}):",
        result.total_items,
        result.page,
        result.total_pages.max(1)
    );
    for post in &result.items {
        println!(
            "  {} - {} [{}] by {}",
            post.created.format("%Y-%m-%d"),
            post.title,
            post.id,
            post.author().map(|a| a.name.as_str()).unwrap_or("Anonymous")
        );
    }

    Ok(())
}
