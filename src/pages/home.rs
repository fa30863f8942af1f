//! Home page: featured post plus the latest articles

use super::{PageError, Pages};

impl Pages {
    /// Render `/`
    pub async fn home(&self) -> Result<String, PageError> {
        let featured = self.queries.get_featured_post().await?;
        let latest = self
            .queries
            .get_latest_posts(
                featured.as_ref().map(|p| p.id.as_str()),
                self.config.latest_limit,
            )
            .await?;

        let mut context = self.base_context("/");
        context.insert("featured", &featured.as_ref().map(|p| self.post_data(p)));
        context.insert(
            "latest",
            &latest.iter().map(|p| self.post_data(p)).collect::<Vec<_>>(),
        );

        Ok(self.renderer.render("home.html", &context)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::memory::MemoryBackend;
    use crate::pages::tests::{pages, sample_backend};
    use crate::pages::PageError;

    #[tokio::test]
    async fn test_home_features_newest_and_lists_the_rest() {
        let html = pages(sample_backend()).home().await.unwrap();

        let featured = html.find(r#"class="featured-post""#).unwrap();
        let latest = html.find("Latest articles").unwrap();
        let newest = html.find("Title t3").unwrap();
        let second = html.find("Title t2").unwrap();
        let oldest = html.find("Title t1").unwrap();
        assert!(featured < newest && newest < latest);
        assert!(latest < second && second < oldest);
        assert_eq!(html.matches(r#"href="/blog/t3""#).count(), 2);
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("March 5, 2024"));
        assert!(html.contains("/placeholder.svg?height=400&width=600"));
    }

    #[tokio::test]
    async fn test_home_with_no_posts() {
        let html = pages(MemoryBackend::new()).home().await.unwrap();
        assert!(!html.contains("Featured"));
        assert!(html.contains("No articles yet."));
    }

    #[tokio::test]
    async fn test_home_backend_down_is_an_error() {
        let err = pages(MemoryBackend::offline()).home().await.unwrap_err();
        assert!(matches!(err, PageError::Fetch(_)));
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
