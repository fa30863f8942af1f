use std::sync::Arc;

use crate::backend::{Backend, BackendError, RecordList};
use crate::content::{project_post, Post};

use super::{FetchError, Filter, PagedResult, PostQuery, Sort, DEFAULT_EXPAND};

/// Collection holding blog posts
pub const POSTS: &str = "posts";

/// Read operations on blog posts
#[derive(Clone)]
pub struct PostQueries {
    backend: Arc<dyn Backend>,
}

impl PostQueries {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// List posts with exactly the given page, sort, filter and expansion.
    /// Results are passed through as the backend returned them.
    pub async fn list_posts(&self, query: &PostQuery) -> Result<PagedResult<Post>, FetchError> {
        self.list(query)
            .await
            .map_err(|e| FetchError::new("posts", e))
    }

    /// The newest post, if there is any
    pub async fn get_featured_post(&self) -> Result<Option<Post>, FetchError> {
        let query = PostQuery::new().per_page(1).sort(Sort::newest_first());

        let result = self
            .list(&query)
            .await
            .map_err(|e| FetchError::new("featured post", e))?;
        Ok(result.items.into_iter().next())
    }

    /// Newest posts, optionally leaving one out (usually the featured post)
    pub async fn get_latest_posts(
        &self,
        exclude_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Post>, FetchError> {
        self.recent_excluding(exclude_id, limit)
            .await
            .map_err(|e| FetchError::new("latest posts", e))
    }

    /// Posts to suggest below an article.
    ///
    /// This is the latest-posts query minus the current post; it does not
    /// look at content similarity.
    pub async fn get_related_posts(
        &self,
        current_id: &str,
        limit: u32,
    ) -> Result<Vec<Post>, FetchError> {
        self.recent_excluding(Some(current_id), limit)
            .await
            .map_err(|e| FetchError::new("related posts", e))
    }

    /// A single post with its author expanded
    pub async fn get_post(&self, id: &str) -> Result<Post, FetchError> {
        self.one(id)
            .await
            .map_err(|e| FetchError::new("post", e))
    }

    async fn recent_excluding(
        &self,
        exclude_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Post>, BackendError> {
        let mut query = PostQuery::new().per_page(limit).sort(Sort::newest_first());
        if let Some(id) = exclude_id {
            query = query.filter(Filter::not_eq("id", id));
        }

        Ok(self.list(&query).await?.items)
    }

    async fn list(&self, query: &PostQuery) -> Result<PagedResult<Post>, BackendError> {
        let RecordList {
            page,
            per_page,
            total_items,
            total_pages,
            items,
        } = self.backend.list(POSTS, &query.to_params()).await?;

        let items = items
            .into_iter()
            .map(|record| self.decode(record))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PagedResult {
            page,
            per_page,
            total_items,
            total_pages,
            items,
        })
    }

    async fn one(&self, id: &str) -> Result<Post, BackendError> {
        let record = self
            .backend
            .get_one(POSTS, id, Some(DEFAULT_EXPAND))
            .await?;
        self.decode(record)
    }

    fn decode(&self, record: serde_json::Value) -> Result<Post, BackendError> {
        let post: Post = serde_json::from_value(record)?;
        Ok(project_post(post, self.backend.base_url()))
    }
}
