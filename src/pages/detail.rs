//! Single article page

use crate::backend::ErrorKind;

use super::{PageError, Pages};

impl Pages {
    /// Render `/blog/{id}`
    ///
    /// A post that does not exist (or an id the backend refuses to look up)
    /// is a 404, not a server error.
    pub async fn post(&self, id: &str) -> Result<String, PageError> {
        let (post, related) = tokio::join!(
            self.queries.get_post(id),
            self.queries.get_related_posts(id, self.config.related_limit),
        );

        let post = post.map_err(|err| match err.kind() {
            ErrorKind::NotFound | ErrorKind::MalformedQuery => PageError::NotFound,
            _ => PageError::Fetch(err),
        })?;
        let related = related?;

        let mut context = self.base_context("/blog");
        context.insert("post", &self.post_data(&post));
        context.insert(
            "related",
            &related.iter().map(|p| self.post_data(p)).collect::<Vec<_>>(),
        );

        Ok(self.renderer.render("post.html", &context)?)
    }
}
