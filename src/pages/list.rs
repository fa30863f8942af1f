//! Article list page

use crate::query::PostQuery;
use crate::templates::PaginationData;

use super::{PageError, Pages};

impl Pages {
    /// Render `/blog?page=N`
    pub async fn blog(&self, page: u32) -> Result<String, PageError> {
        let query = PostQuery::new().page(page).per_page(self.config.per_page);
        let result = self.queries.list_posts(&query).await?;

        let pagination = PaginationData {
            current: result.page,
            total: result.total_pages,
            prev_link: result.has_prev().then(|| page_link(result.page - 1)),
            next_link: result.has_next().then(|| page_link(result.page + 1)),
        };

        let mut context = self.base_context("/blog");
        context.insert(
            "posts",
            &result
                .items
                .iter()
                .map(|p| self.post_data(p))
                .collect::<Vec<_>>(),
        );
        context.insert("pagination", &pagination);

        Ok(self.renderer.render("blog.html", &context)?)
    }
}

fn page_link(page: u32) -> String {
    if page <= 1 {
        "/blog".to_string()
    } else {
        format!("/blog?page={}", page)
    }
}
