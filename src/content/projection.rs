//! Post projection: raw records to display-ready posts

use crate::backend::file_url;

use super::{Author, Post};

/// Attach fully-qualified asset URLs to a post
///
/// A non-empty `cover` becomes `cover_url`; an empty one leaves `cover_url`
/// unset so the renderer can pick its own placeholder. The expanded author
/// gets the same treatment for its avatar. Projecting twice is a no-op.
pub fn project_post(mut post: Post, base_url: &str) -> Post {
    post.cover_url = asset_url(base_url, &post.collection_id, &post.id, &post.cover);

    if let Some(author) = post.expand.as_mut().and_then(|e| e.author.as_mut()) {
        project_author(author, base_url);
    }

    post
}

fn project_author(author: &mut Author, base_url: &str) {
    author.avatar_url = asset_url(base_url, &author.collection_id, &author.id, &author.avatar);
}

fn asset_url(base_url: &str, collection_id: &str, record_id: &str, filename: &str) -> Option<String> {
    if filename.is_empty() {
        None
    } else {
        Some(file_url(base_url, collection_id, record_id, filename))
    }
}
