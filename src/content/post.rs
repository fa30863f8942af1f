//! Post and author records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::datetime;

/// A blog post as stored in the `posts` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Record id
    pub id: String,

    /// Id of the collection the record belongs to (used in file URLs)
    #[serde(default)]
    pub collection_id: String,

    #[serde(default)]
    pub collection_name: String,

    /// Id of the authoring user
    #[serde(default)]
    pub author: String,

    pub title: String,

    #[serde(default)]
    pub excerpt: String,

    /// Stored cover filename, empty when no cover was uploaded
    #[serde(default)]
    pub cover: String,

    /// HTML body
    #[serde(default)]
    pub content: String,

    #[serde(with = "datetime")]
    pub created: DateTime<Utc>,

    #[serde(with = "datetime")]
    pub updated: DateTime<Utc>,

    /// Related records included by the `expand` query option
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand: Option<PostExpand>,

    /// Fully-qualified cover URL, attached by projection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl Post {
    /// The expanded author, if the query asked for it and it exists
    pub fn author(&self) -> Option<&Author> {
        self.expand.as_ref()?.author.as_ref()
    }

    /// Site path of the post's detail page
    pub fn path(&self) -> String {
        format!("/blog/{}", self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostExpand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

/// A user record from the `users` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,

    #[serde(default)]
    pub collection_id: String,

    #[serde(default)]
    pub collection_name: String,

    /// Only present when the user made it visible
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub email_visibility: bool,

    #[serde(default)]
    pub verified: bool,

    #[serde(default)]
    pub name: String,

    /// Stored avatar filename
    #[serde(default)]
    pub avatar: String,

    #[serde(default, with = "datetime")]
    pub created: DateTime<Utc>,

    #[serde(default, with = "datetime")]
    pub updated: DateTime<Utc>,

    /// Fully-qualified avatar URL, attached by projection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}
