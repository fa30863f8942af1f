//! Backend resource API
//!
//! The blog never stores anything itself: posts and users live in a
//! PocketBase-style record store exposing per-collection `list` and
//! `get_one` calls plus a file-serving convention for uploaded assets.
//! [`Backend`] is the seam page renderers depend on; [`PocketBase`] is the
//! HTTP implementation and [`ClientAccessor`] memoizes it per process.

mod accessor;
mod client;
mod error;
#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;
use serde::Deserialize;

pub use accessor::ClientAccessor;
pub use client::PocketBase;
pub use error::{BackendError, ErrorKind};

/// A raw record as returned by the backend
pub type Record = serde_json::Value;

/// Parameters of a single list call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub per_page: u32,
    pub sort: Option<String>,
    pub filter: Option<String>,
    pub expand: Option<String>,
}

/// One page of records plus totals over the whole filtered set
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordList {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub items: Vec<Record>,
}

/// Generic record-store operations
#[async_trait]
pub trait Backend: Send + Sync {
    /// Base address the backend is served from
    fn base_url(&self) -> &str;

    /// List records of a collection
    async fn list(&self, collection: &str, params: &ListParams)
        -> Result<RecordList, BackendError>;

    /// Fetch one record by id
    async fn get_one(
        &self,
        collection: &str,
        id: &str,
        expand: Option<&str>,
    ) -> Result<Record, BackendError>;
}

/// Build the public URL of a file attached to a record
///
/// # Examples
/// ```ignore
/// file_url("http://127.0.0.1:8090", "pbc_1", "abc", "cover.png")
/// // -> "http://127.0.0.1:8090/api/files/pbc_1/abc/cover.png"
/// ```
pub fn file_url(base_url: &str, collection_id: &str, record_id: &str, filename: &str) -> String {
    format!(
        "{}/api/files/{}/{}/{}",
        base_url.trim_end_matches('/'),
        collection_id,
        record_id,
        filename
    )
}
