//! PocketBase REST client

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{Backend, BackendError, ListParams, Record, RecordList};

/// Error body returned by PocketBase for non-success statuses
#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

/// HTTP handle to a PocketBase instance
///
/// Holds no per-request state; clones of the inner `reqwest::Client` share
/// one connection pool, so a single handle serves the whole process.
#[derive(Debug, Clone)]
pub struct PocketBase {
    base_url: String,
    http: reqwest::Client,
}

impl PocketBase {
    /// Create a client for the given base address. Never fails; connection
    /// problems surface when a call is made.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn records_url(&self, collection: &str) -> String {
        format!(
            "{}/api/collections/{}/records",
            self.base_url,
            encode_segment(collection)
        )
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, BackendError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        let message = serde_json::from_slice::<ApiError>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());

        Err(match status {
            StatusCode::NOT_FOUND => BackendError::NotFound(message),
            StatusCode::BAD_REQUEST => BackendError::MalformedQuery(message),
            _ => BackendError::Unexpected {
                status: status.as_u16(),
                message,
            },
        })
    }
}

#[async_trait]
impl Backend for PocketBase {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list(
        &self,
        collection: &str,
        params: &ListParams,
    ) -> Result<RecordList, BackendError> {
        let mut query = vec![
            ("page", params.page.to_string()),
            ("perPage", params.per_page.to_string()),
        ];
        let optional = [
            ("sort", &params.sort),
            ("filter", &params.filter),
            ("expand", &params.expand),
        ];
        for (key, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                query.push((key, value.to_string()));
            }
        }

        tracing::debug!("GET {} list {:?}", collection, query);
        let request = self.http.get(self.records_url(collection)).query(&query);
        self.send(request).await
    }

    async fn get_one(
        &self,
        collection: &str,
        id: &str,
        expand: Option<&str>,
    ) -> Result<Record, BackendError> {
        let url = format!("{}/{}", self.records_url(collection), encode_segment(id));
        let mut request = self.http.get(url);
        if let Some(expand) = expand.filter(|e| !e.is_empty()) {
            request = request.query(&[("expand", expand)]);
        }

        tracing::debug!("GET {} record {}", collection, id);
        self.send(request).await
    }
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}
