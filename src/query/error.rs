use thiserror::Error;

use crate::backend::{BackendError, ErrorKind};

/// A query-layer operation failed
///
/// Carries the operation name for the message and keeps the backend error
/// as its source, so callers can still tell not-found from transport trouble.
#[derive(Debug, Error)]
#[error("failed to fetch {operation}")]
pub struct FetchError {
    operation: &'static str,
    #[source]
    source: BackendError,
}

impl FetchError {
    /// Wrap a backend failure, logging it once at the query boundary
    pub(crate) fn new(operation: &'static str, source: BackendError) -> Self {
        tracing::error!("Error fetching {}: {}", operation, source);
        Self { operation, source }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
