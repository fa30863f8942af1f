//! Backend error taxonomy

use thiserror::Error;

/// Failure of a single call against the record store
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend could not be reached or the connection broke mid-call
    #[error("backend unreachable: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The requested record does not exist
    #[error("record not found: {0}")]
    NotFound(String),

    /// The backend rejected the filter/sort/expand parameters
    #[error("malformed query: {0}")]
    MalformedQuery(String),

    /// Any other non-success status
    #[error("unexpected backend response ({status}): {message}")]
    Unexpected { status: u16, message: String },

    /// The response body did not have the expected shape
    #[error("failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse classification of a [`BackendError`], used by callers to branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    NotFound,
    MalformedQuery,
    Unexpected,
}

impl BackendError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::MalformedQuery(_) => ErrorKind::MalformedQuery,
            Self::Unexpected { .. } | Self::Decode(_) => ErrorKind::Unexpected,
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Unexpected {
                status: err.status().map(|s| s.as_u16()).unwrap_or_default(),
                message: err.to_string(),
            };
        }
        Self::Transport(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert_eq!(
            BackendError::Transport(Box::new(io)).kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            BackendError::NotFound("abc".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            BackendError::MalformedQuery("bad".into()).kind(),
            ErrorKind::MalformedQuery
        );

        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        assert_eq!(BackendError::from(decode).kind(), ErrorKind::Unexpected);
    }
}
