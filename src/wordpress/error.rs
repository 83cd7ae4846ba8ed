use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the CMS.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{0} not found")]
    NotFound(String),
    /// The CMS refused an authoring request and said why.
    #[error("CMS rejected request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

impl FetchError {
    /// Whether the CMS told us the resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Status { status, .. } | Self::Rejected { status, .. } => {
                *status == StatusCode::NOT_FOUND
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Whether the CMS rejected our credentials.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Status { status, .. } | Self::Rejected { status, .. } => {
                *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(FetchError::NotFound("post 'x'".to_string()).is_not_found());
        assert!(FetchError::Status {
            url: "u".to_string(),
            status: StatusCode::NOT_FOUND
        }
        .is_not_found());
        assert!(!FetchError::Status {
            url: "u".to_string(),
            status: StatusCode::BAD_GATEWAY
        }
        .is_not_found());
    }

    #[test]
    fn test_timeout_message() {
        let err = FetchError::Timeout {
            url: "https://cms.example.com/posts".to_string(),
            timeout: Duration::from_secs(10),
        };
        assert!(err.is_timeout());
        assert_eq!(
            err.to_string(),
            "request to https://cms.example.com/posts timed out after 10s"
        );
    }

    #[test]
    fn test_unauthorized_classification() {
        let err = FetchError::Rejected {
            status: StatusCode::FORBIDDEN,
            message: "Sorry, you are not allowed to create posts as this user.".to_string(),
        };
        assert!(err.is_unauthorized());
        assert!(!err.is_not_found());
    }
}
