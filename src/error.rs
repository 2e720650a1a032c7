use std::error::Error as StdError;

use reqwest::StatusCode;
use thiserror::Error;

/// The steplib spec body could not be decoded.
#[derive(Debug, Error)]
#[error("unable to decode manifest at `{path}`")]
pub struct DecodeError {
    path: String,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    pub(crate) fn trailing(source: serde_json::Error) -> Self {
        Self {
            path: ".".to_owned(),
            source,
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for DecodeError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        Self {
            path,
            source: err.into_inner(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with unexpected status {status}")]
    Status { url: String, status: StatusCode },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl FetchError {
    /// Transport failures and non-success responses.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { .. })
    }
}

/// Render an error followed by each of its causes, separated by `: `.
#[must_use]
pub fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chains_decode_causes() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FetchError::from(DecodeError::trailing(source));

        let rendered = error_chain(&err);
        assert!(rendered.starts_with("unable to decode manifest at `.`: "));
        assert!(rendered.contains("EOF while parsing"));
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(!err.is_network());
    }

    #[test]
    fn status_errors_count_as_network_failures() {
        let err = FetchError::Status {
            url: "https://example.com/spec.json".into(),
            status: StatusCode::NOT_FOUND,
        };
        assert!(err.is_network());
        assert_eq!(
            err.to_string(),
            "https://example.com/spec.json answered with unexpected status 404 Not Found"
        );
    }
}
