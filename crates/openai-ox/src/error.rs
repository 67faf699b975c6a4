use std::time::Duration;

use facade_common::CommonRequestError;
use thiserror::Error;

/// Errors that can occur when making requests to the OpenAI API
#[derive(Debug, Error)]
pub enum OpenAIRequestError {
    /// HTTP client errors
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),

    /// Invalid request errors from the API
    #[error("Invalid request error: {message}")]
    InvalidRequestError {
        status: u16,
        code: Option<String>,
        message: String,
        r#type: Option<String>,
        param: Option<String>,
    },

    /// Authentication error (HTTP 401)
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Permission denied (HTTP 403)
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Resource not found (HTTP 404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// Server side failure (HTTP 5xx)
    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// Unexpected response from the API
    #[error("Unexpected response from API: {0}")]
    UnexpectedResponse(String),

    /// Headers, query parameters or MIME types rejected before sending
    #[error("Invalid request parameters: {0}")]
    InvalidParameters(String),

    /// Missing API key
    #[error("Missing API key")]
    MissingApiKey,

    /// The caller's cancellation token fired
    #[error("Request cancelled")]
    Cancelled,

    /// `wait_for_processing` gave up
    #[error("Giving up on waiting for file {file_id} to finish processing after {waited:?}")]
    ProcessingTimeout { file_id: String, waited: Duration },
}

impl OpenAIRequestError {
    /// HTTP status code reported by the API, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidRequestError { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Authentication(_) => Some(401),
            Self::PermissionDenied(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::RateLimit(_) => Some(429),
            Self::ReqwestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<CommonRequestError> for OpenAIRequestError {
    fn from(err: CommonRequestError) -> Self {
        match err {
            CommonRequestError::Http(e) => Self::ReqwestError(e),
            CommonRequestError::Json(e) => Self::SerdeError(e),
            CommonRequestError::Api {
                status,
                message,
                r#type,
                code,
                param,
            } => match status {
                401 => Self::Authentication(message),
                403 => Self::PermissionDenied(message),
                404 => Self::NotFound(message),
                429 => Self::RateLimit(message),
                500..=599 => Self::Server { status, message },
                _ => Self::InvalidRequestError {
                    status,
                    code,
                    message,
                    r#type,
                    param,
                },
            },
            CommonRequestError::UnexpectedResponse(msg) => Self::UnexpectedResponse(msg),
            CommonRequestError::InvalidMimeType(msg)
            | CommonRequestError::InvalidHeader(msg)
            | CommonRequestError::InvalidQuery(msg) => Self::InvalidParameters(msg),
            err @ (CommonRequestError::UrlBuild(_) | CommonRequestError::InvalidPathSegment(_)) => {
                Self::InvalidParameters(err.to_string())
            }
            CommonRequestError::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> CommonRequestError {
        CommonRequestError::Api {
            status,
            message: "boom".to_string(),
            r#type: Some("invalid_request_error".to_string()),
            code: None,
            param: None,
        }
    }

    #[test]
    fn classifies_api_statuses() {
        assert!(matches!(OpenAIRequestError::from(api(401)), OpenAIRequestError::Authentication(_)));
        assert!(matches!(OpenAIRequestError::from(api(403)), OpenAIRequestError::PermissionDenied(_)));
        assert!(matches!(OpenAIRequestError::from(api(404)), OpenAIRequestError::NotFound(_)));
        assert!(matches!(OpenAIRequestError::from(api(429)), OpenAIRequestError::RateLimit(_)));
        assert!(matches!(
            OpenAIRequestError::from(api(503)),
            OpenAIRequestError::Server { status: 503, .. }
        ));
        assert!(matches!(
            OpenAIRequestError::from(api(400)),
            OpenAIRequestError::InvalidRequestError { status: 400, .. }
        ));
    }

    #[test]
    fn rejected_path_segment_is_a_parameter_error() {
        let err = OpenAIRequestError::from(CommonRequestError::InvalidPathSegment("..".to_string()));
        match err {
            OpenAIRequestError::InvalidParameters(message) => assert!(message.contains("\"..\"")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_round_trips() {
        assert_eq!(OpenAIRequestError::from(api(404)).status(), Some(404));
        assert_eq!(OpenAIRequestError::Cancelled.status(), None);
    }
}
