use serde::Deserialize;
use thiserror::Error;

/// Errors raised while building, sending or decoding a remote request
#[derive(Error, Debug)]
pub enum CommonRequestError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with a non-success status
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        r#type: Option<String>,
        code: Option<String>,
        param: Option<String>,
    },

    /// Success status but a body that could not be decoded
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Invalid MIME type for file upload
    #[error("Invalid MIME type: {0}")]
    InvalidMimeType(String),

    /// Header name or value rejected by the HTTP layer
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Base URL could not be parsed or extended
    #[error("Invalid URL: {0}")]
    UrlBuild(String),

    /// Identifier that would escape its path segment
    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// Query parameters could not be flattened
    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),

    /// The caller's cancellation token fired before the call completed
    #[error("Request cancelled")]
    Cancelled,
}

#[derive(Debug, Deserialize)]
struct ApiErrorPayload {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
    #[serde(default)]
    r#type: Option<String>,
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    param: Option<String>,
}

/// Parse error response from HTTP status and body
pub fn parse_error_response(status: reqwest::StatusCode, body: &bytes::Bytes) -> CommonRequestError {
    let status = status.as_u16();

    if let Ok(ApiErrorPayload { error: Some(detail) }) = serde_json::from_slice(body) {
        // `code` is a string for most errors but a number for some legacy ones
        let code = detail.code.and_then(|code| match code {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        });
        return CommonRequestError::Api {
            status,
            message: detail
                .message
                .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned()),
            r#type: detail.r#type,
            code,
            param: detail.param,
        };
    }

    CommonRequestError::Api {
        status,
        message: String::from_utf8_lossy(body).into_owned(),
        r#type: None,
        code: None,
        param: None,
    }
}
