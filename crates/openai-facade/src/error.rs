use thiserror::Error;

/// Fatal startup failures. When one is returned no service exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `OPENAI_API_KEY` is missing or blank
    #[error("Missing API key: set OPENAI_API_KEY or pass one explicitly")]
    MissingApiKey,

    /// The configured base URL is not an absolute http(s) URL
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
