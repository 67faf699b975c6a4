use bon::Builder;
use core::fmt;
use std::collections::HashMap;

use facade_common::{Endpoint, RequestBuilder, RequestConfig, RequestOptions};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    OpenAIRequestError,
    assistants::Beta,
    audio::Audio,
    batches::Batches,
    completions::Completions,
    embeddings::Embeddings,
    files::Files,
    fine_tuning::FineTuning,
    images::Images,
    models::Models,
    moderations::Moderations,
    uploads::Uploads,
};

pub const BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI API client.
///
/// The handle is immutable once built. Cloning is cheap and shares the
/// underlying connection pool.
#[derive(Clone, Builder)]
pub struct OpenAI {
    /// API key for authentication
    #[builder(into)]
    pub(crate) api_key: String,

    /// Base URL for the API (allows for custom endpoints)
    #[builder(default = BASE_URL.to_string(), into)]
    pub(crate) base_url: String,

    /// Sent as `OpenAI-Organization`
    #[builder(into)]
    pub(crate) organization: Option<String>,

    /// Sent as `OpenAI-Project`
    #[builder(into)]
    pub(crate) project: Option<String>,

    /// HTTP client for making requests
    #[builder(default)]
    pub(crate) client: reqwest::Client,

    /// Headers added to every request
    #[builder(default)]
    pub(crate) headers: HashMap<String, String>,
}

impl OpenAI {
    /// Create a new OpenAI client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new OpenAI client from the `OPENAI_API_KEY` environment variable
    pub fn from_env() -> Result<Self, OpenAIRequestError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(OpenAIRequestError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// Add a custom header to the client
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn completions(&self) -> Completions<'_> {
        Completions::new(self)
    }

    pub fn embeddings(&self) -> Embeddings<'_> {
        Embeddings::new(self)
    }

    pub fn files(&self) -> Files<'_> {
        Files::new(self)
    }

    pub fn images(&self) -> Images<'_> {
        Images::new(self)
    }

    pub fn audio(&self) -> Audio<'_> {
        Audio::new(self)
    }

    pub fn moderations(&self) -> Moderations<'_> {
        Moderations::new(self)
    }

    pub fn models(&self) -> Models<'_> {
        Models::new(self)
    }

    pub fn fine_tuning(&self) -> FineTuning<'_> {
        FineTuning::new(self)
    }

    pub fn batches(&self) -> Batches<'_> {
        Batches::new(self)
    }

    pub fn uploads(&self) -> Uploads<'_> {
        Uploads::new(self)
    }

    pub fn beta(&self) -> Beta<'_> {
        Beta::new(self)
    }
}

// Shared request plumbing used by every resource handler.
impl OpenAI {
    fn request_helper(&self) -> RequestBuilder {
        let mut config = RequestConfig::new(&self.base_url)
            .with_bearer(&self.api_key)
            .with_user_agent(concat!("openai-ox/", env!("CARGO_PKG_VERSION")));
        if let Some(ref organization) = self.organization {
            config = config.with_header("OpenAI-Organization", organization);
        }
        if let Some(ref project) = self.project {
            config = config.with_header("OpenAI-Project", project);
        }
        for (key, value) in &self.headers {
            config = config.with_header(key, value);
        }
        RequestBuilder::new(self.client.clone(), config)
    }

    /// Requests without a body
    pub(crate) async fn api_request<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        options: Option<&RequestOptions>,
    ) -> Result<T, OpenAIRequestError> {
        Ok(self.request_helper().request(&endpoint, options).await?)
    }

    /// Requests with a JSON body
    pub(crate) async fn api_request_with_body<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: &B,
        options: Option<&RequestOptions>,
    ) -> Result<T, OpenAIRequestError> {
        Ok(self
            .request_helper()
            .request_json(&endpoint, Some(body), options)
            .await?)
    }

    /// Requests returning raw bytes
    pub(crate) async fn api_request_bytes<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<bytes::Bytes, OpenAIRequestError> {
        Ok(self
            .request_helper()
            .request_bytes(&endpoint, body, options)
            .await?)
    }

    /// Multipart uploads decoded as JSON
    pub(crate) async fn api_multipart<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        form: reqwest::multipart::Form,
        options: Option<&RequestOptions>,
    ) -> Result<T, OpenAIRequestError> {
        Ok(self
            .request_helper()
            .request_multipart(&endpoint, form, options)
            .await?)
    }

    /// Multipart uploads returned as text
    pub(crate) async fn api_multipart_text(
        &self,
        endpoint: Endpoint,
        form: reqwest::multipart::Form,
        options: Option<&RequestOptions>,
    ) -> Result<String, OpenAIRequestError> {
        Ok(self
            .request_helper()
            .request_multipart_text(&endpoint, form, options)
            .await?)
    }
}

impl fmt::Debug for OpenAI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAI")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("organization", &self.organization)
            .field("project", &self.project)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
