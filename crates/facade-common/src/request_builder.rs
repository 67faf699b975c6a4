use crate::{
    error::{self, CommonRequestError},
    options::{self, RequestOptions},
    query,
};
use reqwest::{
    Method, RequestBuilder as ReqwestRequestBuilder, Response, Url,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP method for API endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// Represents an API endpoint with its configuration
///
/// `path` is a fixed, `/`-separated route. Caller-supplied identifiers go in
/// `segments`, each of which lands in the URL as exactly one percent-encoded
/// path segment.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub path: String,
    pub segments: Vec<String>,
    pub method: HttpMethod,
    pub extra_headers: Option<HashMap<String, String>>,
    pub query_params: Option<Vec<(String, String)>>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            segments: Vec::new(),
            method,
            extra_headers: None,
            query_params: None,
        }
    }

    /// Append one path segment, encoded so that `/`, `?` and `#` stay inside it.
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers = self.extra_headers.unwrap_or_default();
        headers.insert(key.into(), value.into());
        self.extra_headers = Some(headers);
        self
    }

    pub fn with_query_params(mut self, params: Vec<(String, String)>) -> Self {
        self.query_params = Some(params);
        self
    }

    /// Attach a typed filter as query parameters.
    pub fn with_query<Q: Serialize + ?Sized>(self, query: &Q) -> Result<Self, CommonRequestError> {
        let params = query::to_query_pairs(query)?;
        Ok(self.with_query_params(params))
    }
}

/// Configuration for request building
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub base_url: String,
    pub bearer_token: Option<String>,
    pub default_headers: HashMap<String, String>,
    pub user_agent: Option<String>,
}

impl RequestConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
            default_headers: HashMap::new(),
            user_agent: None,
        }
    }

    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Generic request builder that handles common HTTP patterns
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    client: reqwest::Client,
    config: RequestConfig,
}

impl RequestBuilder {
    pub fn new(client: reqwest::Client, config: RequestConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Resolve an endpoint against the configured base URL.
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> Result<Url, CommonRequestError> {
        if let Some(segment) = endpoint
            .segments
            .iter()
            .find(|segment| matches!(segment.as_str(), "" | "." | ".."))
        {
            return Err(CommonRequestError::InvalidPathSegment(segment.to_string()));
        }

        let base_url = &self.config.base_url;
        let mut url = Url::parse(base_url)
            .map_err(|e| CommonRequestError::UrlBuild(format!("{base_url}: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| CommonRequestError::UrlBuild(format!("{base_url} cannot be a base URL")))?
            .pop_if_empty()
            .extend(endpoint.path.split('/').filter(|part| !part.is_empty()))
            .extend(&endpoint.segments);
        Ok(url)
    }

    /// Build a reqwest RequestBuilder for the given endpoint.
    ///
    /// Headers are layered defaults, then endpoint, then per-call options, a
    /// later layer replacing an earlier one for the same name.
    pub fn build_request(
        &self,
        endpoint: &Endpoint,
        options: Option<&RequestOptions>,
    ) -> Result<ReqwestRequestBuilder, CommonRequestError> {
        let url = self.endpoint_url(endpoint)?;
        let method: Method = endpoint.method.into();

        let mut req = self.client.request(method, url);

        if let Some(ref params) = endpoint.query_params {
            req = req.query(params);
        }

        let mut headers = HeaderMap::new();
        if let Some(ref token) = self.config.bearer_token {
            insert_header(&mut headers, "authorization", &format!("Bearer {token}"))?;
        }
        if let Some(ref user_agent) = self.config.user_agent {
            insert_header(&mut headers, "user-agent", user_agent)?;
        }
        for (key, value) in &self.config.default_headers {
            insert_header(&mut headers, key, value)?;
        }
        if let Some(ref extra) = endpoint.extra_headers {
            for (key, value) in extra {
                insert_header(&mut headers, key, value)?;
            }
        }

        if let Some(options) = options {
            if let Some(ref key) = options.idempotency_key {
                insert_header(&mut headers, "idempotency-key", key)?;
            }
            for (key, value) in &options.headers {
                insert_header(&mut headers, key, value)?;
            }
            if !options.query.is_empty() {
                req = req.query(&options.query);
            }
            if let Some(timeout) = options.timeout {
                req = req.timeout(timeout);
            }
        }

        Ok(req.headers(headers))
    }

    /// Execute a request with an optional JSON body and return the deserialized response
    pub async fn request_json<T: for<'de> Deserialize<'de>, B: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<T, CommonRequestError> {
        let mut req = self.build_request(endpoint, options)?;
        if let Some(body) = body {
            req = req.json(body);
        }

        options::run_cancellable(options, async move {
            let res = req.send().await?;
            Self::handle_response(res).await
        })
        .await
    }

    /// Execute a request without body and return the deserialized response
    pub async fn request<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &Endpoint,
        options: Option<&RequestOptions>,
    ) -> Result<T, CommonRequestError> {
        self.request_json(endpoint, None::<&()>, options).await
    }

    /// Execute a request and return the raw body bytes (file downloads, synthesized speech)
    pub async fn request_bytes<B: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<bytes::Bytes, CommonRequestError> {
        let mut req = self.build_request(endpoint, options)?;
        if let Some(body) = body {
            req = req.json(body);
        }

        options::run_cancellable(options, async move {
            let res = req.send().await?;
            let status = res.status();
            let bytes = res.bytes().await?;
            if status.is_success() {
                Ok(bytes)
            } else {
                Err(error::parse_error_response(status, &bytes))
            }
        })
        .await
    }

    /// Execute a multipart form request and return the deserialized response
    pub async fn request_multipart<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &Endpoint,
        form: reqwest::multipart::Form,
        options: Option<&RequestOptions>,
    ) -> Result<T, CommonRequestError> {
        let req = self.build_request(endpoint, options)?.multipart(form);

        options::run_cancellable(options, async move {
            let res = req.send().await?;
            Self::handle_response(res).await
        })
        .await
    }

    /// Execute a multipart form request and return the body as text
    pub async fn request_multipart_text(
        &self,
        endpoint: &Endpoint,
        form: reqwest::multipart::Form,
        options: Option<&RequestOptions>,
    ) -> Result<String, CommonRequestError> {
        let req = self.build_request(endpoint, options)?.multipart(form);

        options::run_cancellable(options, async move {
            let res = req.send().await?;
            let status = res.status();
            let bytes = res.bytes().await?;
            if status.is_success() {
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            } else {
                Err(error::parse_error_response(status, &bytes))
            }
        })
        .await
    }

    /// Handle response and parse errors
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        res: Response,
    ) -> Result<T, CommonRequestError> {
        let status = res.status();
        let bytes = res.bytes().await?;

        if status.is_success() {
            serde_json::from_slice::<T>(&bytes).map_err(|e| {
                CommonRequestError::UnexpectedResponse(format!(
                    "HTTP {} but failed to decode JSON: {}; body: {}",
                    status.as_u16(),
                    e,
                    String::from_utf8_lossy(&bytes)
                ))
            })
        } else {
            Err(error::parse_error_response(status, &bytes))
        }
    }
}

fn insert_header(headers: &mut HeaderMap, key: &str, value: &str) -> Result<(), CommonRequestError> {
    let name = HeaderName::from_bytes(key.as_bytes())
        .map_err(|e| CommonRequestError::InvalidHeader(format!("{key}: {e}")))?;
    let value = HeaderValue::from_str(value)
        .map_err(|e| CommonRequestError::InvalidHeader(format!("{key}: {e}")))?;
    headers.insert(name, value);
    Ok(())
}

/// Helper struct for building multipart forms
#[derive(Debug)]
pub struct MultipartForm {
    form: reqwest::multipart::Form,
}

impl MultipartForm {
    /// Create a new multipart form
    pub fn new() -> Self {
        Self {
            form: reqwest::multipart::Form::new(),
        }
    }

    /// Add a text field
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form = self.form.text(name.into(), value.into());
        self
    }

    /// Add a text field when a value is present
    pub fn text_opt(self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.text(name, value.to_string()),
            None => self,
        }
    }

    /// Add a file from bytes
    pub fn file_from_bytes(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        let part = reqwest::multipart::Part::bytes(data).file_name(filename.into());
        self.form = self.form.part(name.into(), part);
        self
    }

    /// Add a file from bytes with an explicit mime type
    pub fn file_from_bytes_with_mime(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        data: Vec<u8>,
        mime_type: &str,
    ) -> Result<Self, CommonRequestError> {
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(filename.into())
            .mime_str(mime_type)
            .map_err(|_| CommonRequestError::InvalidMimeType(mime_type.to_string()))?;
        self.form = self.form.part(name.into(), part);
        Ok(self)
    }

    /// Build the final form
    pub fn build(self) -> reqwest::multipart::Form {
        self.form
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}
