use bon::Builder;
use core::fmt;
use std::time::Duration;

use openai_ox::OpenAI;

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const ORGANIZATION_VAR: &str = "OPENAI_ORG_ID";
pub const PROJECT_VAR: &str = "OPENAI_PROJECT_ID";

/// Client-wide request timeout unless overridden per call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Startup configuration for [`crate::OpenAIService`].
///
/// Resolved once at process start. Nothing here can change after the
/// service is built.
#[derive(Clone, Builder)]
pub struct FacadeConfig {
    #[builder(into)]
    pub api_key: String,

    /// Defaults to the public OpenAI endpoint.
    #[builder(into)]
    pub base_url: Option<String>,

    /// Sent as `OpenAI-Organization`
    #[builder(into)]
    pub organization: Option<String>,

    /// Sent as `OpenAI-Project`
    #[builder(into)]
    pub project: Option<String>,

    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

impl FacadeConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        Ok(Self::builder()
            .api_key(api_key)
            .maybe_base_url(get(BASE_URL_VAR))
            .maybe_organization(get(ORGANIZATION_VAR))
            .maybe_project(get(PROJECT_VAR))
            .build())
    }

    /// Check the values without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if let Some(ref url) = self.base_url {
            validate_base_url(url)?;
        }
        Ok(())
    }

    /// Validate and build the shared client handle.
    pub(crate) fn into_client(self) -> Result<OpenAI, ConfigError> {
        self.validate()?;

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;
        let client = OpenAI::builder()
            .api_key(self.api_key)
            .maybe_base_url(self.base_url.map(|url| url.trim_end_matches('/').to_string()))
            .maybe_organization(self.organization)
            .maybe_project(self.project)
            .client(http)
            .build();
        Ok(client)
    }
}

fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = reqwest::Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme `{other}`"))),
    }
}

impl fmt::Debug for FacadeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacadeConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("organization", &self.organization)
            .field("project", &self.project)
            .field("timeout", &self.timeout)
            .finish()
    }
}
