//! Beta Assistants API.
//!
//! Every request carries the `OpenAI-Beta: assistants=v2` header.

use bon::Builder;
use facade_common::{Endpoint, HttpMethod, RequestOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{
    OpenAI, OpenAIRequestError,
    shared::{Deleted, List, Order},
};

const ASSISTANTS_URL: &str = "assistants";
const BETA_HEADER: (&str, &str) = ("OpenAI-Beta", "assistants=v2");

/// Request body for `POST /assistants`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Builder)]
pub struct AssistantCreateParams {
    #[builder(into)]
    pub model: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub instructions: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub tools: Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_resources: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<serde_json::Value>,
}

/// Request body for `POST /assistants/{id}`. Only the fields that are set change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Builder)]
pub struct AssistantUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub instructions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<serde_json::Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_resources: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<serde_json::Value>,
}

/// Query for `GET /assistants`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Builder)]
pub struct AssistantListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub before: Option<String>,
}

/// Assistant information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assistant {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub model: String,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub tools: Vec<serde_json::Value>,
    #[serde(default)]
    pub tool_resources: Option<serde_json::Value>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub top_p: Option<f32>,
    #[serde(default)]
    pub response_format: Option<serde_json::Value>,
}

/// Handler for the beta namespace, created via `openai.beta()`.
#[derive(Debug, Clone, Copy)]
pub struct Beta<'c> {
    client: &'c OpenAI,
}

impl<'c> Beta<'c> {
    pub(crate) fn new(client: &'c OpenAI) -> Self {
        Self { client }
    }

    pub fn assistants(&self) -> Assistants<'c> {
        Assistants {
            client: self.client,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Assistants<'c> {
    client: &'c OpenAI,
}

impl Assistants<'_> {
    fn endpoint(path: impl Into<String>, method: HttpMethod) -> Endpoint {
        Endpoint::new(path, method).with_header(BETA_HEADER.0, BETA_HEADER.1)
    }

    pub async fn create(
        &self,
        body: &AssistantCreateParams,
        options: Option<&RequestOptions>,
    ) -> Result<Assistant, OpenAIRequestError> {
        let endpoint = Self::endpoint(ASSISTANTS_URL, HttpMethod::Post);
        self.client.api_request_with_body(endpoint, body, options).await
    }

    pub async fn retrieve(
        &self,
        assistant_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Assistant, OpenAIRequestError> {
        let endpoint = Self::endpoint(ASSISTANTS_URL, HttpMethod::Get).with_segment(assistant_id);
        self.client.api_request(endpoint, options).await
    }

    pub async fn update(
        &self,
        assistant_id: &str,
        body: &AssistantUpdateParams,
        options: Option<&RequestOptions>,
    ) -> Result<Assistant, OpenAIRequestError> {
        let endpoint = Self::endpoint(ASSISTANTS_URL, HttpMethod::Post).with_segment(assistant_id);
        self.client.api_request_with_body(endpoint, body, options).await
    }

    pub async fn list(
        &self,
        query: &AssistantListParams,
        options: Option<&RequestOptions>,
    ) -> Result<List<Assistant>, OpenAIRequestError> {
        let endpoint = Self::endpoint(ASSISTANTS_URL, HttpMethod::Get).with_query(query)?;
        self.client.api_request(endpoint, options).await
    }

    pub async fn delete(
        &self,
        assistant_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Deleted, OpenAIRequestError> {
        let endpoint =
            Self::endpoint(ASSISTANTS_URL, HttpMethod::Delete).with_segment(assistant_id);
        self.client.api_request(endpoint, options).await
    }
}
