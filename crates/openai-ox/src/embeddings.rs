use bon::Builder;
use facade_common::{Endpoint, HttpMethod, RequestOptions};
use serde::{Deserialize, Serialize};

use crate::{OpenAI, OpenAIRequestError};

const EMBEDDINGS_URL: &str = "embeddings";

/// Input for embeddings: a single string, several strings, or pre-tokenized input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Single(String),
    Multiple(Vec<String>),
    Tokens(Vec<u32>),
    TokenBatch(Vec<Vec<u32>>),
}

impl From<&str> for EmbeddingInput {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for EmbeddingInput {
    fn from(value: Vec<String>) -> Self {
        Self::Multiple(value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EncodingFormat {
    Float,
    Base64,
}

/// Request body for `POST /embeddings`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Builder)]
pub struct EmbeddingCreateParams {
    #[builder(into)]
    pub model: String,

    #[builder(into)]
    pub input: EmbeddingInput,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<EncodingFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub user: Option<String>,
}

/// Response from `POST /embeddings`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateEmbeddingResponse {
    pub object: String,
    pub data: Vec<Embedding>,
    pub model: String,
    pub usage: EmbeddingUsage,
}

/// Embedding data item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    pub object: String,
    pub embedding: Vec<f64>,
    pub index: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbeddingUsage {
    pub prompt_tokens: u32,
    pub total_tokens: u32,
}

/// Handler for the embeddings resource, created via `openai.embeddings()`.
#[derive(Debug, Clone, Copy)]
pub struct Embeddings<'c> {
    client: &'c OpenAI,
}

impl<'c> Embeddings<'c> {
    pub(crate) fn new(client: &'c OpenAI) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        body: &EmbeddingCreateParams,
        options: Option<&RequestOptions>,
    ) -> Result<CreateEmbeddingResponse, OpenAIRequestError> {
        let endpoint = Endpoint::new(EMBEDDINGS_URL, HttpMethod::Post);
        self.client.api_request_with_body(endpoint, body, options).await
    }
}
