use bon::Builder;
use facade_common::{Endpoint, HttpMethod, RequestOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{OpenAI, OpenAIRequestError, shared::List};

const BATCHES_URL: &str = "batches";

/// A request to create a new batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Builder)]
pub struct BatchCreateParams {
    /// ID of an uploaded JSONL file with purpose `batch`.
    #[builder(into)]
    pub input_file_id: String,
    /// Endpoint every request line targets, e.g. `/v1/chat/completions`.
    #[builder(into)]
    pub endpoint: String,
    /// Only `24h` is currently accepted.
    #[builder(into, default = "24h".to_string())]
    pub completion_window: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// Query for `GET /batches`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Builder)]
pub struct BatchListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// The status of a batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Validating,
    Failed,
    InProgress,
    Finalizing,
    Completed,
    Expired,
    Cancelling,
    Cancelled,
    #[serde(other)]
    Other,
}

/// The counts of requests in a batch, categorized by status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestCounts {
    pub total: u32,
    pub completed: u32,
    pub failed: u32,
}

/// Represents a batch object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Batch {
    pub id: String,
    pub object: String,
    pub endpoint: String,
    pub input_file_id: String,
    pub completion_window: String,
    pub status: BatchStatus,
    pub created_at: u64,
    #[serde(default)]
    pub output_file_id: Option<String>,
    #[serde(default)]
    pub error_file_id: Option<String>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
    #[serde(default)]
    pub in_progress_at: Option<u64>,
    #[serde(default)]
    pub expires_at: Option<u64>,
    #[serde(default)]
    pub finalizing_at: Option<u64>,
    #[serde(default)]
    pub completed_at: Option<u64>,
    #[serde(default)]
    pub failed_at: Option<u64>,
    #[serde(default)]
    pub expired_at: Option<u64>,
    #[serde(default)]
    pub cancelling_at: Option<u64>,
    #[serde(default)]
    pub cancelled_at: Option<u64>,
    #[serde(default)]
    pub request_counts: Option<RequestCounts>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
}

/// Handler for the batches resource, created via `openai.batches()`.
#[derive(Debug, Clone, Copy)]
pub struct Batches<'c> {
    client: &'c OpenAI,
}

impl<'c> Batches<'c> {
    pub(crate) fn new(client: &'c OpenAI) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        body: &BatchCreateParams,
        options: Option<&RequestOptions>,
    ) -> Result<Batch, OpenAIRequestError> {
        let endpoint = Endpoint::new(BATCHES_URL, HttpMethod::Post);
        self.client.api_request_with_body(endpoint, body, options).await
    }

    pub async fn retrieve(
        &self,
        batch_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Batch, OpenAIRequestError> {
        let endpoint = Endpoint::new(BATCHES_URL, HttpMethod::Get).with_segment(batch_id);
        self.client.api_request(endpoint, options).await
    }

    pub async fn list(
        &self,
        query: &BatchListParams,
        options: Option<&RequestOptions>,
    ) -> Result<List<Batch>, OpenAIRequestError> {
        let endpoint = Endpoint::new(BATCHES_URL, HttpMethod::Get).with_query(query)?;
        self.client.api_request(endpoint, options).await
    }

    /// Cancel an in-progress batch. The batch moves to `cancelling` first.
    pub async fn cancel(
        &self,
        batch_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Batch, OpenAIRequestError> {
        let endpoint = Endpoint::new(BATCHES_URL, HttpMethod::Post)
            .with_segment(batch_id)
            .with_segment("cancel");
        self.client.api_request(endpoint, options).await
    }
}
