use bon::Builder;
use facade_common::{Endpoint, HttpMethod, RequestOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{OpenAI, OpenAIRequestError, shared::List};

const JOBS_URL: &str = "fine_tuning/jobs";

/// Request body for `POST /fine_tuning/jobs`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Builder)]
pub struct JobCreateParams {
    #[builder(into)]
    pub model: String,

    #[builder(into)]
    pub training_file: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub validation_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperparameters: Option<Hyperparameters>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub suffix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// Fine-tuning method configuration (`supervised`, `dpo`, ...), passed through as-is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<serde_json::Value>,

    /// Integrations such as Weights & Biases, passed through as-is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrations: Option<Vec<serde_json::Value>>,
}

/// A hyperparameter is either `"auto"` or a concrete number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum HyperparameterValue {
    Auto(String),
    Number(f64),
}

/// Fine-tuning hyperparameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Hyperparameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_epochs: Option<HyperparameterValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<HyperparameterValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_rate_multiplier: Option<HyperparameterValue>,
}

/// Cursor query shared by the job, event and checkpoint listings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Builder)]
pub struct CursorParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    ValidatingFiles,
    Queued,
    Running,
    Succeeded,
    Failed,
    Cancelled,
    #[serde(other)]
    Other,
}

/// Fine-tuning job information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FineTuningJob {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    #[serde(default)]
    pub finished_at: Option<u64>,
    pub model: String,
    #[serde(default)]
    pub fine_tuned_model: Option<String>,
    pub organization_id: String,
    pub status: JobStatus,
    #[serde(default)]
    pub hyperparameters: Option<Hyperparameters>,
    pub training_file: String,
    #[serde(default)]
    pub validation_file: Option<String>,
    #[serde(default)]
    pub result_files: Vec<String>,
    #[serde(default)]
    pub trained_tokens: Option<u64>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// An event in a job's log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FineTuningJobEvent {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    pub level: String,
    pub message: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// A model checkpoint saved during training
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FineTuningJobCheckpoint {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    pub fine_tuned_model_checkpoint: String,
    pub fine_tuning_job_id: String,
    pub step_number: u64,
    #[serde(default)]
    pub metrics: HashMap<String, f64>,
}

/// Handler for the fine-tuning resource, created via `openai.fine_tuning()`.
#[derive(Debug, Clone, Copy)]
pub struct FineTuning<'c> {
    client: &'c OpenAI,
}

impl<'c> FineTuning<'c> {
    pub(crate) fn new(client: &'c OpenAI) -> Self {
        Self { client }
    }

    pub fn jobs(&self) -> Jobs<'c> {
        Jobs {
            client: self.client,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Jobs<'c> {
    client: &'c OpenAI,
}

impl<'c> Jobs<'c> {
    pub fn checkpoints(&self) -> Checkpoints<'c> {
        Checkpoints {
            client: self.client,
        }
    }

    pub async fn create(
        &self,
        body: &JobCreateParams,
        options: Option<&RequestOptions>,
    ) -> Result<FineTuningJob, OpenAIRequestError> {
        let endpoint = Endpoint::new(JOBS_URL, HttpMethod::Post);
        self.client.api_request_with_body(endpoint, body, options).await
    }

    pub async fn retrieve(
        &self,
        job_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<FineTuningJob, OpenAIRequestError> {
        let endpoint = Endpoint::new(JOBS_URL, HttpMethod::Get).with_segment(job_id);
        self.client.api_request(endpoint, options).await
    }

    pub async fn list(
        &self,
        query: &CursorParams,
        options: Option<&RequestOptions>,
    ) -> Result<List<FineTuningJob>, OpenAIRequestError> {
        let endpoint = Endpoint::new(JOBS_URL, HttpMethod::Get).with_query(query)?;
        self.client.api_request(endpoint, options).await
    }

    pub async fn cancel(
        &self,
        job_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<FineTuningJob, OpenAIRequestError> {
        let endpoint = Endpoint::new(JOBS_URL, HttpMethod::Post)
            .with_segment(job_id)
            .with_segment("cancel");
        self.client.api_request(endpoint, options).await
    }

    pub async fn list_events(
        &self,
        job_id: &str,
        query: &CursorParams,
        options: Option<&RequestOptions>,
    ) -> Result<List<FineTuningJobEvent>, OpenAIRequestError> {
        let endpoint = Endpoint::new(JOBS_URL, HttpMethod::Get)
            .with_segment(job_id)
            .with_segment("events")
            .with_query(query)?;
        self.client.api_request(endpoint, options).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Checkpoints<'c> {
    client: &'c OpenAI,
}

impl Checkpoints<'_> {
    pub async fn list(
        &self,
        job_id: &str,
        query: &CursorParams,
        options: Option<&RequestOptions>,
    ) -> Result<List<FineTuningJobCheckpoint>, OpenAIRequestError> {
        let endpoint = Endpoint::new(JOBS_URL, HttpMethod::Get)
            .with_segment(job_id)
            .with_segment("checkpoints")
            .with_query(query)?;
        self.client.api_request(endpoint, options).await
    }
}
