use facade_common::{Endpoint, HttpMethod, RequestOptions};
use serde::{Deserialize, Serialize};

use crate::{
    OpenAI, OpenAIRequestError,
    shared::{Deleted, List},
};

const MODELS_URL: &str = "models";

/// Model information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Model {
    pub id: String,
    pub object: String,
    pub created: u64,
    pub owned_by: String,
}

/// Handler for the models resource, created via `openai.models()`.
#[derive(Debug, Clone, Copy)]
pub struct Models<'c> {
    client: &'c OpenAI,
}

impl<'c> Models<'c> {
    pub(crate) fn new(client: &'c OpenAI) -> Self {
        Self { client }
    }

    pub async fn retrieve(
        &self,
        model_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Model, OpenAIRequestError> {
        let endpoint = Endpoint::new(MODELS_URL, HttpMethod::Get).with_segment(model_id);
        self.client.api_request(endpoint, options).await
    }

    pub async fn list(&self, options: Option<&RequestOptions>) -> Result<List<Model>, OpenAIRequestError> {
        let endpoint = Endpoint::new(MODELS_URL, HttpMethod::Get);
        self.client.api_request(endpoint, options).await
    }

    /// Delete a fine-tuned model owned by the caller's organization.
    pub async fn delete(
        &self,
        model_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Deleted, OpenAIRequestError> {
        let endpoint = Endpoint::new(MODELS_URL, HttpMethod::Delete).with_segment(model_id);
        self.client.api_request(endpoint, options).await
    }
}
