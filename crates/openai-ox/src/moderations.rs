use bon::Builder;
use facade_common::{Endpoint, HttpMethod, RequestOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{OpenAI, OpenAIRequestError};

const MODERATIONS_URL: &str = "moderations";

/// Moderation input: one string or several
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ModerationInput {
    Single(String),
    Multiple(Vec<String>),
    /// Multi-modal input items (`text` / `image_url` objects)
    Items(Vec<serde_json::Value>),
}

impl From<&str> for ModerationInput {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

/// Request body for `POST /moderations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Builder)]
pub struct ModerationCreateParams {
    #[builder(into)]
    pub input: ModerationInput,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub model: Option<String>,
}

/// Response from `POST /moderations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModerationCreateResponse {
    pub id: String,
    pub model: String,
    pub results: Vec<Moderation>,
}

/// Moderation result for a single input.
///
/// Categories are kept as maps keyed by the API's category names
/// (`hate/threatening`, `self-harm/intent`, ...) so new categories pass through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Moderation {
    pub flagged: bool,
    pub categories: HashMap<String, bool>,
    pub category_scores: HashMap<String, f64>,
}

impl Moderation {
    /// Names of the categories that were flagged.
    pub fn flagged_categories(&self) -> Vec<&str> {
        let mut flagged: Vec<&str> = self
            .categories
            .iter()
            .filter(|&(_, &hit)| hit)
            .map(|(name, _)| name.as_str())
            .collect();
        flagged.sort_unstable();
        flagged
    }
}

/// Handler for the moderations resource, created via `openai.moderations()`.
#[derive(Debug, Clone, Copy)]
pub struct Moderations<'c> {
    client: &'c OpenAI,
}

impl<'c> Moderations<'c> {
    pub(crate) fn new(client: &'c OpenAI) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        body: &ModerationCreateParams,
        options: Option<&RequestOptions>,
    ) -> Result<ModerationCreateResponse, OpenAIRequestError> {
        let endpoint = Endpoint::new(MODERATIONS_URL, HttpMethod::Post);
        self.client.api_request_with_body(endpoint, body, options).await
    }
}
