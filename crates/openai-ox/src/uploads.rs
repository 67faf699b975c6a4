use bon::Builder;
use facade_common::{Endpoint, HttpMethod, MultipartForm, RequestOptions};
use serde::{Deserialize, Serialize};

use crate::{OpenAI, OpenAIRequestError, files::FileObject};

const UPLOADS_URL: &str = "uploads";

/// Request body for `POST /uploads`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Builder)]
pub struct UploadCreateParams {
    /// Total number of bytes that will be uploaded across all parts.
    pub bytes: u64,
    #[builder(into)]
    pub filename: String,
    #[builder(into)]
    pub mime_type: String,
    #[builder(into)]
    pub purpose: String,
}

/// Request body for `POST /uploads/{id}/complete`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Builder)]
pub struct UploadCompleteParams {
    /// Part IDs in the order the bytes should be assembled.
    pub part_ids: Vec<String>,
    /// Optional checksum verified by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub md5: Option<String>,
}

/// Request body for `POST /uploads/{id}/parts`, sent as multipart form data.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct PartCreateParams {
    /// Chunk content, at most 64 MB.
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Pending,
    Completed,
    Cancelled,
    Expired,
    #[serde(other)]
    Other,
}

/// An in-progress or finished multi-part upload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Upload {
    pub id: String,
    pub object: String,
    pub bytes: u64,
    pub created_at: u64,
    pub filename: String,
    pub purpose: String,
    pub status: UploadStatus,
    pub expires_at: u64,
    /// The resulting file once the upload is completed.
    #[serde(default)]
    pub file: Option<FileObject>,
}

/// One chunk of an upload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadPart {
    pub id: String,
    pub object: String,
    pub created_at: u64,
    pub upload_id: String,
}

/// Handler for the uploads resource, created via `openai.uploads()`.
#[derive(Debug, Clone, Copy)]
pub struct Uploads<'c> {
    client: &'c OpenAI,
}

impl<'c> Uploads<'c> {
    pub(crate) fn new(client: &'c OpenAI) -> Self {
        Self { client }
    }

    pub fn parts(&self) -> Parts<'c> {
        Parts {
            client: self.client,
        }
    }

    pub async fn create(
        &self,
        body: &UploadCreateParams,
        options: Option<&RequestOptions>,
    ) -> Result<Upload, OpenAIRequestError> {
        let endpoint = Endpoint::new(UPLOADS_URL, HttpMethod::Post);
        self.client.api_request_with_body(endpoint, body, options).await
    }

    pub async fn cancel(
        &self,
        upload_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Upload, OpenAIRequestError> {
        let endpoint = Endpoint::new(UPLOADS_URL, HttpMethod::Post)
            .with_segment(upload_id)
            .with_segment("cancel");
        self.client.api_request(endpoint, options).await
    }

    pub async fn complete(
        &self,
        upload_id: &str,
        body: &UploadCompleteParams,
        options: Option<&RequestOptions>,
    ) -> Result<Upload, OpenAIRequestError> {
        let endpoint = Endpoint::new(UPLOADS_URL, HttpMethod::Post)
            .with_segment(upload_id)
            .with_segment("complete");
        self.client.api_request_with_body(endpoint, body, options).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Parts<'c> {
    client: &'c OpenAI,
}

impl Parts<'_> {
    pub async fn create(
        &self,
        upload_id: &str,
        body: &PartCreateParams,
        options: Option<&RequestOptions>,
    ) -> Result<UploadPart, OpenAIRequestError> {
        let form = MultipartForm::new().file_from_bytes("data", "blob", body.data.clone());
        let endpoint = Endpoint::new(UPLOADS_URL, HttpMethod::Post)
            .with_segment(upload_id)
            .with_segment("parts");
        self.client
            .api_multipart(endpoint, form.build(), options)
            .await
    }
}
