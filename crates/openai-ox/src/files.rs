use bon::Builder;
use facade_common::{Endpoint, HttpMethod, MultipartForm, RequestOptions};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::Instant;

use crate::{
    OpenAI, OpenAIRequestError,
    shared::{Deleted, FileUpload, List, Order},
};

const FILES_URL: &str = "files";

/// Request body for `POST /files`, sent as multipart form data.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct FileCreateParams {
    /// The file to upload.
    pub file: FileUpload,
    /// Intended purpose: `assistants`, `batch`, `fine-tune`, `vision`, `user_data` or `evals`.
    #[builder(into)]
    pub purpose: String,
}

/// Query for `GET /files`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Builder)]
pub struct FileListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

/// Processing state of an uploaded file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Uploaded,
    Processed,
    Error,
    Deleted,
    #[serde(other)]
    Other,
}

impl FileStatus {
    /// Whether processing has finished, successfully or not.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Processed | Self::Error | Self::Deleted)
    }
}

/// A file stored on the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileObject {
    pub id: String,
    pub object: String,
    pub bytes: u64,
    pub created_at: u64,
    pub filename: String,
    pub purpose: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FileStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
}

/// Polling knobs for [`Files::wait_for_processing`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct WaitForProcessing {
    #[builder(default = Duration::from_secs(5))]
    pub poll_interval: Duration,
    #[builder(default = Duration::from_secs(30 * 60))]
    pub max_wait: Duration,
}

impl Default for WaitForProcessing {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Handler for the files resource, created via `openai.files()`.
#[derive(Debug, Clone, Copy)]
pub struct Files<'c> {
    client: &'c OpenAI,
}

impl<'c> Files<'c> {
    pub(crate) fn new(client: &'c OpenAI) -> Self {
        Self { client }
    }

    /// Upload a file.
    pub async fn create(
        &self,
        body: &FileCreateParams,
        options: Option<&RequestOptions>,
    ) -> Result<FileObject, OpenAIRequestError> {
        let form = body
            .file
            .attach(MultipartForm::new().text("purpose", &body.purpose), "file")?;
        let endpoint = Endpoint::new(FILES_URL, HttpMethod::Post);
        self.client
            .api_multipart(endpoint, form.build(), options)
            .await
    }

    /// Retrieve file metadata.
    pub async fn retrieve(
        &self,
        file_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<FileObject, OpenAIRequestError> {
        let endpoint = Endpoint::new(FILES_URL, HttpMethod::Get).with_segment(file_id);
        self.client.api_request(endpoint, options).await
    }

    /// List files.
    pub async fn list(
        &self,
        query: &FileListParams,
        options: Option<&RequestOptions>,
    ) -> Result<List<FileObject>, OpenAIRequestError> {
        let endpoint = Endpoint::new(FILES_URL, HttpMethod::Get).with_query(query)?;
        self.client.api_request(endpoint, options).await
    }

    /// Delete a file.
    pub async fn delete(
        &self,
        file_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Deleted, OpenAIRequestError> {
        let endpoint = Endpoint::new(FILES_URL, HttpMethod::Delete).with_segment(file_id);
        self.client.api_request(endpoint, options).await
    }

    /// Download the raw file content.
    pub async fn content(
        &self,
        file_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<bytes::Bytes, OpenAIRequestError> {
        let endpoint = Endpoint::new(FILES_URL, HttpMethod::Get)
            .with_segment(file_id)
            .with_segment("content");
        self.client
            .api_request_bytes(endpoint, None::<&()>, options)
            .await
    }

    /// Poll the file until it is processed, errored or deleted.
    ///
    /// Fails with [`OpenAIRequestError::ProcessingTimeout`] once `max_wait`
    /// has elapsed without reaching a terminal status.
    pub async fn wait_for_processing(
        &self,
        file_id: &str,
        wait: WaitForProcessing,
    ) -> Result<FileObject, OpenAIRequestError> {
        let start = Instant::now();

        loop {
            let file = self.retrieve(file_id, None).await?;
            if file.status.is_some_and(FileStatus::is_terminal) {
                return Ok(file);
            }

            let waited = start.elapsed();
            if waited >= wait.max_wait {
                return Err(OpenAIRequestError::ProcessingTimeout {
                    file_id: file_id.to_string(),
                    waited,
                });
            }

            tokio::time::sleep(wait.poll_interval).await;
        }
    }
}
