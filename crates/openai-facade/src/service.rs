use std::sync::Arc;

use bytes::Bytes;
use openai_ox::{
    Deleted, List, OpenAI, OpenAIRequestError,
    assistants::{Assistant, AssistantCreateParams, AssistantListParams, AssistantUpdateParams},
    audio::{SpeechCreateParams, Transcription, TranscriptionCreateParams, TranslationCreateParams},
    batches::{Batch, BatchCreateParams, BatchListParams},
    completions::{Completion, CompletionCreateParams},
    embeddings::{CreateEmbeddingResponse, EmbeddingCreateParams},
    files::{FileCreateParams, FileListParams, FileObject, WaitForProcessing},
    fine_tuning::{
        CursorParams, FineTuningJob, FineTuningJobCheckpoint, FineTuningJobEvent, JobCreateParams,
    },
    images::{ImageCreateVariationParams, ImageEditParams, ImageGenerateParams, ImagesResponse},
    models::Model,
    moderations::{ModerationCreateParams, ModerationCreateResponse},
    uploads::{PartCreateParams, Upload, UploadCompleteParams, UploadCreateParams, UploadPart},
};

use crate::{
    config::FacadeConfig,
    dispatch::{dispatch, dispatch_enveloped},
    envelope::{BodyCall, Decompose, IdentifierCall, QueryCall},
    error::ConfigError,
    operation::Operation,
    result::ResultEnvelope,
};

pub const COMPLETION_CREATED: &str = "Completion created successfully";

/// The façade: one method per remote operation.
///
/// Built once at startup; the client handle inside is shared, never copied,
/// and never mutated. Cloning the service is cheap and every clone talks
/// through the same handle.
#[derive(Debug, Clone)]
pub struct OpenAIService {
    client: Arc<OpenAI>,
}

impl OpenAIService {
    /// Validate `config` and build the client. Fails fast on a missing key.
    pub fn new(config: FacadeConfig) -> Result<Self, ConfigError> {
        let client = config.into_client()?;
        log::info!(
            target: "openai_facade::service",
            "OpenAI service ready (base_url={})",
            client.base_url()
        );
        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Build from `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `OPENAI_ORG_ID` and `OPENAI_PROJECT_ID`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(FacadeConfig::from_env()?)
    }

    /// The shared remote client.
    pub fn client(&self) -> &OpenAI {
        &self.client
    }

    // Completions

    /// Create a completion, wrapped in a success envelope.
    pub async fn create_completion(
        &self,
        call: BodyCall<CompletionCreateParams>,
    ) -> Result<ResultEnvelope<Completion>, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch_enveloped(
            Operation::COMPLETIONS_CREATE,
            COMPLETION_CREATED,
            self.client.completions().create(&body, options.as_ref()),
        )
        .await
    }

    // Embeddings

    pub async fn create_embedding(
        &self,
        call: BodyCall<EmbeddingCreateParams>,
    ) -> Result<CreateEmbeddingResponse, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::EMBEDDINGS_CREATE,
            self.client.embeddings().create(&body, options.as_ref()),
        )
        .await
    }

    // Files

    pub async fn create_file(
        &self,
        call: BodyCall<FileCreateParams>,
    ) -> Result<FileObject, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::FILES_CREATE,
            self.client.files().create(&body, options.as_ref()),
        )
        .await
    }

    pub async fn retrieve_file(
        &self,
        call: impl Into<IdentifierCall>,
    ) -> Result<FileObject, OpenAIRequestError> {
        let (file_id, options) = call.into().into_parts();
        dispatch(
            Operation::FILES_RETRIEVE,
            self.client.files().retrieve(&file_id, options.as_ref()),
        )
        .await
    }

    pub async fn list_files(
        &self,
        call: QueryCall<FileListParams>,
    ) -> Result<List<FileObject>, OpenAIRequestError> {
        let (query, options) = call.into_parts();
        dispatch(
            Operation::FILES_LIST,
            self.client.files().list(&query, options.as_ref()),
        )
        .await
    }

    pub async fn delete_file(
        &self,
        call: impl Into<IdentifierCall>,
    ) -> Result<Deleted, OpenAIRequestError> {
        let (file_id, options) = call.into().into_parts();
        dispatch(
            Operation::FILES_DELETE,
            self.client.files().delete(&file_id, options.as_ref()),
        )
        .await
    }

    pub async fn get_file_content(
        &self,
        call: impl Into<IdentifierCall>,
    ) -> Result<Bytes, OpenAIRequestError> {
        let (file_id, options) = call.into().into_parts();
        dispatch(
            Operation::FILES_CONTENT,
            self.client.files().content(&file_id, options.as_ref()),
        )
        .await
    }

    /// Poll until the file reaches a terminal status. The polling itself
    /// belongs to the remote client.
    pub async fn wait_for_processing(
        &self,
        file_id: &str,
        wait: WaitForProcessing,
    ) -> Result<FileObject, OpenAIRequestError> {
        dispatch(
            Operation::FILES_WAIT_FOR_PROCESSING,
            self.client.files().wait_for_processing(file_id, wait),
        )
        .await
    }

    // Images

    pub async fn generate_image(
        &self,
        call: BodyCall<ImageGenerateParams>,
    ) -> Result<ImagesResponse, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::IMAGES_GENERATE,
            self.client.images().generate(&body, options.as_ref()),
        )
        .await
    }

    pub async fn create_image_variation(
        &self,
        call: BodyCall<ImageCreateVariationParams>,
    ) -> Result<ImagesResponse, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::IMAGES_CREATE_VARIATION,
            self.client.images().create_variation(&body, options.as_ref()),
        )
        .await
    }

    pub async fn edit_image(
        &self,
        call: BodyCall<ImageEditParams>,
    ) -> Result<ImagesResponse, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::IMAGES_EDIT,
            self.client.images().edit(&body, options.as_ref()),
        )
        .await
    }

    // Audio

    pub async fn create_transcription(
        &self,
        call: BodyCall<TranscriptionCreateParams>,
    ) -> Result<Transcription, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::AUDIO_TRANSCRIPTIONS_CREATE,
            self.client.audio().transcriptions().create(&body, options.as_ref()),
        )
        .await
    }

    pub async fn create_translation(
        &self,
        call: BodyCall<TranslationCreateParams>,
    ) -> Result<Transcription, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::AUDIO_TRANSLATIONS_CREATE,
            self.client.audio().translations().create(&body, options.as_ref()),
        )
        .await
    }

    /// Returns the encoded audio.
    pub async fn generate_speech(
        &self,
        call: BodyCall<SpeechCreateParams>,
    ) -> Result<Bytes, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::AUDIO_SPEECH_CREATE,
            self.client.audio().speech().create(&body, options.as_ref()),
        )
        .await
    }

    // Moderations

    pub async fn create_moderation(
        &self,
        call: BodyCall<ModerationCreateParams>,
    ) -> Result<ModerationCreateResponse, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::MODERATIONS_CREATE,
            self.client.moderations().create(&body, options.as_ref()),
        )
        .await
    }

    // Models

    pub async fn retrieve_model(
        &self,
        call: impl Into<IdentifierCall>,
    ) -> Result<Model, OpenAIRequestError> {
        let (model_id, options) = call.into().into_parts();
        dispatch(
            Operation::MODELS_RETRIEVE,
            self.client.models().retrieve(&model_id, options.as_ref()),
        )
        .await
    }

    /// The models listing takes no filters, so the query part is `()`.
    pub async fn list_models(&self, call: QueryCall<()>) -> Result<List<Model>, OpenAIRequestError> {
        let ((), options) = call.into_parts();
        dispatch(
            Operation::MODELS_LIST,
            self.client.models().list(options.as_ref()),
        )
        .await
    }

    pub async fn delete_model(
        &self,
        call: impl Into<IdentifierCall>,
    ) -> Result<Deleted, OpenAIRequestError> {
        let (model_id, options) = call.into().into_parts();
        dispatch(
            Operation::MODELS_DELETE,
            self.client.models().delete(&model_id, options.as_ref()),
        )
        .await
    }

    // Fine-tuning

    pub async fn create_fine_tuning_job(
        &self,
        call: BodyCall<JobCreateParams>,
    ) -> Result<FineTuningJob, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::FINE_TUNING_JOBS_CREATE,
            self.client.fine_tuning().jobs().create(&body, options.as_ref()),
        )
        .await
    }

    pub async fn retrieve_fine_tuning_job(
        &self,
        call: impl Into<IdentifierCall>,
    ) -> Result<FineTuningJob, OpenAIRequestError> {
        let (job_id, options) = call.into().into_parts();
        dispatch(
            Operation::FINE_TUNING_JOBS_RETRIEVE,
            self.client.fine_tuning().jobs().retrieve(&job_id, options.as_ref()),
        )
        .await
    }

    pub async fn list_fine_tuning_jobs(
        &self,
        call: QueryCall<CursorParams>,
    ) -> Result<List<FineTuningJob>, OpenAIRequestError> {
        let (query, options) = call.into_parts();
        dispatch(
            Operation::FINE_TUNING_JOBS_LIST,
            self.client.fine_tuning().jobs().list(&query, options.as_ref()),
        )
        .await
    }

    pub async fn cancel_fine_tuning_job(
        &self,
        call: impl Into<IdentifierCall>,
    ) -> Result<FineTuningJob, OpenAIRequestError> {
        let (job_id, options) = call.into().into_parts();
        dispatch(
            Operation::FINE_TUNING_JOBS_CANCEL,
            self.client.fine_tuning().jobs().cancel(&job_id, options.as_ref()),
        )
        .await
    }

    pub async fn list_fine_tuning_job_events(
        &self,
        job_id: &str,
        call: QueryCall<CursorParams>,
    ) -> Result<List<FineTuningJobEvent>, OpenAIRequestError> {
        let (query, options) = call.into_parts();
        dispatch(
            Operation::FINE_TUNING_JOBS_LIST_EVENTS,
            self.client
                .fine_tuning()
                .jobs()
                .list_events(job_id, &query, options.as_ref()),
        )
        .await
    }

    pub async fn list_fine_tuning_job_checkpoints(
        &self,
        job_id: &str,
        call: QueryCall<CursorParams>,
    ) -> Result<List<FineTuningJobCheckpoint>, OpenAIRequestError> {
        let (query, options) = call.into_parts();
        dispatch(
            Operation::FINE_TUNING_JOB_CHECKPOINTS_LIST,
            self.client
                .fine_tuning()
                .jobs()
                .checkpoints()
                .list(job_id, &query, options.as_ref()),
        )
        .await
    }

    // Batches

    pub async fn create_batch(
        &self,
        call: BodyCall<BatchCreateParams>,
    ) -> Result<Batch, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::BATCHES_CREATE,
            self.client.batches().create(&body, options.as_ref()),
        )
        .await
    }

    pub async fn retrieve_batch(
        &self,
        call: impl Into<IdentifierCall>,
    ) -> Result<Batch, OpenAIRequestError> {
        let (batch_id, options) = call.into().into_parts();
        dispatch(
            Operation::BATCHES_RETRIEVE,
            self.client.batches().retrieve(&batch_id, options.as_ref()),
        )
        .await
    }

    pub async fn list_batches(
        &self,
        call: QueryCall<BatchListParams>,
    ) -> Result<List<Batch>, OpenAIRequestError> {
        let (query, options) = call.into_parts();
        dispatch(
            Operation::BATCHES_LIST,
            self.client.batches().list(&query, options.as_ref()),
        )
        .await
    }

    pub async fn cancel_batch(
        &self,
        call: impl Into<IdentifierCall>,
    ) -> Result<Batch, OpenAIRequestError> {
        let (batch_id, options) = call.into().into_parts();
        dispatch(
            Operation::BATCHES_CANCEL,
            self.client.batches().cancel(&batch_id, options.as_ref()),
        )
        .await
    }

    // Uploads

    pub async fn create_upload(
        &self,
        call: BodyCall<UploadCreateParams>,
    ) -> Result<Upload, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::UPLOADS_CREATE,
            self.client.uploads().create(&body, options.as_ref()),
        )
        .await
    }

    pub async fn cancel_upload(
        &self,
        call: impl Into<IdentifierCall>,
    ) -> Result<Upload, OpenAIRequestError> {
        let (upload_id, options) = call.into().into_parts();
        dispatch(
            Operation::UPLOADS_CANCEL,
            self.client.uploads().cancel(&upload_id, options.as_ref()),
        )
        .await
    }

    pub async fn complete_upload(
        &self,
        upload_id: &str,
        call: BodyCall<UploadCompleteParams>,
    ) -> Result<Upload, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::UPLOADS_COMPLETE,
            self.client.uploads().complete(upload_id, &body, options.as_ref()),
        )
        .await
    }

    pub async fn create_part(
        &self,
        upload_id: &str,
        call: BodyCall<PartCreateParams>,
    ) -> Result<UploadPart, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::UPLOAD_PARTS_CREATE,
            self.client
                .uploads()
                .parts()
                .create(upload_id, &body, options.as_ref()),
        )
        .await
    }

    // Assistants (beta)

    pub async fn create_assistant(
        &self,
        call: BodyCall<AssistantCreateParams>,
    ) -> Result<Assistant, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::ASSISTANTS_CREATE,
            self.client.beta().assistants().create(&body, options.as_ref()),
        )
        .await
    }

    pub async fn retrieve_assistant(
        &self,
        call: impl Into<IdentifierCall>,
    ) -> Result<Assistant, OpenAIRequestError> {
        let (assistant_id, options) = call.into().into_parts();
        dispatch(
            Operation::ASSISTANTS_RETRIEVE,
            self.client
                .beta()
                .assistants()
                .retrieve(&assistant_id, options.as_ref()),
        )
        .await
    }

    pub async fn update_assistant(
        &self,
        assistant_id: &str,
        call: BodyCall<AssistantUpdateParams>,
    ) -> Result<Assistant, OpenAIRequestError> {
        let (body, options) = call.into_parts();
        dispatch(
            Operation::ASSISTANTS_UPDATE,
            self.client
                .beta()
                .assistants()
                .update(assistant_id, &body, options.as_ref()),
        )
        .await
    }

    pub async fn list_assistants(
        &self,
        call: QueryCall<AssistantListParams>,
    ) -> Result<List<Assistant>, OpenAIRequestError> {
        let (query, options) = call.into_parts();
        dispatch(
            Operation::ASSISTANTS_LIST,
            self.client.beta().assistants().list(&query, options.as_ref()),
        )
        .await
    }

    pub async fn delete_assistant(
        &self,
        call: impl Into<IdentifierCall>,
    ) -> Result<Deleted, OpenAIRequestError> {
        let (assistant_id, options) = call.into().into_parts();
        dispatch(
            Operation::ASSISTANTS_DELETE,
            self.client
                .beta()
                .assistants()
                .delete(&assistant_id, options.as_ref()),
        )
        .await
    }
}
